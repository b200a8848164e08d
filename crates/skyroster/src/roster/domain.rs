use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for passengers so seat maps cannot be keyed by loose strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PassengerId(pub String);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cabin class requested by a passenger and carried by every seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    Business,
    Economy,
}

impl SeatClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Economy => "economy",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Crew category used when reporting headcount shortages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewCategory {
    Pilots,
    CabinCrew,
}

impl CrewCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pilots => "pilots",
            Self::CabinCrew => "cabin crew",
        }
    }
}

impl fmt::Display for CrewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cabin's seat grid: row count and ordered column letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinLayout {
    pub rows: u32,
    pub columns: Vec<char>,
}

impl CabinLayout {
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns.len()
    }
}

/// Static description of one aircraft type: seat grids, crew headcount
/// bounds, and the standard menu served on board (empty means no catering).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub type_name: String,
    pub business: CabinLayout,
    pub economy: CabinLayout,
    pub min_pilots: u32,
    pub max_pilots: u32,
    pub min_cabin_crew: u32,
    pub max_cabin_crew: u32,
    #[serde(default)]
    pub standard_menu: Vec<String>,
}

impl AircraftConfig {
    /// Reject configurations the engine cannot work with. A single empty
    /// cabin is allowed; its would-be passengers are reported unseated.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.min_pilots > self.max_pilots {
            return Err(InvalidConfiguration::CrewBoundsInverted {
                category: CrewCategory::Pilots,
                min: self.min_pilots,
                max: self.max_pilots,
            });
        }
        if self.min_cabin_crew > self.max_cabin_crew {
            return Err(InvalidConfiguration::CrewBoundsInverted {
                category: CrewCategory::CabinCrew,
                min: self.min_cabin_crew,
                max: self.max_cabin_crew,
            });
        }
        for (class, layout) in [
            (SeatClass::Business, &self.business),
            (SeatClass::Economy, &self.economy),
        ] {
            let mut seen = BTreeSet::new();
            for column in &layout.columns {
                if !seen.insert(*column) {
                    return Err(InvalidConfiguration::DuplicateColumn {
                        class,
                        column: *column,
                    });
                }
            }
        }
        if self.seat_count() == 0 {
            return Err(InvalidConfiguration::NoSeats {
                type_name: self.type_name.clone(),
            });
        }
        Ok(())
    }

    pub fn layout(&self, class: SeatClass) -> &CabinLayout {
        match class {
            SeatClass::Business => &self.business,
            SeatClass::Economy => &self.economy,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.business.capacity() + self.economy.capacity()
    }

    /// Row number of the first row in a cabin. Economy numbering continues
    /// immediately after the last business row.
    pub fn first_row(&self, class: SeatClass) -> u32 {
        match class {
            SeatClass::Business => 1,
            SeatClass::Economy => self.business.rows + 1,
        }
    }

    /// Enumerate seat identities for a cabin in row-major order, e.g.
    /// `1A, 1B, 2A, 2B` for a 2-row `[A, B]` layout.
    pub fn seat_identities(&self, class: SeatClass) -> Vec<String> {
        let layout = self.layout(class);
        let first_row = self.first_row(class);
        let mut seats = Vec::with_capacity(layout.capacity());
        for row in 0..layout.rows {
            for column in &layout.columns {
                seats.push(format!("{}{}", first_row + row, column));
            }
        }
        seats
    }

    pub fn has_catering(&self) -> bool {
        !self.standard_menu.is_empty()
    }
}

/// Fatal configuration defects, surfaced before any assignment runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("{category} bounds inverted: min {min} exceeds max {max}")]
    CrewBoundsInverted {
        category: CrewCategory,
        min: u32,
        max: u32,
    },
    #[error("{class} cabin repeats column letter {column}")]
    DuplicateColumn { class: SeatClass, column: char },
    #[error("aircraft {type_name} has no seats in either cabin")]
    NoSeats { type_name: String },
}

/// Explicit table of aircraft types, supplied by the caller rather than
/// baked into the engine as a hidden default.
#[derive(Debug, Clone, Default)]
pub struct FleetCatalog {
    types: BTreeMap<String, AircraftConfig>,
}

impl FleetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, config: AircraftConfig) -> Self {
        self.types.insert(config.type_name.clone(), config);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&AircraftConfig> {
        self.types.get(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

/// Pilot seniority, highest first in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Senior,
    Junior,
    Trainee,
}

impl Seniority {
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Senior => 0,
            Self::Junior => 1,
            Self::Trainee => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Senior => "senior",
            Self::Junior => "junior",
            Self::Trainee => "trainee",
        }
    }
}

/// Licensed flight-deck crew. The vehicle restriction names exactly one
/// aircraft type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    pub id: String,
    pub name: String,
    pub vehicle_restriction: String,
    pub allowed_range_km: u32,
    pub seniority: Seniority,
}

/// Cabin-crew role; chefs carry recipes for the on-board menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewRole {
    Chief,
    Regular,
    Chef,
}

impl CrewRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chief => "chief",
            Self::Regular => "regular",
            Self::Chef => "chef",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinCrewMember {
    pub id: String,
    pub name: String,
    pub role: CrewRole,
    pub permitted_vehicles: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<String>,
}

/// Passenger relationship variant, validated at manifest construction so
/// downstream logic never re-checks optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelerKind {
    #[default]
    Unaccompanied,
    Infant {
        guardian: PassengerId,
    },
    GroupMember {
        affiliates: Vec<PassengerId>,
    },
}

/// One traveler on the flight, possibly pre-seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub seat_class: SeatClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(default)]
    pub kind: TravelerKind,
}

impl Passenger {
    /// Infants ride on a guardian's lap and never independently occupy a seat.
    pub fn is_infant(&self) -> bool {
        matches!(self.kind, TravelerKind::Infant { .. })
    }

    pub fn affiliates(&self) -> &[PassengerId] {
        match &self.kind {
            TravelerKind::GroupMember { affiliates } => affiliates,
            _ => &[],
        }
    }
}

/// Boundary rejection for malformed passenger relationships.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("duplicate passenger id {0}")]
    DuplicatePassenger(PassengerId),
    #[error("passenger {0} lists itself as an affiliate")]
    SelfAffiliation(PassengerId),
    #[error("passenger {passenger} lists unknown affiliate {affiliate}")]
    UnknownAffiliate {
        passenger: PassengerId,
        affiliate: PassengerId,
    },
    #[error("passenger {passenger} lists affiliate {affiliate} but the affiliation is one-sided")]
    AsymmetricAffiliation {
        passenger: PassengerId,
        affiliate: PassengerId,
    },
    #[error("infant {passenger} references unknown guardian {guardian}")]
    UnknownGuardian {
        passenger: PassengerId,
        guardian: PassengerId,
    },
    #[error("infant {passenger} references guardian {guardian}, who is also an infant")]
    InfantGuardian {
        passenger: PassengerId,
        guardian: PassengerId,
    },
    #[error("seat {seat} is pre-assigned to both {first} and {second}")]
    DuplicateSeat {
        seat: String,
        first: PassengerId,
        second: PassengerId,
    },
    #[error("infant {0} carries a pre-assigned seat")]
    SeatedInfant(PassengerId),
}

/// Validated, order-preserving passenger list for one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerManifest {
    passengers: Vec<Passenger>,
}

impl PassengerManifest {
    pub fn new(passengers: Vec<Passenger>) -> Result<Self, ManifestError> {
        let mut by_id: BTreeMap<&PassengerId, &Passenger> = BTreeMap::new();
        for passenger in &passengers {
            if by_id.insert(&passenger.id, passenger).is_some() {
                return Err(ManifestError::DuplicatePassenger(passenger.id.clone()));
            }
        }

        let mut seats: BTreeMap<&str, &PassengerId> = BTreeMap::new();
        for passenger in &passengers {
            match &passenger.kind {
                TravelerKind::Unaccompanied => {}
                TravelerKind::Infant { guardian } => {
                    if passenger.seat.is_some() {
                        return Err(ManifestError::SeatedInfant(passenger.id.clone()));
                    }
                    let Some(holder) = by_id.get(guardian) else {
                        return Err(ManifestError::UnknownGuardian {
                            passenger: passenger.id.clone(),
                            guardian: guardian.clone(),
                        });
                    };
                    if holder.is_infant() {
                        return Err(ManifestError::InfantGuardian {
                            passenger: passenger.id.clone(),
                            guardian: guardian.clone(),
                        });
                    }
                }
                TravelerKind::GroupMember { affiliates } => {
                    for affiliate in affiliates {
                        if *affiliate == passenger.id {
                            return Err(ManifestError::SelfAffiliation(passenger.id.clone()));
                        }
                        let Some(other) = by_id.get(affiliate) else {
                            return Err(ManifestError::UnknownAffiliate {
                                passenger: passenger.id.clone(),
                                affiliate: affiliate.clone(),
                            });
                        };
                        if !other.affiliates().contains(&passenger.id) {
                            return Err(ManifestError::AsymmetricAffiliation {
                                passenger: passenger.id.clone(),
                                affiliate: affiliate.clone(),
                            });
                        }
                    }
                }
            }

            if let Some(seat) = passenger.seat.as_deref() {
                if let Some(first) = seats.insert(seat, &passenger.id) {
                    return Err(ManifestError::DuplicateSeat {
                        seat: seat.to_string(),
                        first: (*first).clone(),
                        second: passenger.id.clone(),
                    });
                }
            }
        }

        Ok(Self { passengers })
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

/// Flight snapshot handed in by the caller; the aircraft type is resolved
/// against the fleet catalog at the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub flight_number: String,
    pub aircraft_type: String,
    pub distance_km: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<DateTime<Utc>>,
}

/// Output of crew assignment: ordered pilots and cabin crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewSelection {
    pub pilots: Vec<Pilot>,
    pub cabin_crew: Vec<CabinCrewMember>,
}

impl CrewSelection {
    pub fn is_empty(&self) -> bool {
        self.pilots.is_empty() && self.cabin_crew.is_empty()
    }
}

/// Mapping from seat identity to its single occupant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap {
    assignments: BTreeMap<String, PassengerId>,
}

impl SeatMap {
    pub(crate) fn assign(&mut self, seat: String, passenger: PassengerId) {
        self.assignments.insert(seat, passenger);
    }

    pub fn occupant(&self, seat: &str) -> Option<&PassengerId> {
        self.assignments.get(seat)
    }

    pub fn is_occupied(&self, seat: &str) -> bool {
        self.assignments.contains_key(seat)
    }

    pub fn seats(&self) -> impl Iterator<Item = (&str, &PassengerId)> {
        self.assignments
            .iter()
            .map(|(seat, passenger)| (seat.as_str(), passenger))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Terminal artifact for one flight: crew, finalized passenger list, seat
/// map, and the menu drawn from the selected chefs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub flight_number: String,
    pub crew: CrewSelection,
    pub passengers: Vec<Passenger>,
    pub seat_map: SeatMap,
    #[serde(default)]
    pub menu: Vec<String>,
}
