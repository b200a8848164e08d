//! Roster assembly: crew selection and seat allocation run independently
//! for one flight and their results are merged, partial failures included.

use serde::{Deserialize, Serialize};

use super::crew::{self, select_crew, CrewDemand, CrewShortage};
use super::domain::{
    AircraftConfig, CabinCrewMember, CrewSelection, FlightInfo, InvalidConfiguration,
    PassengerManifest, Pilot, Roster,
};
use super::seating::{self, allocate_seats, SeatShortage};

/// The two caller switches plus the optional crew headcount demand. With a
/// switch off, the corresponding sub-engine is skipped and the caller's
/// existing assignments pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOptions {
    #[serde(default = "enabled")]
    pub assign_crew: bool,
    #[serde(default = "enabled")]
    pub assign_seats: bool,
    #[serde(default)]
    pub crew_demand: CrewDemand,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            assign_crew: true,
            assign_seats: true,
            crew_demand: CrewDemand::default(),
        }
    }
}

const fn enabled() -> bool {
    true
}

/// Assembled roster plus whatever each sub-engine could not satisfy. A crew
/// deficit never suppresses the seating result, and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterOutcome {
    pub roster: Roster,
    pub crew_shortages: Vec<CrewShortage>,
    pub seat_shortages: Vec<SeatShortage>,
}

impl RosterOutcome {
    pub fn is_complete(&self) -> bool {
        self.crew_shortages.is_empty() && self.seat_shortages.is_empty()
    }
}

/// Stateless per-flight assembler. Construction validates the aircraft
/// configuration so defects surface before any assignment runs.
#[derive(Debug)]
pub struct RosterEngine {
    aircraft: AircraftConfig,
}

impl RosterEngine {
    pub fn new(aircraft: AircraftConfig) -> Result<Self, InvalidConfiguration> {
        aircraft.validate()?;
        Ok(Self { aircraft })
    }

    pub fn aircraft(&self) -> &AircraftConfig {
        &self.aircraft
    }

    /// Build the roster for one flight from immutable input snapshots. Crew
    /// selection and seat allocation have no data dependency on each other;
    /// each reports its own shortage detail in the outcome.
    pub fn generate(
        &self,
        flight: &FlightInfo,
        pilots: &[Pilot],
        cabin_crew: &[CabinCrewMember],
        current_crew: &CrewSelection,
        manifest: &PassengerManifest,
        options: &RosterOptions,
    ) -> RosterOutcome {
        let mut crew_shortages = Vec::new();
        let crew = if options.assign_crew {
            match select_crew(
                &self.aircraft,
                flight.distance_km,
                pilots,
                cabin_crew,
                &options.crew_demand,
            ) {
                Ok(selection) => selection,
                Err(error) => {
                    crew_shortages = error.shortages;
                    current_crew.clone()
                }
            }
        } else {
            current_crew.clone()
        };

        let seating = if options.assign_seats {
            allocate_seats(&self.aircraft, manifest)
        } else {
            seating::passthrough(manifest)
        };

        let menu = crew::menu_for(&crew, &self.aircraft);

        RosterOutcome {
            roster: Roster {
                flight_number: flight.flight_number.clone(),
                crew,
                passengers: seating.passengers,
                seat_map: seating.seat_map,
                menu,
            },
            crew_shortages,
            seat_shortages: seating.shortages,
        }
    }
}
