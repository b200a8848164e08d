use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::roster::domain::{
    AircraftConfig, CabinCrewMember, CabinLayout, CrewRole, FleetCatalog, FlightInfo, Passenger,
    PassengerId, PassengerManifest, Pilot, SeatClass, Seniority, TravelerKind,
};
use crate::roster::repository::{RepositoryError, RosterRecord, RosterRepository};
use crate::roster::router::roster_router;
use crate::roster::service::RosterService;

/// Small regional jet used by most scenarios: business 2 rows x [A, B],
/// economy continuing at row 3 with 1 row x [A, B, C].
pub(super) fn aircraft() -> AircraftConfig {
    AircraftConfig {
        type_name: "E190".to_string(),
        business: CabinLayout {
            rows: 2,
            columns: vec!['A', 'B'],
        },
        economy: CabinLayout {
            rows: 1,
            columns: vec!['A', 'B', 'C'],
        },
        min_pilots: 2,
        max_pilots: 3,
        min_cabin_crew: 2,
        max_cabin_crew: 4,
        standard_menu: vec!["Chicken Pasta".to_string(), "Lentil Soup".to_string()],
    }
}

/// Economy-only variant for affiliate walks that start at row 1.
pub(super) fn economy_only_aircraft() -> AircraftConfig {
    AircraftConfig {
        type_name: "E190".to_string(),
        business: CabinLayout {
            rows: 0,
            columns: Vec::new(),
        },
        economy: CabinLayout {
            rows: 1,
            columns: vec!['A', 'B', 'C'],
        },
        min_pilots: 2,
        max_pilots: 3,
        min_cabin_crew: 2,
        max_cabin_crew: 4,
        standard_menu: Vec::new(),
    }
}

pub(super) fn flight() -> FlightInfo {
    FlightInfo {
        flight_number: "SC1001".to_string(),
        aircraft_type: "E190".to_string(),
        distance_km: 1500,
        departure: None,
    }
}

pub(super) fn pilot(id: &str, seniority: Seniority) -> Pilot {
    Pilot {
        id: id.to_string(),
        name: format!("Pilot {id}"),
        vehicle_restriction: "E190".to_string(),
        allowed_range_km: 3000,
        seniority,
    }
}

/// Pool with one of each rank eligible, plus a wrong-type and a short-range
/// candidate the filter must drop.
pub(super) fn pilots() -> Vec<Pilot> {
    let mut wrong_type = pilot("PL-04", Seniority::Senior);
    wrong_type.vehicle_restriction = "A320".to_string();
    let mut short_range = pilot("PL-05", Seniority::Senior);
    short_range.allowed_range_km = 800;

    vec![
        pilot("PL-03", Seniority::Trainee),
        pilot("PL-02", Seniority::Junior),
        pilot("PL-01", Seniority::Senior),
        wrong_type,
        short_range,
    ]
}

pub(super) fn attendant(id: &str, role: CrewRole) -> CabinCrewMember {
    CabinCrewMember {
        id: id.to_string(),
        name: format!("Attendant {id}"),
        role,
        permitted_vehicles: vec!["E190".to_string(), "A320".to_string()],
        recipes: match role {
            CrewRole::Chef => vec!["Seared Salmon".to_string(), "Baklava".to_string()],
            _ => Vec::new(),
        },
    }
}

/// Pool with a chief, two regulars, a chef, and one member not cleared for
/// the aircraft.
pub(super) fn cabin_crew() -> Vec<CabinCrewMember> {
    let mut wrong_vehicle = attendant("CC-05", CrewRole::Regular);
    wrong_vehicle.permitted_vehicles = vec!["B787".to_string()];

    vec![
        attendant("CC-02", CrewRole::Regular),
        attendant("CC-04", CrewRole::Chef),
        attendant("CC-03", CrewRole::Chief),
        attendant("CC-01", CrewRole::Regular),
        wrong_vehicle,
    ]
}

pub(super) fn pax(id: &str, seat_class: SeatClass) -> Passenger {
    Passenger {
        id: PassengerId(id.to_string()),
        name: format!("Passenger {id}"),
        seat_class,
        seat: None,
        kind: TravelerKind::Unaccompanied,
    }
}

pub(super) fn seated(id: &str, seat_class: SeatClass, seat: &str) -> Passenger {
    let mut passenger = pax(id, seat_class);
    passenger.seat = Some(seat.to_string());
    passenger
}

pub(super) fn infant(id: &str, guardian: &str) -> Passenger {
    let mut passenger = pax(id, SeatClass::Economy);
    passenger.kind = TravelerKind::Infant {
        guardian: PassengerId(guardian.to_string()),
    };
    passenger
}

pub(super) fn group(id: &str, seat_class: SeatClass, affiliates: &[&str]) -> Passenger {
    let mut passenger = pax(id, seat_class);
    passenger.kind = TravelerKind::GroupMember {
        affiliates: affiliates
            .iter()
            .map(|other| PassengerId(other.to_string()))
            .collect(),
    };
    passenger
}

pub(super) fn manifest(passengers: Vec<Passenger>) -> PassengerManifest {
    PassengerManifest::new(passengers).expect("manifest is well-formed")
}

pub(super) fn build_service() -> (
    RosterService<MemoryRosterRepository>,
    Arc<MemoryRosterRepository>,
) {
    let repository = Arc::new(MemoryRosterRepository::default());
    let fleet = FleetCatalog::new().with_type(aircraft());
    let service = RosterService::new(repository.clone(), fleet);
    (service, repository)
}

pub(super) fn roster_router_with_service(
    service: RosterService<MemoryRosterRepository>,
) -> axum::Router {
    roster_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRosterRepository {
    pub(super) records: Arc<Mutex<HashMap<String, RosterRecord>>>,
}

impl RosterRepository for MemoryRosterRepository {
    fn upsert(&self, record: RosterRecord) -> Result<RosterRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.roster.flight_number.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, flight_number: &str) -> Result<Option<RosterRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(flight_number).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl RosterRepository for UnavailableRepository {
    fn upsert(&self, _record: RosterRecord) -> Result<RosterRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _flight_number: &str) -> Result<Option<RosterRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
