//! Pure predicates deciding whether a crew candidate may serve a flight.

use super::domain::{AircraftConfig, CabinCrewMember, Pilot};

/// A pilot may serve iff their single-type restriction matches the aircraft
/// and their range covers the flight distance.
pub fn pilot_eligible(pilot: &Pilot, config: &AircraftConfig, distance_km: u32) -> bool {
    pilot.vehicle_restriction == config.type_name && pilot.allowed_range_km >= distance_km
}

/// A cabin-crew member may serve iff the aircraft type is in their permitted
/// set.
pub fn cabin_crew_eligible(member: &CabinCrewMember, config: &AircraftConfig) -> bool {
    member
        .permitted_vehicles
        .iter()
        .any(|vehicle| vehicle == &config.type_name)
}
