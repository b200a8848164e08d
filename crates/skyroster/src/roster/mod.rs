//! Roster assignment for one flight: crew selection and passenger seating.
//!
//! The engine is synchronous and stateless per invocation; it reads immutable
//! input snapshots and writes only freshly allocated output structures, so
//! rosters for different flights may be generated concurrently with no
//! coordination.

pub mod crew;
pub mod domain;
pub mod eligibility;
pub mod engine;
pub mod repository;
pub mod router;
pub mod seating;
pub mod service;

#[cfg(test)]
mod tests;

pub use crew::{select_crew, CrewDemand, CrewSelectionError, CrewShortage};
pub use domain::{
    AircraftConfig, CabinCrewMember, CabinLayout, CrewCategory, CrewRole, CrewSelection,
    FleetCatalog, FlightInfo, InvalidConfiguration, ManifestError, Passenger, PassengerId,
    PassengerManifest, Pilot, Roster, SeatClass, SeatMap, Seniority, TravelerKind,
};
pub use eligibility::{cabin_crew_eligible, pilot_eligible};
pub use engine::{RosterEngine, RosterOptions, RosterOutcome};
pub use repository::{RepositoryError, RosterRecord, RosterRepository, RosterStatusView};
pub use router::roster_router;
pub use seating::{allocate_seats, SeatShortage, SeatingOutcome};
pub use service::{RosterGenerationRequest, RosterService, RosterServiceError};
