use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::domain::{
    CabinCrewMember, CrewSelection, FleetCatalog, FlightInfo, InvalidConfiguration, ManifestError,
    Passenger, PassengerManifest, Pilot,
};
use super::engine::{RosterEngine, RosterOptions};
use super::repository::{RepositoryError, RosterRecord, RosterRepository};

/// One-shot snapshot for roster generation, as supplied by the caller that
/// fetched it from the flight-operations backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterGenerationRequest {
    pub flight: FlightInfo,
    #[serde(default)]
    pub pilots: Vec<Pilot>,
    #[serde(default)]
    pub cabin_crew: Vec<CabinCrewMember>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    #[serde(default)]
    pub current_crew: CrewSelection,
    #[serde(default)]
    pub options: RosterOptions,
}

/// Facade composing the fleet catalog, the assignment engine, and the
/// repository.
pub struct RosterService<R> {
    repository: Arc<R>,
    fleet: FleetCatalog,
}

impl<R> RosterService<R>
where
    R: RosterRepository + 'static,
{
    pub fn new(repository: Arc<R>, fleet: FleetCatalog) -> Self {
        Self { repository, fleet }
    }

    pub fn fleet(&self) -> &FleetCatalog {
        &self.fleet
    }

    /// Validate the snapshot, run the engine, and store the resulting record
    /// under the flight number (replacing any previous roster).
    pub fn generate(
        &self,
        request: RosterGenerationRequest,
    ) -> Result<RosterRecord, RosterServiceError> {
        let aircraft = self
            .fleet
            .get(&request.flight.aircraft_type)
            .cloned()
            .ok_or_else(|| {
                RosterServiceError::UnknownAircraft(request.flight.aircraft_type.clone())
            })?;

        let manifest = PassengerManifest::new(request.passengers)?;
        let engine = RosterEngine::new(aircraft)?;
        let outcome = engine.generate(
            &request.flight,
            &request.pilots,
            &request.cabin_crew,
            &request.current_crew,
            &manifest,
            &request.options,
        );

        let record = RosterRecord {
            roster: outcome.roster,
            crew_shortages: outcome.crew_shortages,
            seat_shortages: outcome.seat_shortages,
            generated_at: Utc::now(),
        };
        let stored = self.repository.upsert(record)?;
        Ok(stored)
    }

    /// Fetch the stored roster for a flight.
    pub fn get(&self, flight_number: &str) -> Result<RosterRecord, RosterServiceError> {
        let record = self
            .repository
            .fetch(flight_number)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the roster service.
#[derive(Debug, thiserror::Error)]
pub enum RosterServiceError {
    #[error("unknown aircraft type {0}")]
    UnknownAircraft(String),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Configuration(#[from] InvalidConfiguration),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
