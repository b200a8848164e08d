use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::crew::CrewShortage;
use super::domain::Roster;
use super::seating::SeatShortage;

/// Persisted artifact for one flight: the roster, the shortage detail it was
/// generated with, and the generation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRecord {
    pub roster: Roster,
    #[serde(default)]
    pub crew_shortages: Vec<CrewShortage>,
    #[serde(default)]
    pub seat_shortages: Vec<SeatShortage>,
    pub generated_at: DateTime<Utc>,
}

impl RosterRecord {
    pub fn is_complete(&self) -> bool {
        self.crew_shortages.is_empty() && self.seat_shortages.is_empty()
    }

    pub fn unseated_count(&self) -> usize {
        self.seat_shortages
            .iter()
            .map(|shortage| shortage.unseated.len())
            .sum()
    }

    pub fn status_view(&self) -> RosterStatusView {
        RosterStatusView {
            flight_number: self.roster.flight_number.clone(),
            pilots: self.roster.crew.pilots.len(),
            cabin_crew: self.roster.crew.cabin_crew.len(),
            seated: self.roster.seat_map.len(),
            unseated: self.unseated_count(),
            complete: self.is_complete(),
            generated_at: self.generated_at,
        }
    }
}

/// Compact summary exposed on API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RosterStatusView {
    pub flight_number: String,
    pub pilots: usize,
    pub cabin_crew: usize,
    pub seated: usize,
    pub unseated: usize,
    pub complete: bool,
    pub generated_at: DateTime<Utc>,
}

/// Storage abstraction so the service can be exercised in isolation.
/// Regenerating a flight's roster replaces the previous record.
pub trait RosterRepository: Send + Sync {
    fn upsert(&self, record: RosterRecord) -> Result<RosterRecord, RepositoryError>;
    fn fetch(&self, flight_number: &str) -> Result<Option<RosterRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("roster not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
