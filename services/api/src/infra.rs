use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use skyroster::roster::{
    AircraftConfig, CabinLayout, FleetCatalog, RepositoryError, RosterRecord, RosterRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRosterRepository {
    records: Arc<Mutex<HashMap<String, RosterRecord>>>,
}

impl RosterRepository for InMemoryRosterRepository {
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

/// The fleet this deployment rosters for. Passed into the service
/// explicitly; the engine carries no built-in aircraft table.
pub(crate) fn standard_fleet() -> FleetCatalog {
    FleetCatalog::new()
        .with_type(AircraftConfig {
            type_name: "A320".to_string(),
            business: CabinLayout {
                rows: 5,
                columns: vec!['A', 'B', 'C', 'D'],
            },
            economy: CabinLayout {
                rows: 27,
                columns: vec!['A', 'B', 'C', 'D', 'E', 'F'],
            },
            min_pilots: 2,
            max_pilots: 4,
            min_cabin_crew: 5,
            max_cabin_crew: 8,
            standard_menu: vec![
                "Chicken Pasta".to_string(),
                "Vegetarian Salad".to_string(),
                "Beef Sandwich".to_string(),
            ],
        })
        .with_type(AircraftConfig {
            type_name: "B737".to_string(),
            business: CabinLayout {
                rows: 4,
                columns: vec!['A', 'B', 'C', 'D'],
            },
            economy: CabinLayout {
                rows: 25,
                columns: vec!['A', 'B', 'C', 'D', 'E', 'F'],
            },
            min_pilots: 2,
            max_pilots: 4,
            min_cabin_crew: 4,
            max_cabin_crew: 7,
            standard_menu: vec![
                "Grilled Salmon".to_string(),
                "Caesar Salad".to_string(),
                "Turkey Wrap".to_string(),
            ],
        })
        .with_type(AircraftConfig {
            type_name: "B787".to_string(),
            business: CabinLayout {
                rows: 7,
                columns: vec!['A', 'B', 'C', 'D', 'E', 'F'],
            },
            economy: CabinLayout {
                rows: 25,
                columns: vec!['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'],
            },
            min_pilots: 2,
            max_pilots: 4,
            min_cabin_crew: 8,
            max_cabin_crew: 16,
            standard_menu: vec![
                "Filet Mignon".to_string(),
                "Lobster Risotto".to_string(),
                "Vegetable Curry".to_string(),
                "Greek Salad".to_string(),
            ],
        })
}
