use super::common::*;
use crate::roster::crew::CrewDemand;
use crate::roster::domain::{
    CrewCategory, CrewSelection, InvalidConfiguration, SeatClass,
};
use crate::roster::engine::{RosterEngine, RosterOptions};

#[test]
fn construction_rejects_inverted_crew_bounds() {
    let mut config = aircraft();
    config.min_pilots = 4;

    let error = RosterEngine::new(config).expect_err("bounds are inverted");

    assert!(matches!(
        error,
        InvalidConfiguration::CrewBoundsInverted {
            category: CrewCategory::Pilots,
            min: 4,
            max: 3,
        }
    ));
}

#[test]
fn construction_rejects_seatless_aircraft() {
    let mut config = aircraft();
    config.business.rows = 0;
    config.economy.rows = 0;

    let error = RosterEngine::new(config).expect_err("no seats anywhere");

    assert!(matches!(error, InvalidConfiguration::NoSeats { .. }));
}

#[test]
fn construction_rejects_repeated_column_letters() {
    let mut config = aircraft();
    config.economy.columns = vec!['A', 'B', 'A'];

    let error = RosterEngine::new(config).expect_err("duplicate column");

    assert!(matches!(
        error,
        InvalidConfiguration::DuplicateColumn {
            class: SeatClass::Economy,
            column: 'A',
        }
    ));
}

#[test]
fn crew_shortage_never_suppresses_seating() {
    let engine = RosterEngine::new(aircraft()).expect("valid configuration");
    let manifest = manifest(vec![
        pax("PS-01", SeatClass::Business),
        pax("PS-02", SeatClass::Economy),
    ]);

    let outcome = engine.generate(
        &flight(),
        &[],
        &[],
        &CrewSelection::default(),
        &manifest,
        &RosterOptions::default(),
    );

    assert_eq!(outcome.crew_shortages.len(), 2);
    assert!(outcome.roster.crew.is_empty());
    assert_eq!(outcome.roster.seat_map.len(), 2);
    assert!(outcome.seat_shortages.is_empty());
    assert!(!outcome.is_complete());
}

#[test]
fn switches_off_pass_existing_assignments_through() {
    let engine = RosterEngine::new(aircraft()).expect("valid configuration");
    let manifest = manifest(vec![
        seated("PS-01", SeatClass::Business, "2B"),
        pax("PS-02", SeatClass::Economy),
    ]);
    let current_crew = CrewSelection {
        pilots: vec![pilot("PL-07", crate::roster::domain::Seniority::Senior)],
        cabin_crew: Vec::new(),
    };

    let outcome = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &current_crew,
        &manifest,
        &RosterOptions {
            assign_crew: false,
            assign_seats: false,
            crew_demand: CrewDemand::default(),
        },
    );

    assert_eq!(outcome.roster.crew, current_crew);
    assert_eq!(outcome.roster.seat_map.len(), 1);
    let unchanged = outcome
        .roster
        .passengers
        .iter()
        .find(|passenger| passenger.id.0 == "PS-02")
        .expect("passenger present");
    assert_eq!(unchanged.seat, None);
    assert!(outcome.crew_shortages.is_empty());
    assert!(outcome.seat_shortages.is_empty());
}

#[test]
fn menu_comes_from_selected_chefs_first_recipe() {
    let engine = RosterEngine::new(aircraft()).expect("valid configuration");
    let manifest = manifest(Vec::new());

    let outcome = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &CrewSelection::default(),
        &manifest,
        &RosterOptions::default(),
    );

    assert_eq!(outcome.roster.menu, vec!["Seared Salmon".to_string()]);
}

#[test]
fn no_menu_without_catering() {
    let mut config = aircraft();
    config.standard_menu.clear();
    let engine = RosterEngine::new(config).expect("valid configuration");

    let outcome = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &CrewSelection::default(),
        &manifest(Vec::new()),
        &RosterOptions::default(),
    );

    assert!(outcome.roster.menu.is_empty());
}

#[test]
fn full_success_is_reported_complete() {
    let engine = RosterEngine::new(aircraft()).expect("valid configuration");
    let manifest = manifest(vec![pax("PS-01", SeatClass::Economy)]);

    let outcome = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &CrewSelection::default(),
        &manifest,
        &RosterOptions::default(),
    );

    assert!(outcome.is_complete());
    assert_eq!(outcome.roster.crew.pilots.len(), 2);
    assert_eq!(outcome.roster.crew.cabin_crew.len(), 2);
}

#[test]
fn identical_inputs_yield_identical_rosters() {
    let engine = RosterEngine::new(aircraft()).expect("valid configuration");
    let manifest = manifest(vec![
        pax("PS-01", SeatClass::Business),
        group("PS-02", SeatClass::Economy, &["PS-03"]),
        group("PS-03", SeatClass::Economy, &["PS-02"]),
    ]);

    let first = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &CrewSelection::default(),
        &manifest,
        &RosterOptions::default(),
    );
    let second = engine.generate(
        &flight(),
        &pilots(),
        &cabin_crew(),
        &CrewSelection::default(),
        &manifest,
        &RosterOptions::default(),
    );

    assert_eq!(first, second);
}
