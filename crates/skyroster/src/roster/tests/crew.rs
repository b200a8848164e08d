use super::common::*;
use crate::roster::crew::{select_crew, CrewDemand};
use crate::roster::domain::{CrewCategory, CrewRole, CrewSelection, Seniority};

fn pilot_ids(selection: &CrewSelection) -> Vec<&str> {
    selection.pilots.iter().map(|p| p.id.as_str()).collect()
}

fn cabin_ids(selection: &CrewSelection) -> Vec<&str> {
    selection.cabin_crew.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn selects_minimum_crew_by_default() {
    let selection = select_crew(
        &aircraft(),
        1500,
        &pilots(),
        &cabin_crew(),
        &CrewDemand::default(),
    )
    .expect("crew available");

    assert_eq!(pilot_ids(&selection), vec!["PL-01", "PL-02"]);
    assert_eq!(cabin_ids(&selection), vec!["CC-03", "CC-04"]);
}

#[test]
fn pilots_ordered_by_seniority_then_id() {
    let mut pool = pilots();
    pool.push(pilot("PL-00", Seniority::Junior));
    pool.push(pilot("PL-09", Seniority::Senior));

    let selection = select_crew(
        &aircraft(),
        1500,
        &pool,
        &cabin_crew(),
        &CrewDemand {
            pilots: Some(3),
            cabin_crew: None,
        },
    )
    .expect("crew available");

    // Both seniors outrank every junior; identifiers break the tie.
    assert_eq!(pilot_ids(&selection), vec!["PL-01", "PL-09", "PL-00"]);
}

#[test]
fn chief_leads_cabin_crew_selection() {
    let selection = select_crew(
        &aircraft(),
        1500,
        &pilots(),
        &cabin_crew(),
        &CrewDemand::default(),
    )
    .expect("crew available");

    assert_eq!(selection.cabin_crew[0].role, CrewRole::Chief);
}

#[test]
fn chef_preferred_when_aircraft_serves_menu() {
    let selection = select_crew(
        &aircraft(),
        1500,
        &pilots(),
        &cabin_crew(),
        &CrewDemand::default(),
    )
    .expect("crew available");

    assert!(selection
        .cabin_crew
        .iter()
        .any(|member| member.role == CrewRole::Chef));
}

#[test]
fn chef_not_prioritized_without_catering() {
    let mut config = aircraft();
    config.standard_menu.clear();

    let selection = select_crew(
        &config,
        1500,
        &pilots(),
        &cabin_crew(),
        &CrewDemand {
            pilots: None,
            cabin_crew: Some(3),
        },
    )
    .expect("crew available");

    // Chief first, then identifier order; the chef earns no early slot.
    assert_eq!(cabin_ids(&selection), vec!["CC-03", "CC-01", "CC-02"]);
}

#[test]
fn demand_extends_to_configuration_max() {
    let selection = select_crew(
        &aircraft(),
        1500,
        &pilots(),
        &cabin_crew(),
        &CrewDemand {
            pilots: Some(10),
            cabin_crew: Some(10),
        },
    )
    .expect("crew available");

    assert_eq!(selection.pilots.len(), 3);
    assert_eq!(cabin_ids(&selection), vec!["CC-03", "CC-04", "CC-01", "CC-02"]);
}

#[test]
fn takes_all_eligible_when_demand_exceeds_pool() {
    let pool = vec![
        pilot("PL-01", Seniority::Senior),
        pilot("PL-02", Seniority::Junior),
    ];

    let selection = select_crew(
        &aircraft(),
        1500,
        &pool,
        &cabin_crew(),
        &CrewDemand {
            pilots: Some(3),
            cabin_crew: None,
        },
    )
    .expect("minimum satisfied");

    assert_eq!(selection.pilots.len(), 2);
}

#[test]
fn reports_pilot_shortage_with_deficit_detail() {
    let pool = vec![pilot("PL-01", Seniority::Senior)];

    let error = select_crew(
        &aircraft(),
        1500,
        &pool,
        &cabin_crew(),
        &CrewDemand::default(),
    )
    .expect_err("one pilot cannot satisfy a two-pilot minimum");

    assert_eq!(error.shortages.len(), 1);
    let shortage = &error.shortages[0];
    assert_eq!(shortage.category, CrewCategory::Pilots);
    assert_eq!(shortage.needed, 2);
    assert_eq!(shortage.available, 1);
}

#[test]
fn reports_both_categories_when_both_fall_short() {
    let error = select_crew(&aircraft(), 1500, &[], &[], &CrewDemand::default())
        .expect_err("empty pools fail");

    let categories: Vec<CrewCategory> = error
        .shortages
        .iter()
        .map(|shortage| shortage.category)
        .collect();
    assert_eq!(
        categories,
        vec![CrewCategory::Pilots, CrewCategory::CabinCrew]
    );
}

#[test]
fn range_filter_applies_to_flight_distance() {
    let error = select_crew(
        &aircraft(),
        5000,
        &pilots(),
        &cabin_crew(),
        &CrewDemand::default(),
    )
    .expect_err("no pilot covers 5000 km");

    assert_eq!(error.shortages[0].category, CrewCategory::Pilots);
    assert_eq!(error.shortages[0].available, 0);
}
