//! Crew selection: eligibility filtering, deterministic ordering, and
//! headcount bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{
    AircraftConfig, CabinCrewMember, CrewCategory, CrewRole, CrewSelection, Pilot,
};
use super::eligibility::{cabin_crew_eligible, pilot_eligible};

/// Caller-requested headcounts; `None` means the configuration minimum.
/// Requests are clamped to the configuration bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewDemand {
    #[serde(default)]
    pub pilots: Option<u32>,
    #[serde(default)]
    pub cabin_crew: Option<u32>,
}

/// Fewer eligible candidates than the aircraft minimum for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{category} shortage: {needed} required, {available} eligible")]
pub struct CrewShortage {
    pub category: CrewCategory,
    pub needed: u32,
    pub available: u32,
}

/// Selection failure carrying every deficient category, so a pilot deficit
/// never hides a cabin-crew deficit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewSelectionError {
    pub shortages: Vec<CrewShortage>,
}

impl fmt::Display for CrewSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for shortage in &self.shortages {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{shortage}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for CrewSelectionError {}

/// Select a crew for one flight, or fail with the full shortage detail.
///
/// Candidate pools are read-only; the returned selection owns fresh copies.
pub fn select_crew(
    config: &AircraftConfig,
    distance_km: u32,
    pilots: &[Pilot],
    cabin_crew: &[CabinCrewMember],
    demand: &CrewDemand,
) -> Result<CrewSelection, CrewSelectionError> {
    let eligible_pilots = ordered_pilots(config, distance_km, pilots);
    let eligible_cabin = ordered_cabin_crew(config, cabin_crew);

    let mut shortages = Vec::new();
    if (eligible_pilots.len() as u32) < config.min_pilots {
        shortages.push(CrewShortage {
            category: CrewCategory::Pilots,
            needed: config.min_pilots,
            available: eligible_pilots.len() as u32,
        });
    }
    if (eligible_cabin.len() as u32) < config.min_cabin_crew {
        shortages.push(CrewShortage {
            category: CrewCategory::CabinCrew,
            needed: config.min_cabin_crew,
            available: eligible_cabin.len() as u32,
        });
    }
    if !shortages.is_empty() {
        return Err(CrewSelectionError { shortages });
    }

    let pilot_target = demand
        .pilots
        .unwrap_or(config.min_pilots)
        .min(config.max_pilots)
        .max(config.min_pilots) as usize;
    let cabin_target = demand
        .cabin_crew
        .unwrap_or(config.min_cabin_crew)
        .min(config.max_cabin_crew)
        .max(config.min_cabin_crew) as usize;

    Ok(CrewSelection {
        pilots: eligible_pilots
            .into_iter()
            .take(pilot_target)
            .cloned()
            .collect(),
        cabin_crew: eligible_cabin
            .into_iter()
            .take(cabin_target)
            .cloned()
            .collect(),
    })
}

/// Eligible pilots by seniority rank, then identifier, for reproducible
/// selection.
fn ordered_pilots<'a>(
    config: &AircraftConfig,
    distance_km: u32,
    pilots: &'a [Pilot],
) -> Vec<&'a Pilot> {
    let mut eligible: Vec<&Pilot> = pilots
        .iter()
        .filter(|pilot| pilot_eligible(pilot, config, distance_km))
        .collect();
    eligible.sort_by(|a, b| {
        a.seniority
            .rank()
            .cmp(&b.seniority.rank())
            .then_with(|| a.id.cmp(&b.id))
    });
    eligible
}

/// Eligible cabin crew in selection order: one chief first if any is
/// eligible, then one chef when the aircraft serves a standard menu, then
/// the remaining members by identifier.
fn ordered_cabin_crew<'a>(
    config: &AircraftConfig,
    cabin_crew: &'a [CabinCrewMember],
) -> Vec<&'a CabinCrewMember> {
    let mut eligible: Vec<&CabinCrewMember> = cabin_crew
        .iter()
        .filter(|member| cabin_crew_eligible(member, config))
        .collect();
    eligible.sort_by(|a, b| a.id.cmp(&b.id));

    let mut ordered: Vec<&CabinCrewMember> = Vec::with_capacity(eligible.len());
    if let Some(chief) = eligible
        .iter()
        .find(|member| member.role == CrewRole::Chief)
        .copied()
    {
        ordered.push(chief);
    }
    if config.has_catering() {
        if let Some(chef) = eligible
            .iter()
            .find(|member| member.role == CrewRole::Chef)
            .copied()
        {
            ordered.push(chef);
        }
    }
    for member in eligible {
        if !ordered.iter().any(|picked| picked.id == member.id) {
            ordered.push(member);
        }
    }
    ordered
}

/// Menu drawn from the selected chefs: the first recipe of each, in
/// selection order.
pub(crate) fn menu_for(selection: &CrewSelection, config: &AircraftConfig) -> Vec<String> {
    if !config.has_catering() {
        return Vec::new();
    }
    selection
        .cabin_crew
        .iter()
        .filter(|member| member.role == CrewRole::Chef)
        .filter_map(|chef| chef.recipes.first().cloned())
        .collect()
}
