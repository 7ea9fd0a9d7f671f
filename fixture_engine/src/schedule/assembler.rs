//! Display codes and final ordering of generated matches.

use std::collections::HashMap;

use super::slots::{SlotConfig, assign_slots};
use crate::errors::{FixtureError, FixtureResult};
use crate::models::{Fixture, Group, MatchId, MatchPlan, MatchType, VenueSlot};

/// Label knockout matches and order them for publication
///
/// Codes: `F` for the final, `3P` for third place, `SF{n}` for the n-th
/// match of the round before the final and `R{round}` for everything else.
pub fn assemble_knockout(matches: Vec<MatchPlan>) -> Vec<Fixture> {
    let semifinal_round = matches
        .iter()
        .find(|m| m.match_type == MatchType::Final)
        .and_then(|m| m.round_number.checked_sub(1))
        .filter(|round| *round > 0);

    let mut semifinals = 0;
    let fixtures = matches
        .into_iter()
        .map(|plan| {
            let code = match plan.match_type {
                MatchType::Final => "F".to_string(),
                MatchType::ThirdPlace => "3P".to_string(),
                _ if Some(plan.round_number) == semifinal_round => {
                    semifinals += 1;
                    format!("SF{semifinals}")
                }
                _ => format!("R{}", plan.round_number),
            };
            Fixture { code, plan }
        })
        .collect();

    ordered(fixtures)
}

/// Label group matches `{code}-{nn}` and order them for publication
///
/// The sequence number counts each group's matches from 1 in input order.
///
/// # Errors
///
/// * `UnknownGroup` - a match references a group missing from `groups`
/// * `NotAGroupMatch` - a bracket match was passed in
pub fn assemble_groups(groups: &[Group], matches: Vec<MatchPlan>) -> FixtureResult<Vec<Fixture>> {
    let codes: HashMap<&str, &str> = groups
        .iter()
        .map(|group| (group.id.as_str(), group.code.as_str()))
        .collect();
    let mut sequence: HashMap<&str, u32> = HashMap::with_capacity(groups.len());

    let mut fixtures = Vec::with_capacity(matches.len());
    for plan in matches {
        let group_id = plan
            .group_id()
            .ok_or_else(|| FixtureError::NotAGroupMatch(plan.id.clone()))?;
        let (&group_key, &code) = codes
            .get_key_value(group_id)
            .ok_or_else(|| FixtureError::UnknownGroup(group_id.to_string()))?;

        let next = sequence.entry(group_key).or_insert(0);
        *next += 1;
        fixtures.push(Fixture {
            code: format!("{code}-{next:02}"),
            plan,
        });
    }

    Ok(ordered(fixtures))
}

/// Slot a knockout bracket, leaving matches with an empty seed on either
/// side without kickoff or venue
///
/// Bracket order is kept in the result.
///
/// # Errors
///
/// Slot assignment errors from [`assign_slots`].
pub fn schedule_knockout(
    matches: Vec<MatchPlan>,
    venues: &[VenueSlot],
    config: &SlotConfig,
) -> FixtureResult<Vec<MatchPlan>> {
    let order: Vec<MatchId> = matches.iter().map(|m| m.id.clone()).collect();
    let (byes, played): (Vec<MatchPlan>, Vec<MatchPlan>) =
        matches
            .into_iter()
            .partition(|plan| plan.home.is_bye() || plan.away.is_bye());

    let mut by_id: HashMap<MatchId, MatchPlan> = assign_slots(played, venues, config)?
        .into_iter()
        .chain(byes)
        .map(|plan| (plan.id.clone(), plan))
        .collect();

    Ok(order.iter().filter_map(|id| by_id.remove(id)).collect())
}

/// Stable sort by round, then kickoff
fn ordered(mut fixtures: Vec<Fixture>) -> Vec<Fixture> {
    fixtures.sort_by_key(|f| (f.plan.round_number, f.plan.kickoff_at));
    fixtures
}
