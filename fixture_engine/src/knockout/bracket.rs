//! Single-elimination bracket construction.

use serde::{Deserialize, Serialize};

use super::seeding::normalize_seeds;
use crate::errors::FixtureResult;
use crate::models::{MatchOrigin, MatchPlan, MatchType, Participant, Seed};

/// Generated knockout bracket, flattened round by round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutBracket {
    /// Matches in round order, third place (if any) last
    pub matches: Vec<MatchPlan>,
}

impl KnockoutBracket {
    /// Matches of one round, excluding the third-place match
    pub fn round(&self, round_number: u32) -> Vec<&MatchPlan> {
        self.matches
            .iter()
            .filter(|m| m.round_number == round_number && m.match_type != MatchType::ThirdPlace)
            .collect()
    }

    /// Number of rounds in the bracket
    pub fn round_count(&self) -> u32 {
        self.matches
            .iter()
            .map(|m| m.round_number)
            .max()
            .unwrap_or(0)
    }

    pub fn final_match(&self) -> Option<&MatchPlan> {
        self.matches
            .iter()
            .find(|m| m.match_type == MatchType::Final)
    }

    pub fn third_place(&self) -> Option<&MatchPlan> {
        self.matches
            .iter()
            .find(|m| m.match_type == MatchType::ThirdPlace)
    }

    pub fn into_matches(self) -> Vec<MatchPlan> {
        self.matches
    }
}

/// Match under construction, with the participant that advances without
/// playing when one side is an empty seed
struct PendingMatch {
    plan: MatchPlan,
    auto_advance: Option<Participant>,
}

impl PendingMatch {
    fn new(plan: MatchPlan) -> Self {
        let auto_advance = auto_advance_participant(&plan.home, &plan.away);
        Self { plan, auto_advance }
    }

    /// Participant the next round receives from this match
    fn forward(&self) -> Participant {
        self.auto_advance
            .clone()
            .unwrap_or_else(|| Participant::WinnerOf {
                match_id: self.plan.id.clone(),
            })
    }
}

/// Populated side of a seed-vs-bye pairing
fn auto_advance_participant(home: &Participant, away: &Participant) -> Option<Participant> {
    match (home, away) {
        (
            Participant::SeedRef {
                entry_id: Some(_), ..
            },
            Participant::SeedRef { entry_id: None, .. },
        ) => Some(home.clone()),
        (
            Participant::SeedRef { entry_id: None, .. },
            Participant::SeedRef {
                entry_id: Some(_), ..
            },
        ) => Some(away.clone()),
        _ => None,
    }
}

struct BracketContext<'a> {
    stage_id: &'a str,
    bracket_id: &'a str,
}

impl BracketContext<'_> {
    fn plan(
        &self,
        id: String,
        round_number: u32,
        match_type: MatchType,
        home: Participant,
        away: Participant,
    ) -> MatchPlan {
        MatchPlan {
            id,
            stage_id: self.stage_id.to_string(),
            origin: MatchOrigin::Bracket {
                bracket_id: self.bracket_id.to_string(),
            },
            round_number,
            match_type,
            home,
            away,
            kickoff_at: None,
            venue_id: None,
        }
    }

    fn match_id(&self, round_number: u32, position: usize) -> String {
        format!("{}-r{}-m{}", self.bracket_id, round_number, position)
    }
}

/// Build a complete single-elimination bracket
///
/// Round one pairs the highest remaining seed with the lowest remaining
/// one (1 v N, 2 v N-1, ...). Later rounds pair the first and last match
/// of the previous round, moving inwards. A first-round match between a
/// seed and an empty slot is still emitted, but the next round takes that
/// seed directly instead of a `WinnerOf` reference.
///
/// A two-seed bracket yields one match of type `Round`: the `Final` type
/// is only assigned when a two-match round collapses into one.
///
/// The third-place match is produced only when requested and the round
/// before the final has exactly two matches.
///
/// # Errors
///
/// Seed validation errors from [`normalize_seeds`].
pub fn build_knockout_bracket(
    stage_id: &str,
    bracket_id: &str,
    seeds: &[Seed],
    third_place_match: bool,
) -> FixtureResult<KnockoutBracket> {
    let normalized = normalize_seeds(seeds)?;
    let ctx = BracketContext {
        stage_id,
        bracket_id,
    };

    let mut rounds: Vec<Vec<PendingMatch>> = Vec::new();

    let slots: Vec<&Participant> = normalized.slots.values().collect();
    let first_round: Vec<PendingMatch> = (0..slots.len() / 2)
        .map(|index| {
            PendingMatch::new(ctx.plan(
                ctx.match_id(1, index + 1),
                1,
                MatchType::Round,
                slots[index].clone(),
                slots[slots.len() - 1 - index].clone(),
            ))
        })
        .collect();
    rounds.push(first_round);

    let mut round_number = 1;
    while let Some(previous) = rounds.last().filter(|round| round.len() > 1) {
        round_number += 1;
        let len = previous.len();
        let match_type = if len == 2 {
            MatchType::Final
        } else {
            MatchType::Round
        };

        let next: Vec<PendingMatch> = (0..len / 2)
            .map(|index| {
                PendingMatch::new(ctx.plan(
                    ctx.match_id(round_number, index + 1),
                    round_number,
                    match_type,
                    previous[index].forward(),
                    previous[len - 1 - index].forward(),
                ))
            })
            .collect();
        rounds.push(next);
    }

    let third_place = if third_place_match && rounds.len() >= 2 {
        let semifinals = &rounds[rounds.len() - 2];
        match semifinals.as_slice() {
            [first, second] => Some(ctx.plan(
                format!("{bracket_id}-third-place"),
                round_number,
                MatchType::ThirdPlace,
                Participant::LoserOf {
                    match_id: first.plan.id.clone(),
                },
                Participant::LoserOf {
                    match_id: second.plan.id.clone(),
                },
            )),
            _ => None,
        }
    } else {
        None
    };

    let mut matches: Vec<MatchPlan> = rounds
        .into_iter()
        .flatten()
        .map(|pending| pending.plan)
        .collect();
    matches.extend(third_place);

    log::debug!(
        "Built bracket {} for stage {}: {} slots, {} rounds, {} matches",
        bracket_id,
        stage_id,
        normalized.bracket_size,
        round_number,
        matches.len()
    );

    Ok(KnockoutBracket { matches })
}
