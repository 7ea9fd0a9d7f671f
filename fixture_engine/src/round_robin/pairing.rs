//! Circle-method pairing for a single round-robin group.

use std::collections::HashSet;

use crate::errors::{FixtureError, FixtureResult};
use crate::models::{EntryId, Pairing, RoundRobinMode};

/// Generate the round-by-round pairings for one group
///
/// Uses the circle method: position 0 stays fixed while every other
/// position rotates one step per round. An odd entry count gets an empty
/// seat, and whoever is paired with it sits the round out.
///
/// Home/away: odd rounds swap the generated order, even rounds keep it,
/// so the anchored entry alternates sides. Double mode repeats every round
/// with sides reversed, numbering the repeats after the first cycle.
///
/// # Errors
///
/// * `InsufficientEntries` - fewer than two entries
/// * `DuplicateEntry` - an entry listed twice
/// * `TooManyEntries` - round numbers would not fit in `u32`
pub fn generate_group_pairings(
    entry_ids: &[EntryId],
    mode: RoundRobinMode,
) -> FixtureResult<Vec<Pairing>> {
    if entry_ids.len() < 2 {
        return Err(FixtureError::InsufficientEntries(entry_ids.len()));
    }

    let mut seen = HashSet::with_capacity(entry_ids.len());
    for entry_id in entry_ids {
        if !seen.insert(entry_id.as_str()) {
            return Err(FixtureError::DuplicateEntry(entry_id.clone()));
        }
    }

    let mut circle: Vec<Option<&EntryId>> = entry_ids.iter().map(Some).collect();
    if circle.len() % 2 == 1 {
        circle.push(None);
    }

    let size = circle.len();
    let rounds_per_cycle = rounds_per_cycle(size)?;
    let mut pairings = Vec::with_capacity(entry_ids.len() * (entry_ids.len() - 1));

    for round_number in 1..=rounds_per_cycle {
        for index in 0..size / 2 {
            let (Some(first), Some(second)) = (circle[index], circle[size - 1 - index]) else {
                continue;
            };
            let (home, away) = if round_number % 2 == 1 {
                (second, first)
            } else {
                (first, second)
            };
            pairings.push(Pairing {
                round_number,
                home: home.clone(),
                away: away.clone(),
            });
        }
        circle[1..].rotate_left(1);
    }

    if mode == RoundRobinMode::Double {
        let return_legs: Vec<Pairing> = pairings
            .iter()
            .map(|pairing| Pairing {
                round_number: pairing.round_number + rounds_per_cycle,
                home: pairing.away.clone(),
                away: pairing.home.clone(),
            })
            .collect();
        pairings.extend(return_legs);
    }

    Ok(pairings)
}

/// Rounds needed for one full cycle over an even circle of `size` seats
fn rounds_per_cycle(size: usize) -> FixtureResult<u32> {
    let rounds = size.saturating_sub(1);
    u32::try_from(rounds)
        .ok()
        .filter(|rounds| rounds.checked_mul(2).is_some())
        .ok_or(FixtureError::TooManyEntries(size))
}
