//! Seed validation and padding to a power-of-two bracket.

use std::collections::{BTreeMap, HashSet};

use crate::errors::{FixtureError, FixtureResult};
use crate::models::{Participant, Seed};

/// Seeds validated and padded to a full bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSeeds {
    /// Power-of-two number of slots
    pub bracket_size: u32,
    /// Every seed number 1..=bracket_size mapped to its slot
    pub slots: BTreeMap<u32, Participant>,
}

impl NormalizedSeeds {
    /// Slot for a seed number
    pub fn slot(&self, seed: u32) -> Option<&Participant> {
        self.slots.get(&seed)
    }

    /// Number of empty slots after padding
    pub fn bye_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_bye()).count()
    }
}

/// Validate seeds and pad them to the next power of two
///
/// Seeds missing from 1..=bracket_size become explicit byes. The input is
/// never modified.
///
/// # Errors
///
/// * `InsufficientSeeds` - fewer than two seeds
/// * `InvalidSeedNumber` - a seed below 1
/// * `DuplicateSeedNumber` - two seeds with the same number
/// * `DuplicateEntry` - one entry holding two seeds
/// * `TooManySeeds` - more than 2^31 seeds
/// * `SeedOutOfRange` - a seed number beyond the bracket size
pub fn normalize_seeds(seeds: &[Seed]) -> FixtureResult<NormalizedSeeds> {
    if seeds.len() < 2 {
        return Err(FixtureError::InsufficientSeeds(seeds.len()));
    }

    let mut numbers = HashSet::with_capacity(seeds.len());
    let mut entries = HashSet::with_capacity(seeds.len());
    for seed in seeds {
        if seed.seed < 1 {
            return Err(FixtureError::InvalidSeedNumber(seed.seed));
        }
        if !numbers.insert(seed.seed) {
            return Err(FixtureError::DuplicateSeedNumber(seed.seed));
        }
        if let Some(entry_id) = &seed.entry_id {
            if !entries.insert(entry_id.as_str()) {
                return Err(FixtureError::DuplicateEntry(entry_id.clone()));
            }
        }
    }

    let bracket_size = bracket_size_for(numbers.len())?;

    let mut slots = BTreeMap::new();
    for seed in seeds {
        let number = u32::try_from(seed.seed)
            .ok()
            .filter(|number| *number <= bracket_size)
            .ok_or(FixtureError::SeedOutOfRange {
                seed: seed.seed,
                bracket_size,
            })?;
        slots.insert(
            number,
            Participant::SeedRef {
                seed: number,
                entry_id: seed.entry_id.clone(),
            },
        );
    }

    for number in 1..=bracket_size {
        slots
            .entry(number)
            .or_insert_with(|| Participant::SeedRef {
                seed: number,
                entry_id: None,
            });
    }

    Ok(NormalizedSeeds {
        bracket_size,
        slots,
    })
}

/// Smallest power of two holding `count` seeds
///
/// Counts above 2^31 cannot be padded within `u32`.
fn bracket_size_for(count: usize) -> FixtureResult<u32> {
    u32::try_from(count)
        .ok()
        .and_then(u32::checked_next_power_of_two)
        .ok_or(FixtureError::TooManySeeds(count))
}
