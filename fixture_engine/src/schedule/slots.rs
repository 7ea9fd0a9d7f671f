//! Kickoff time and venue assignment in waves.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{FixtureError, FixtureResult};
use crate::models::{MatchPlan, VenueSlot};

/// Timing parameters for slot assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Kickoff of the first wave
    pub start_at: DateTime<Utc>,

    /// Match length in minutes (default: 90)
    pub match_duration_minutes: i64,

    /// Gap between consecutive waves in minutes (default: 15)
    pub break_minutes: i64,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            start_at: DateTime::<Utc>::UNIX_EPOCH,
            match_duration_minutes: 90,
            break_minutes: 15,
        }
    }
}

impl SlotConfig {
    pub fn new(start_at: DateTime<Utc>, match_duration_minutes: i64, break_minutes: i64) -> Self {
        Self {
            start_at,
            match_duration_minutes,
            break_minutes,
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// * `InvalidDuration` - duration is zero or negative
    /// * `InvalidBreak` - break is negative
    pub fn validate(&self) -> FixtureResult<()> {
        if self.match_duration_minutes <= 0 {
            return Err(FixtureError::InvalidDuration(self.match_duration_minutes));
        }
        if self.break_minutes < 0 {
            return Err(FixtureError::InvalidBreak(self.break_minutes));
        }
        Ok(())
    }

    /// Time between the kickoffs of two consecutive waves
    pub fn wave_interval(&self) -> Duration {
        Duration::minutes(self.match_duration_minutes + self.break_minutes)
    }
}

/// Assign kickoff times and venues to matches
///
/// Matches are taken in round order; within a round the input order is
/// kept, so several groups interleave round by round. Each round is split
/// into waves of one match per venue. The k-th match of a round plays at
/// `venues[k % venues.len()]`, every match in a wave shares one kickoff,
/// and the clock advances by duration plus break after each wave.
///
/// # Errors
///
/// * `NoVenuesProvided` - empty venue list
/// * `InvalidDuration` / `InvalidBreak` - see [`SlotConfig::validate`]
pub fn assign_slots(
    mut matches: Vec<MatchPlan>,
    venues: &[VenueSlot],
    config: &SlotConfig,
) -> FixtureResult<Vec<MatchPlan>> {
    if venues.is_empty() {
        return Err(FixtureError::NoVenuesProvided);
    }
    config.validate()?;

    matches.sort_by_key(|m| m.round_number);

    let interval = config.wave_interval();
    let mut kickoff = config.start_at;
    let mut waves = 0;

    for round in matches.chunk_by_mut(|a, b| a.round_number == b.round_number) {
        for wave in round.chunks_mut(venues.len()) {
            for (plan, venue) in wave.iter_mut().zip(venues) {
                plan.kickoff_at = Some(kickoff);
                plan.venue_id = Some(venue.venue_id.clone());
            }
            kickoff += interval;
            waves += 1;
        }
    }

    log::debug!(
        "Assigned {} matches to {} waves across {} venues",
        matches.len(),
        waves,
        venues.len()
    );

    Ok(matches)
}
