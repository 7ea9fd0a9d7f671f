//! Fixture generation error types.

use thiserror::Error;

use crate::models::{EntryId, GroupId, MatchId};

/// Fixture generation errors
///
/// Every variant is a local validation failure raised before any output is
/// produced, so a caller never receives a partial schedule.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fewer than two seeds were supplied to a knockout bracket
    #[error("Insufficient seeds: need at least 2, have {0}")]
    InsufficientSeeds(usize),

    /// Fewer than two entries were supplied to a round-robin group
    #[error("Insufficient entries: need at least 2, have {0}")]
    InsufficientEntries(usize),

    /// Seed number is zero or negative
    #[error("Invalid seed number: {0}")]
    InvalidSeedNumber(i64),

    /// Two seeds share the same number
    #[error("Duplicate seed number: {0}")]
    DuplicateSeedNumber(i64),

    /// Seed number lies beyond the normalized bracket
    #[error("Seed {seed} is out of range for a bracket of size {bracket_size}")]
    SeedOutOfRange { seed: i64, bracket_size: u32 },

    /// Seed count cannot be padded to a power of two
    #[error("Too many seeds: {0}")]
    TooManySeeds(usize),

    /// Group too large to number its rounds
    #[error("Too many entries: {0}")]
    TooManyEntries(usize),

    /// Same entry listed twice in a bracket or group
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(EntryId),

    /// Round-robin stage without any group
    #[error("No groups provided")]
    NoGroupsProvided,

    /// Two groups share the same id
    #[error("Duplicate group: {0}")]
    DuplicateGroup(GroupId),

    /// Group match references a group that was not supplied
    #[error("Unknown group: {0}")]
    UnknownGroup(GroupId),

    /// Bracket match handed to the group assembler
    #[error("Match {0} does not belong to a group")]
    NotAGroupMatch(MatchId),

    /// Slot assignment without any venue
    #[error("No venues provided")]
    NoVenuesProvided,

    /// Match duration must be positive
    #[error("Invalid match duration: {0} minutes")]
    InvalidDuration(i64),

    /// Break between waves must not be negative
    #[error("Invalid break: {0} minutes")]
    InvalidBreak(i64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FixtureError {
    /// Get a message suitable for showing to the organizer who submitted
    /// the entries, without parser internals
    pub fn client_message(&self) -> String {
        match self {
            FixtureError::InsufficientSeeds(_) => {
                "A knockout bracket needs at least two seeds".to_string()
            }
            FixtureError::InsufficientEntries(_) => {
                "A round-robin group needs at least two entries".to_string()
            }
            FixtureError::TooManySeeds(_) => {
                "A knockout bracket supports at most 2^31 seeds".to_string()
            }
            FixtureError::TooManyEntries(_) => "Round-robin group is too large".to_string(),
            FixtureError::Serialization(_) => "Malformed stage request".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for fixture generation
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_hides_parser_details() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = FixtureError::from(err);
        assert_eq!(err.client_message(), "Malformed stage request");
    }

    #[test]
    fn test_client_message_passes_validation_errors_through() {
        let err = FixtureError::DuplicateSeedNumber(5);
        assert_eq!(err.client_message(), "Duplicate seed number: 5");
    }

    #[test]
    fn test_client_message_for_size_limits() {
        assert_eq!(
            FixtureError::TooManySeeds(usize::MAX).client_message(),
            "A knockout bracket supports at most 2^31 seeds"
        );
        assert_eq!(
            FixtureError::TooManyEntries(usize::MAX).client_message(),
            "Round-robin group is too large"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = FixtureError::SeedOutOfRange {
            seed: 9,
            bracket_size: 4,
        };
        assert_eq!(
            err.to_string(),
            "Seed 9 is out of range for a bracket of size 4"
        );
    }
}
