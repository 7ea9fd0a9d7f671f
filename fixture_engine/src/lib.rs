//! # Fixture Engine
//!
//! Deterministic generation of competition fixtures: the list of matches
//! that make up a stage, before any of them is played.
//!
//! Two independent generators are provided:
//!
//! - **Knockout**: a seeded list of entries becomes a single-elimination
//!   bracket padded to a power of two, with byes advanced automatically
//!   and an optional third-place match.
//! - **Round robin**: one or more groups become a single or double
//!   round-robin match list using the circle method.
//!
//! Both feed the same scheduling pipeline, which assigns kickoff times and
//! venues in waves and labels every match with a display code.
//!
//! Every operation is a pure function of its input. Invalid input is
//! reported as a [`FixtureError`] before any output is produced.
//!
//! ## Core Modules
//!
//! - [`knockout`]: Seed normalization and bracket construction
//! - [`round_robin`]: Circle-method pairing and group stage expansion
//! - [`schedule`]: Slot assignment, fixture codes and stage requests
//! - [`models`]: Shared value types
//!
//! ## Example
//!
//! ```
//! use fixture_engine::{Seed, build_knockout_bracket, assemble_knockout};
//!
//! let seeds = vec![Seed::new(1, "A"), Seed::new(2, "B"), Seed::new(3, "C")];
//! let bracket = build_knockout_bracket("stage-1", "main", &seeds, false)?;
//! let fixtures = assemble_knockout(bracket.into_matches());
//!
//! assert_eq!(fixtures.len(), 3);
//! assert_eq!(fixtures[2].code, "F");
//! # Ok::<(), fixture_engine::FixtureError>(())
//! ```

pub mod errors;
pub mod knockout;
pub mod models;
pub mod round_robin;
pub mod schedule;

pub use errors::{FixtureError, FixtureResult};
pub use knockout::{KnockoutBracket, build_knockout_bracket, normalize_seeds};
pub use models::{
    EntryId, Fixture, Group, MatchOrigin, MatchPlan, MatchType, Pairing, Participant,
    RoundRobinMode, Seed, VenueSlot,
};
pub use round_robin::{generate_group_pairings, generate_group_stage};
pub use schedule::{
    SlotConfig, StageFixtures, StageFormat, StageRequest, assemble_groups, assemble_knockout,
    assign_slots, generate_stage, schedule_knockout,
};
