//! Scheduling and publication of generated matches.
//!
//! This module provides:
//! - Kickoff time and venue assignment in waves
//! - Display codes and ordering for knockout and group fixtures
//! - Serializable stage requests running the whole pipeline
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fixture_engine::models::{Group, VenueSlot};
//! use fixture_engine::round_robin::generate_group_stage;
//! use fixture_engine::schedule::{SlotConfig, assemble_groups, assign_slots};
//!
//! let groups = vec![Group::new(
//!     "group-a",
//!     "A",
//!     vec!["red".into(), "blue".into(), "green".into(), "gold".into()],
//! )];
//! let venues = vec![VenueSlot::new("pitch-1"), VenueSlot::new("pitch-2")];
//! let config = SlotConfig::new(Utc.with_ymd_and_hms(2026, 5, 2, 9, 0, 0).unwrap(), 40, 10);
//!
//! let matches = generate_group_stage("spring-league", &groups)?;
//! let matches = assign_slots(matches, &venues, &config)?;
//! let fixtures = assemble_groups(&groups, matches)?;
//!
//! assert_eq!(fixtures[0].code, "A-01");
//! # Ok::<(), fixture_engine::FixtureError>(())
//! ```

pub mod assembler;
pub mod request;
pub mod slots;

pub use assembler::{assemble_groups, assemble_knockout, schedule_knockout};
pub use request::{SchedulingRequest, StageFixtures, StageFormat, StageRequest, generate_stage};
pub use slots::{SlotConfig, assign_slots};
