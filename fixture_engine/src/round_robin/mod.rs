//! Round-robin group stage generation.
//!
//! - Circle-method pairing for one group, single or double
//! - Expansion of several groups into match plans for a stage
//!
//! ## Example
//!
//! ```
//! use fixture_engine::models::RoundRobinMode;
//! use fixture_engine::round_robin::generate_group_pairings;
//!
//! let entries: Vec<String> = ["north", "south", "east", "west"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let pairings = generate_group_pairings(&entries, RoundRobinMode::Double)?;
//! assert_eq!(pairings.len(), 12);
//! # Ok::<(), fixture_engine::FixtureError>(())
//! ```

pub mod group_stage;
pub mod pairing;

pub use group_stage::generate_group_stage;
pub use pairing::generate_group_pairings;
