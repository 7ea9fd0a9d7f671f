//! Knockout stage generation.
//!
//! This module turns a seed list into a single-elimination bracket:
//! - Seed validation and padding to a power-of-two bracket size
//! - Round-by-round pairing with byes resolved by automatic advancement
//! - Optional third-place match between the losing semifinalists
//!
//! ## Example
//!
//! ```
//! use fixture_engine::knockout::build_knockout_bracket;
//! use fixture_engine::models::{MatchType, Seed};
//!
//! let seeds = vec![
//!     Seed::new(1, "lions"),
//!     Seed::new(2, "tigers"),
//!     Seed::new(3, "bears"),
//!     Seed::new(4, "wolves"),
//! ];
//!
//! let bracket = build_knockout_bracket("cup-2026", "main", &seeds, true)?;
//! assert_eq!(bracket.matches.len(), 4);
//! assert_eq!(bracket.final_match().map(|m| m.match_type), Some(MatchType::Final));
//! # Ok::<(), fixture_engine::FixtureError>(())
//! ```

pub mod bracket;
pub mod seeding;

pub use bracket::{KnockoutBracket, build_knockout_bracket};
pub use seeding::{NormalizedSeeds, normalize_seeds};
