//! Shared value types for brackets, groups and scheduled matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Competing entry identifier
pub type EntryId = String;

/// Stage identifier
pub type StageId = String;

/// Knockout bracket identifier
pub type BracketId = String;

/// Round-robin group identifier
pub type GroupId = String;

/// Generated match identifier
pub type MatchId = String;

/// Venue identifier
pub type VenueId = String;

/// A ranked slot in a knockout bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Seed number (1 is the top seed)
    pub seed: i64,
    /// Entry holding this seed; `None` is a deliberate bye
    #[serde(default)]
    pub entry_id: Option<EntryId>,
}

impl Seed {
    /// Create a seed bound to an entry
    pub fn new(seed: i64, entry_id: impl Into<EntryId>) -> Self {
        Self {
            seed,
            entry_id: Some(entry_id.into()),
        }
    }

    /// Create an empty seed slot
    pub fn bye(seed: i64) -> Self {
        Self {
            seed,
            entry_id: None,
        }
    }
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Participant {
    /// Direct seed assignment; `entry_id` of `None` is a bye
    SeedRef {
        seed: u32,
        entry_id: Option<EntryId>,
    },
    /// Whoever wins the referenced match
    WinnerOf { match_id: MatchId },
    /// Whoever loses the referenced match
    LoserOf { match_id: MatchId },
}

impl Participant {
    /// Whether this side is an empty seed slot
    pub fn is_bye(&self) -> bool {
        matches!(self, Participant::SeedRef { entry_id: None, .. })
    }

    /// Entry directly bound to this side, if any
    pub fn entry_id(&self) -> Option<&str> {
        match self {
            Participant::SeedRef { entry_id, .. } => entry_id.as_deref(),
            Participant::WinnerOf { .. } | Participant::LoserOf { .. } => None,
        }
    }

    /// Referenced match for winner/loser sides
    pub fn source_match(&self) -> Option<&str> {
        match self {
            Participant::SeedRef { .. } => None,
            Participant::WinnerOf { match_id } | Participant::LoserOf { match_id } => {
                Some(match_id.as_str())
            }
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::SeedRef {
                entry_id: Some(entry_id),
                ..
            } => write!(f, "{entry_id}"),
            Participant::SeedRef {
                seed,
                entry_id: None,
            } => write!(f, "bye (seed {seed})"),
            Participant::WinnerOf { match_id } => write!(f, "winner of {match_id}"),
            Participant::LoserOf { match_id } => write!(f, "loser of {match_id}"),
        }
    }
}

/// Match classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Round,
    Final,
    ThirdPlace,
    Group,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Round => write!(f, "round"),
            MatchType::Final => write!(f, "final"),
            MatchType::ThirdPlace => write!(f, "third_place"),
            MatchType::Group => write!(f, "group"),
        }
    }
}

/// Bracket or group a match belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOrigin {
    Bracket { bracket_id: BracketId },
    Group { group_id: GroupId },
}

/// A planned match within a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlan {
    /// Match ID, unique within the stage
    pub id: MatchId,
    /// Owning stage
    pub stage_id: StageId,
    /// Bracket or group that produced the match
    pub origin: MatchOrigin,
    /// Round number (1-indexed)
    pub round_number: u32,
    /// Match classification
    pub match_type: MatchType,
    pub home: Participant,
    pub away: Participant,
    /// Kickoff time once slotted
    pub kickoff_at: Option<DateTime<Utc>>,
    /// Venue once slotted
    pub venue_id: Option<VenueId>,
}

impl MatchPlan {
    /// Whether one side of this match is an empty seed slot, so the other
    /// side advances without playing
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() != self.away.is_bye()
    }

    /// Group this match belongs to, if any
    pub fn group_id(&self) -> Option<&str> {
        match &self.origin {
            MatchOrigin::Group { group_id } => Some(group_id.as_str()),
            MatchOrigin::Bracket { .. } => None,
        }
    }

    /// Bracket this match belongs to, if any
    pub fn bracket_id(&self) -> Option<&str> {
        match &self.origin {
            MatchOrigin::Bracket { bracket_id } => Some(bracket_id.as_str()),
            MatchOrigin::Group { .. } => None,
        }
    }
}

/// Round-robin mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundRobinMode {
    /// Each pair meets once
    #[default]
    Single,
    /// Each pair meets twice, sides reversed
    Double,
}

impl std::fmt::Display for RoundRobinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundRobinMode::Single => write!(f, "single"),
            RoundRobinMode::Double => write!(f, "double"),
        }
    }
}

/// Round-robin group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: GroupId,
    /// Short display code, e.g. "A"
    pub code: String,
    /// Single or double round robin
    #[serde(default)]
    pub round_robin_mode: RoundRobinMode,
    /// Ordered, unique entries
    pub entry_ids: Vec<EntryId>,
}

impl Group {
    /// Create a single round-robin group
    pub fn new(id: impl Into<GroupId>, code: impl Into<String>, entry_ids: Vec<EntryId>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            round_robin_mode: RoundRobinMode::Single,
            entry_ids,
        }
    }

    /// Switch the group to double round robin
    pub fn double(mut self) -> Self {
        self.round_robin_mode = RoundRobinMode::Double;
        self
    }
}

/// A venue available for concurrent matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSlot {
    pub venue_id: VenueId,
}

impl VenueSlot {
    pub fn new(venue_id: impl Into<VenueId>) -> Self {
        Self {
            venue_id: venue_id.into(),
        }
    }
}

/// One round-robin meeting between two entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub round_number: u32,
    pub home: EntryId,
    pub away: EntryId,
}

/// A match plan with its human-readable code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Display code, e.g. "SF1" or "A-03"
    pub code: String,
    #[serde(flatten)]
    pub plan: MatchPlan,
}
