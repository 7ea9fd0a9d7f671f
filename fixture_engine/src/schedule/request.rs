//! Serializable stage requests tying the generators together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assembler::{assemble_groups, assemble_knockout, schedule_knockout};
use super::slots::{SlotConfig, assign_slots};
use crate::errors::FixtureResult;
use crate::knockout::build_knockout_bracket;
use crate::models::{BracketId, Fixture, Group, Seed, StageId, VenueSlot};
use crate::round_robin::generate_group_stage;

/// Competition format of a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageFormat {
    Knockout {
        bracket_id: BracketId,
        seeds: Vec<Seed>,
        #[serde(default)]
        third_place_match: bool,
    },
    RoundRobin {
        groups: Vec<Group>,
    },
}

/// Venue and timing input for a stage
///
/// Duration and break fall back to the caller's defaults when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingRequest {
    pub venues: Vec<VenueSlot>,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub match_duration_minutes: Option<i64>,
    #[serde(default)]
    pub break_minutes: Option<i64>,
}

impl SchedulingRequest {
    /// Resolve timing against defaults
    pub fn slot_config(&self, defaults: &SlotConfig) -> SlotConfig {
        SlotConfig {
            start_at: self.start_at,
            match_duration_minutes: self
                .match_duration_minutes
                .unwrap_or(defaults.match_duration_minutes),
            break_minutes: self.break_minutes.unwrap_or(defaults.break_minutes),
        }
    }
}

/// Everything needed to generate the fixtures of one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRequest {
    pub stage_id: StageId,
    pub format: StageFormat,
    /// Without scheduling the fixtures carry no kickoff or venue
    #[serde(default)]
    pub scheduling: Option<SchedulingRequest>,
}

impl StageRequest {
    /// Parse a request from JSON
    pub fn from_json(input: &str) -> FixtureResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Generated fixtures of one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFixtures {
    pub stage_id: StageId,
    pub fixtures: Vec<Fixture>,
}

/// Generate, slot and label the fixtures of a stage
///
/// `defaults` supplies duration and break when the request's scheduling
/// section leaves them out. Knockout bye matches are never slotted.
///
/// # Errors
///
/// Any validation error of the generators or the slot assigner; nothing is
/// returned on failure.
pub fn generate_stage(request: &StageRequest, defaults: &SlotConfig) -> FixtureResult<StageFixtures> {
    let stage_id = request.stage_id.as_str();
    let scheduling = request
        .scheduling
        .as_ref()
        .map(|scheduling| (scheduling.venues.as_slice(), scheduling.slot_config(defaults)));

    let fixtures = match &request.format {
        StageFormat::Knockout {
            bracket_id,
            seeds,
            third_place_match,
        } => {
            let mut matches =
                build_knockout_bracket(stage_id, bracket_id, seeds, *third_place_match)?
                    .into_matches();
            if let Some((venues, config)) = &scheduling {
                matches = schedule_knockout(matches, venues, config)?;
            }
            assemble_knockout(matches)
        }
        StageFormat::RoundRobin { groups } => {
            let mut matches = generate_group_stage(stage_id, groups)?;
            if let Some((venues, config)) = &scheduling {
                matches = assign_slots(matches, venues, config)?;
            }
            assemble_groups(groups, matches)?
        }
    };

    log::info!(
        "Generated {} fixtures for stage {}",
        fixtures.len(),
        stage_id
    );

    Ok(StageFixtures {
        stage_id: request.stage_id.clone(),
        fixtures,
    })
}
