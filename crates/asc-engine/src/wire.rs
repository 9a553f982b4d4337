//! Response shape for API clients.
//!
//! Field names and the `null` for an empty `level_ups` list are a
//! compatibility contract with existing clients.

use serde::{Deserialize, Serialize};

use crate::progression::{ExperienceResult, LevelUpRecord};
use crate::service::CharacterRecord;

/// The action that produced an award, echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    /// Action type as requested.
    #[serde(rename = "type")]
    pub action_type: String,
    /// Difficulty as requested.
    pub difficulty: String,
    /// Whether the action succeeded.
    pub success: bool,
    /// XP the calculator awarded.
    pub xp_awarded: u32,
}

/// Result of an experience award as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceResponse {
    /// Always true; failures are reported as errors instead.
    pub success: bool,
    /// The character after the award.
    pub character: CharacterRecord,
    /// XP added.
    pub xp_gained: u64,
    /// Experience total after the award.
    pub xp_total: u64,
    /// Level before the award.
    pub previous_level: u32,
    /// Level after the award.
    pub new_level: u32,
    /// Levels gained, or `None` if none were.
    pub level_ups: Option<Vec<LevelUpRecord>>,
    /// Present when the award came from an action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionSummary>,
}

impl ExperienceResponse {
    /// Build a response from an engine result and the updated character.
    pub fn new(character: CharacterRecord, result: ExperienceResult) -> Self {
        Self {
            success: true,
            character,
            xp_gained: result.xp_gained,
            xp_total: result.xp_total,
            previous_level: result.previous_level,
            new_level: result.new_level,
            level_ups: Some(result.level_ups).filter(|ups| !ups.is_empty()),
            action: None,
        }
    }

    /// Attach the originating action.
    pub fn with_action(mut self, action: ActionSummary) -> Self {
        self.action = Some(action);
        self
    }
}
