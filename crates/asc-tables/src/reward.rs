//! XP reward matrix: base XP by action type and difficulty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Base reward used when neither the action nor the fallback table knows a
/// difficulty.
pub const DEFAULT_REWARD: u32 = 100;

fn default_reward() -> u32 {
    DEFAULT_REWARD
}

/// Base XP rewards keyed by `(action type, difficulty)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpRewardTable {
    /// Per-action difficulty tables. Keys are lowercase.
    pub actions: BTreeMap<String, BTreeMap<String, u32>>,
    /// Difficulty table used when the action type is unknown.
    #[serde(default)]
    pub fallback: BTreeMap<String, u32>,
    /// Reward for a difficulty no consulted table knows.
    #[serde(default = "default_reward")]
    pub default_reward: u32,
}

impl XpRewardTable {
    /// Base reward for an action at a difficulty, before any modifiers.
    ///
    /// Both keys are matched case-insensitively. An unknown action falls back
    /// to the fallback difficulty table; a known action with an unknown
    /// difficulty gets [`default_reward`](Self::default_reward) directly.
    pub fn base_reward(&self, action: &str, difficulty: &str) -> u32 {
        let difficulties = self
            .actions
            .get(&action.to_lowercase())
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.fallback);
        difficulties
            .get(&difficulty.to_lowercase())
            .copied()
            .unwrap_or(self.default_reward)
    }

    /// Returns true if the action type has its own difficulty table.
    pub fn is_known_action(&self, action: &str) -> bool {
        self.actions
            .get(&action.to_lowercase())
            .is_some_and(|d| !d.is_empty())
    }

    /// Check that every key is lowercase.
    pub fn validate(&self) -> TableResult<()> {
        let difficulty_keys = self
            .actions
            .values()
            .flat_map(|d| d.keys())
            .chain(self.fallback.keys());
        for key in self.actions.keys().chain(difficulty_keys) {
            if *key != key.to_lowercase() {
                return Err(TableError::UnnormalizedKey {
                    table: "xp reward",
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> XpRewardTable {
        XpRewardTable {
            actions: BTreeMap::from([(
                "combat".to_string(),
                BTreeMap::from([("easy".to_string(), 100), ("hard".to_string(), 400)]),
            )]),
            fallback: BTreeMap::from([("easy".to_string(), 50), ("epic".to_string(), 500)]),
            default_reward: DEFAULT_REWARD,
        }
    }

    #[test]
    fn known_action() {
        let t = table();
        assert_eq!(t.base_reward("combat", "hard"), 400);
        assert_eq!(t.base_reward("COMBAT", "Easy"), 100);
        assert!(t.is_known_action("Combat"));
    }

    #[test]
    fn known_action_unknown_difficulty_skips_fallback() {
        assert_eq!(table().base_reward("combat", "epic"), DEFAULT_REWARD);
    }

    #[test]
    fn unknown_action_uses_fallback() {
        let t = table();
        assert_eq!(t.base_reward("dancing", "epic"), 500);
        assert_eq!(t.base_reward("dancing", "bizarre"), DEFAULT_REWARD);
        assert!(!t.is_known_action("dancing"));
    }

    #[test]
    fn rejects_uppercase_keys() {
        let mut t = table();
        t.fallback.insert("Hard".to_string(), 200);
        assert!(matches!(
            t.validate(),
            Err(TableError::UnnormalizedKey { .. })
        ));
    }
}
