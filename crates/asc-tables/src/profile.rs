//! Starting profiles: the stats and abilities a new character of each class
//! begins with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::vocab::{AbilityCategory, Stat};

/// Adjustments applied to the bootstrap stat block at character creation,
/// plus the abilities granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingProfile {
    /// Signed stat modifiers (creation may lower a stat; leveling never does).
    #[serde(default)]
    pub stat_modifiers: BTreeMap<Stat, i32>,
    /// Starting abilities by category, in order.
    #[serde(default)]
    pub abilities: BTreeMap<AbilityCategory, Vec<String>>,
}

impl StartingProfile {
    /// An empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stat modifier.
    pub fn with_modifier(mut self, stat: Stat, modifier: i32) -> Self {
        self.stat_modifiers.insert(stat, modifier);
        self
    }

    /// Add starting abilities in a category.
    pub fn with_abilities(mut self, category: AbilityCategory, abilities: &[&str]) -> Self {
        self.abilities
            .entry(category)
            .or_default()
            .extend(abilities.iter().map(|a| a.to_string()));
        self
    }
}

/// Starting profiles for every class, plus the basics all classes share.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingProfiles {
    /// Granted to every class, listed before class-specific abilities.
    #[serde(default)]
    pub basics: StartingProfile,
    /// Per-class profiles. Keys are lowercase.
    #[serde(default)]
    pub classes: BTreeMap<String, StartingProfile>,
}

impl StartingProfiles {
    /// The profile for a class, matched case-insensitively.
    pub fn for_class(&self, class: &str) -> Option<&StartingProfile> {
        self.classes.get(&class.to_lowercase())
    }

    /// Check that class keys are lowercase.
    pub fn validate(&self) -> TableResult<()> {
        match self.classes.keys().find(|k| **k != k.to_lowercase()) {
            Some(key) => Err(TableError::UnnormalizedKey {
                table: "starting profile",
                key: key.clone(),
            }),
            None => Ok(()),
        }
    }
}
