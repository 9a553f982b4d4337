//! The fixed vocabularies shared by every table: stat names and ability
//! categories.

use serde::{Deserialize, Serialize};

/// A character stat.
///
/// Declaration order is the canonical display order, and since the enum
/// derives `Ord`, stat maps keyed by it iterate in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
    /// Hit points.
    Health,
    /// Spell points.
    Mana,
}

impl Stat {
    /// Every stat, in canonical order.
    pub const ALL: [Stat; 8] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
        Self::Health,
        Self::Mana,
    ];

    /// The lowercase identifier used in tables and on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
            Self::Health => "health",
            Self::Mana => "mana",
        }
    }

    /// Capitalized name for user-facing text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
            Self::Health => "Health",
            Self::Mana => "Mana",
        }
    }

    /// Value of this stat in the bootstrap stat block.
    pub fn bootstrap_value(self) -> i32 {
        match self {
            Self::Health | Self::Mana => 100,
            _ => 10,
        }
    }

    /// Parse a stat from its name, case-insensitively.
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|stat| stat.name() == s)
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How an ability is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    /// Always in effect.
    Passive,
    /// Used on demand.
    Active,
    /// Signature abilities with limited use.
    Special,
}

impl AbilityCategory {
    /// Every category, in canonical order.
    pub const ALL: [AbilityCategory; 3] = [Self::Passive, Self::Active, Self::Special];

    /// The lowercase identifier used in tables and on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Active => "active",
            Self::Special => "special",
        }
    }

    /// Capitalized name for user-facing text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passive => "Passive",
            Self::Active => "Active",
            Self::Special => "Special",
        }
    }

    /// Parse a category from its name, case-insensitively.
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == s)
    }
}

impl std::fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
