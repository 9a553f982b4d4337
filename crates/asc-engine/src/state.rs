//! Character progression state: level, experience, stats, and abilities.

use std::collections::BTreeMap;

use asc_tables::{AbilityCategory, ProgressionTables, Stat};
use serde::{Deserialize, Serialize};

/// Stat values keyed by stat, iterated in canonical stat order.
pub type Stats = BTreeMap<Stat, i32>;

/// The bootstrap stat block: every attribute at 10, health and mana at 100.
pub fn bootstrap_stats() -> Stats {
    Stat::ALL
        .into_iter()
        .map(|stat| (stat, stat.bootstrap_value()))
        .collect()
}

/// A character's abilities, grouped by category.
///
/// Each list keeps grant order and holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    /// Always-on abilities.
    #[serde(default)]
    pub passive: Vec<String>,
    /// On-demand abilities.
    #[serde(default)]
    pub active: Vec<String>,
    /// Signature abilities.
    #[serde(default)]
    pub special: Vec<String>,
}

impl Abilities {
    /// The abilities in a category.
    pub fn get(&self, category: AbilityCategory) -> &[String] {
        match category {
            AbilityCategory::Passive => &self.passive,
            AbilityCategory::Active => &self.active,
            AbilityCategory::Special => &self.special,
        }
    }

    fn get_mut(&mut self, category: AbilityCategory) -> &mut Vec<String> {
        match category {
            AbilityCategory::Passive => &mut self.passive,
            AbilityCategory::Active => &mut self.active,
            AbilityCategory::Special => &mut self.special,
        }
    }

    /// Returns true if `ability` is already in `category`.
    pub fn contains(&self, category: AbilityCategory, ability: &str) -> bool {
        self.get(category).iter().any(|a| a == ability)
    }

    /// Append `ability` to `category` unless already present.
    /// Returns true if it was added.
    pub fn insert(&mut self, category: AbilityCategory, ability: &str) -> bool {
        if self.contains(category, ability) {
            return false;
        }
        self.get_mut(category).push(ability.to_string());
        true
    }

    /// Total number of abilities across all categories.
    pub fn len(&self) -> usize {
        self.passive.len() + self.active.len() + self.special.len()
    }

    /// Returns true if every category is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `(category, ability)` pair, category by category.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityCategory, &str)> {
        AbilityCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |a| (c, a.as_str())))
    }
}

/// The progression-relevant part of a character.
///
/// Created once at character creation and afterwards changed only by
/// [`ProgressionEngine::add_experience`](crate::ProgressionEngine::add_experience).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Current level (1-based).
    pub level: u32,
    /// Lifetime experience.
    pub experience: u64,
    /// Class name, matched case-insensitively against the tables.
    pub character_class: String,
    /// Stat values. May be empty for characters created before stats existed.
    #[serde(default)]
    pub stats: Stats,
    /// Granted abilities.
    #[serde(default)]
    pub abilities: Abilities,
}

impl ProgressionState {
    /// A level-1 character with the bootstrap stat block and no abilities.
    pub fn new(character_class: impl Into<String>) -> Self {
        Self {
            level: 1,
            experience: 0,
            character_class: character_class.into(),
            stats: bootstrap_stats(),
            abilities: Abilities::default(),
        }
    }

    /// A level-1 character with the class's starting profile applied.
    ///
    /// Unknown classes get the shared basics only.
    pub fn starting(character_class: impl Into<String>, tables: &ProgressionTables) -> Self {
        let mut state = Self::new(character_class);
        let profiles = tables.starting();
        let class_profile = profiles.for_class(&state.character_class);

        for profile in std::iter::once(&profiles.basics).chain(class_profile) {
            for (stat, modifier) in &profile.stat_modifiers {
                if let Some(value) = state.stats.get_mut(stat) {
                    *value = value.saturating_add(*modifier);
                }
            }
            for (&category, abilities) in &profile.abilities {
                for ability in abilities {
                    state.abilities.insert(category, ability);
                }
            }
        }
        state
    }

    /// Fill in the bootstrap stat block if the stat map is entirely empty.
    ///
    /// A partially populated map is left as it is, so bonuses for its missing
    /// stats will not apply. Empty abilities already are the bootstrap
    /// ability set.
    pub fn bootstrap(&mut self) {
        if self.stats.is_empty() {
            self.stats = bootstrap_stats();
        }
    }
}
