//! Class bonus table: what a class gains on reaching each level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::vocab::Stat;

/// Stat increases and new abilities granted on reaching a level.
///
/// Deltas are unsigned: level bonuses only ever add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBonus {
    /// Stat increases.
    #[serde(default)]
    pub stats: BTreeMap<Stat, u32>,
    /// Ability identifiers granted, in grant order.
    #[serde(default)]
    pub abilities: Vec<String>,
}

impl LevelBonus {
    /// An empty bonus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stat increase.
    pub fn with_stat(mut self, stat: Stat, delta: u32) -> Self {
        let total = self.stats.entry(stat).or_insert(0);
        *total = total.saturating_add(delta);
        self
    }

    /// Add an ability grant.
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    /// Returns true if the bonus changes nothing.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.abilities.is_empty()
    }
}

/// Per-class level bonuses. Class names are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassBonusTable {
    classes: BTreeMap<String, BTreeMap<u32, LevelBonus>>,
}

impl ClassBonusTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bonus for a class at a level, replacing any previous one.
    pub fn insert(&mut self, class: &str, level: u32, bonus: LevelBonus) {
        self.classes
            .entry(class.to_lowercase())
            .or_default()
            .insert(level, bonus);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, class: &str, level: u32, bonus: LevelBonus) -> Self {
        self.insert(class, level, bonus);
        self
    }

    /// The bonus for `class` at `level`. Class matching is case-insensitive.
    pub fn bonus(&self, class: &str, level: u32) -> Option<&LevelBonus> {
        self.levels_for(class)?.get(&level)
    }

    /// The full bonus schedule for a class.
    pub fn levels_for(&self, class: &str) -> Option<&BTreeMap<u32, LevelBonus>> {
        self.classes.get(&class.to_lowercase())
    }

    /// All class names with at least one entry.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Check that class keys are lowercase and no bonus sits below level 2.
    pub fn validate(&self) -> TableResult<()> {
        for (class, levels) in &self.classes {
            if *class != class.to_lowercase() {
                return Err(TableError::UnnormalizedKey {
                    table: "class bonus",
                    key: class.clone(),
                });
            }
            if let Some(&level) = levels.keys().find(|&&l| l < 2) {
                return Err(TableError::UnreachableBonus {
                    class: class.clone(),
                    level,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let bonus = LevelBonus::new()
            .with_stat(Stat::Strength, 1)
            .with_stat(Stat::Strength, 1)
            .with_ability("Cleave");
        assert_eq!(bonus.stats[&Stat::Strength], 2);
        assert_eq!(bonus.abilities, vec!["Cleave".to_string()]);
        assert!(!bonus.is_empty());
        assert!(LevelBonus::new().is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = ClassBonusTable::new().with(
            "Warrior",
            2,
            LevelBonus::new().with_stat(Stat::Strength, 1),
        );
        assert!(table.bonus("warrior", 2).is_some());
        assert!(table.bonus("WARRIOR", 2).is_some());
        assert!(table.bonus("warrior", 3).is_none());
        assert!(table.bonus("wizard", 2).is_none());
        assert_eq!(table.classes().collect::<Vec<_>>(), vec!["warrior"]);
    }

    #[test]
    fn rejects_bonus_at_level_one() {
        let table = ClassBonusTable::new().with("monk", 1, LevelBonus::new());
        assert!(matches!(
            table.validate(),
            Err(TableError::UnreachableBonus { level: 1, .. })
        ));
    }

    #[test]
    fn rejects_uppercase_keys_from_json() {
        let table: ClassBonusTable =
            serde_json::from_str(r#"{"Rogue": {"2": {"stats": {"dexterity": 1}}}}"#).unwrap();
        assert!(matches!(
            table.validate(),
            Err(TableError::UnnormalizedKey { .. })
        ));
    }

    #[test]
    fn json_defaults_missing_fields() {
        let table: ClassBonusTable =
            serde_json::from_str(r#"{"rogue": {"2": {"abilities": ["Cunning Action"]}}}"#)
                .unwrap();
        let bonus = table.bonus("rogue", 2).unwrap();
        assert!(bonus.stats.is_empty());
        assert_eq!(bonus.abilities, vec!["Cunning Action".to_string()]);
    }

    #[test]
    fn repeated_stat_deltas_accumulate_and_saturate() {
        let bonus = LevelBonus::new()
            .with_stat(Stat::Strength, 2)
            .with_stat(Stat::Strength, 3)
            .with_stat(Stat::Mana, u32::MAX)
            .with_stat(Stat::Mana, 1);
        assert_eq!(bonus.stats[&Stat::Strength], 5);
        assert_eq!(bonus.stats[&Stat::Mana], u32::MAX);
    }
}
