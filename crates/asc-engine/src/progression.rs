//! The progression engine: applies an XP award to a character and resolves
//! every level it crosses.
//!
//! Levels are resolved in ascending order. Each level's class bonus applies
//! on top of the working state left by the previous level in the same call,
//! and each produces one [`LevelUpRecord`] snapshotting the result. The engine
//! never performs I/O; the caller persists [`ExperienceResult::update`] and
//! forwards one notification per record.

use std::collections::BTreeMap;

use asc_tables::{AbilityCategory, LevelBonus, ProgressionTables, Stat};
use serde::{Deserialize, Serialize};

use crate::classify::{classify, display_name};
use crate::error::{ProgressionError, ProgressionResult};
use crate::state::{Abilities, ProgressionState, Stats};

/// How a single stat changed on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    /// Value before the bonus.
    pub old: i32,
    /// Value after the bonus.
    pub new: i32,
    /// Bonus applied.
    pub delta: u32,
}

/// An ability granted on level-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityChange {
    /// Ability id as stored on the character.
    pub id: String,
    /// Category it was filed under.
    pub category: AbilityCategory,
    /// Human-readable name.
    pub display_name: String,
}

/// Audit entry for one level gained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpRecord {
    /// The level reached.
    pub level: u32,
    /// Class whose bonus table was consulted.
    pub character_class: String,
    /// Cumulative XP threshold of this level.
    pub xp_required: u64,
    /// Stats changed by this level's bonus.
    pub stat_changes: BTreeMap<Stat, StatChange>,
    /// Abilities newly granted by this level's bonus.
    pub ability_changes: Vec<AbilityChange>,
    /// Stats after this level's bonus.
    #[serde(rename = "new_stats")]
    pub stats: Stats,
    /// Abilities after this level's bonus.
    #[serde(rename = "new_abilities")]
    pub abilities: Abilities,
}

impl LevelUpRecord {
    /// Returns true if the level brought no stat or ability change.
    pub fn is_empty(&self) -> bool {
        self.stat_changes.is_empty() && self.ability_changes.is_empty()
    }
}

/// What the caller must persist after an award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionUpdate {
    /// No level was gained: only the experience total changes.
    Experience(u64),
    /// One or more levels were gained: level, stats, abilities, and
    /// experience all change together.
    Full(ProgressionState),
}

impl ProgressionUpdate {
    /// Apply this update to a stored state.
    pub fn apply_to(&self, state: &mut ProgressionState) {
        match self {
            Self::Experience(experience) => state.experience = *experience,
            Self::Full(updated) => *state = updated.clone(),
        }
    }

    /// The experience total carried by this update.
    pub fn experience(&self) -> u64 {
        match self {
            Self::Experience(experience) => *experience,
            Self::Full(state) => state.experience,
        }
    }
}

/// Outcome of [`ProgressionEngine::add_experience`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceResult {
    /// The state after the award.
    pub updated_state: ProgressionState,
    /// XP added by this call.
    pub xp_gained: u64,
    /// Experience total after the award.
    pub xp_total: u64,
    /// Level before the award.
    pub previous_level: u32,
    /// Level after the award.
    pub new_level: u32,
    /// One record per level gained, ascending.
    pub level_ups: Vec<LevelUpRecord>,
}

impl ExperienceResult {
    /// Returns true if at least one level was gained.
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.previous_level
    }

    /// The persistence instruction for this result.
    pub fn update(&self) -> ProgressionUpdate {
        if self.leveled_up() {
            ProgressionUpdate::Full(self.updated_state.clone())
        } else {
            ProgressionUpdate::Experience(self.xp_total)
        }
    }
}

/// Where a character stands relative to its next level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextLevelInfo {
    /// Current level.
    pub current_level: u32,
    /// Current experience total.
    pub current_xp: u64,
    /// The next reachable level, or `None` at the level cap.
    pub next_level: Option<u32>,
    /// Cumulative XP the next level requires.
    pub xp_for_next_level: Option<u64>,
    /// XP still missing (0 at the cap).
    pub xp_needed: u64,
    /// Lifetime XP as a percentage of the next threshold, capped at 100.
    pub progress_percent: f64,
    /// Bonus the class receives at the next level.
    pub next_bonus: Option<LevelBonus>,
}

/// Stateless progression engine over a borrowed table set.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionEngine<'t> {
    tables: &'t ProgressionTables,
}

impl<'t> ProgressionEngine<'t> {
    /// An engine reading from `tables`.
    pub fn new(tables: &'t ProgressionTables) -> Self {
        Self { tables }
    }

    /// The tables this engine reads.
    pub fn tables(&self) -> &'t ProgressionTables {
        self.tables
    }

    /// Add `xp_amount` to `state` and resolve every level it crosses.
    ///
    /// `state` is not modified; the new state is in the result. Fails only on
    /// a non-positive amount or a counter overflow.
    pub fn add_experience(
        &self,
        state: &ProgressionState,
        xp_amount: i64,
    ) -> ProgressionResult<ExperienceResult> {
        let gained = u64::try_from(xp_amount)
            .ok()
            .filter(|&xp| xp > 0)
            .ok_or(ProgressionError::InvalidAmount(xp_amount))?;
        let xp_total =
            state
                .experience
                .checked_add(gained)
                .ok_or(ProgressionError::ExperienceOverflow {
                    current: state.experience,
                    amount: gained,
                })?;

        let previous_level = state.level;
        let mut working = state.clone();
        working.bootstrap();

        let mut level_ups = Vec::new();
        for (level, threshold) in self.tables.levels().levels_above(previous_level) {
            if xp_total < threshold {
                break;
            }
            level_ups.push(self.apply_level(&mut working, level, threshold));
            working.level = level;
        }

        let updated_state = if level_ups.is_empty() {
            ProgressionState {
                experience: xp_total,
                ..state.clone()
            }
        } else {
            working.experience = xp_total;
            working
        };
        let new_level = updated_state.level;

        if new_level > previous_level {
            tracing::info!(
                class = %state.character_class,
                previous_level,
                new_level,
                xp_total,
                "character leveled up"
            );
        }

        Ok(ExperienceResult {
            updated_state,
            xp_gained: gained,
            xp_total,
            previous_level,
            new_level,
            level_ups,
        })
    }

    /// Apply the class bonus for `level` to the working state.
    fn apply_level(
        &self,
        working: &mut ProgressionState,
        level: u32,
        threshold: u64,
    ) -> LevelUpRecord {
        let class = working.character_class.to_lowercase();
        let mut stat_changes = BTreeMap::new();
        let mut ability_changes = Vec::new();

        match self.tables.class_bonuses().bonus(&class, level) {
            Some(bonus) => {
                for (&stat, &delta) in &bonus.stats {
                    let Some(value) = working.stats.get_mut(&stat) else {
                        tracing::warn!(%stat, level, %class, "stat missing from character, bonus skipped");
                        continue;
                    };
                    let old = *value;
                    *value = old.saturating_add_unsigned(delta);
                    stat_changes.insert(
                        stat,
                        StatChange {
                            old,
                            new: *value,
                            delta,
                        },
                    );
                }

                for id in &bonus.abilities {
                    let category = classify(id, &class, self.tables.abilities());
                    if working.abilities.insert(category, id) {
                        ability_changes.push(AbilityChange {
                            id: id.clone(),
                            category,
                            display_name: display_name(id),
                        });
                    }
                }
            }
            None => tracing::debug!(level, %class, "no class bonus for level"),
        }

        tracing::debug!(
            level,
            stats = stat_changes.len(),
            abilities = ability_changes.len(),
            "resolved level-up"
        );

        LevelUpRecord {
            level,
            character_class: class,
            xp_required: threshold,
            stat_changes,
            ability_changes,
            stats: working.stats.clone(),
            abilities: working.abilities.clone(),
        }
    }

    /// How far `state` is from its next level.
    pub fn next_level_info(&self, state: &ProgressionState) -> NextLevelInfo {
        let next = self.tables.levels().levels_above(state.level).next();
        let Some((next_level, threshold)) = next else {
            return NextLevelInfo {
                current_level: state.level,
                current_xp: state.experience,
                next_level: None,
                xp_for_next_level: None,
                xp_needed: 0,
                progress_percent: 100.0,
                next_bonus: None,
            };
        };

        let progress_percent = if threshold == 0 {
            100.0
        } else {
            (state.experience as f64 / threshold as f64 * 100.0).min(100.0)
        };

        NextLevelInfo {
            current_level: state.level,
            current_xp: state.experience,
            next_level: Some(next_level),
            xp_for_next_level: Some(threshold),
            xp_needed: threshold.saturating_sub(state.experience),
            progress_percent,
            next_bonus: self
                .tables
                .class_bonuses()
                .bonus(&state.character_class, next_level)
                .cloned(),
        }
    }
}
