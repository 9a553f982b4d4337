//! The level threshold table: level to cumulative XP required.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Cumulative XP required to reach each level.
///
/// Levels above the highest key are unreachable regardless of XP. Levels do
/// not have to be contiguous; only defined levels can be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelThresholdTable {
    thresholds: BTreeMap<u32, u64>,
}

impl LevelThresholdTable {
    /// Build and validate a table from `(level, threshold)` pairs.
    pub fn new(thresholds: impl IntoIterator<Item = (u32, u64)>) -> TableResult<Self> {
        let table = Self {
            thresholds: thresholds.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Wrap a map without validating it.
    pub(crate) fn from_map(thresholds: BTreeMap<u32, u64>) -> Self {
        Self { thresholds }
    }

    /// Check that level 1 maps to 0 and thresholds strictly increase.
    pub fn validate(&self) -> TableResult<()> {
        if self.thresholds.is_empty() {
            return Err(TableError::EmptyLevels);
        }
        if self.thresholds.contains_key(&0) {
            return Err(TableError::LevelZero);
        }
        if self.thresholds.get(&1) != Some(&0) {
            return Err(TableError::MissingBaseLevel);
        }

        let mut previous: Option<(u32, u64)> = None;
        for (&level, &threshold) in &self.thresholds {
            if let Some((prev_level, prev_threshold)) = previous {
                if threshold <= prev_threshold {
                    return Err(TableError::NonIncreasingThreshold {
                        level,
                        threshold,
                        previous: prev_level,
                        previous_threshold: prev_threshold,
                    });
                }
            }
            previous = Some((level, threshold));
        }
        Ok(())
    }

    /// XP required to reach `level`, if the level is defined.
    pub fn threshold(&self, level: u32) -> Option<u64> {
        self.thresholds.get(&level).copied()
    }

    /// The highest reachable level.
    pub fn max_level(&self) -> u32 {
        self.thresholds.keys().next_back().copied().unwrap_or(1)
    }

    /// Defined levels strictly above `level`, ascending.
    pub fn levels_above(&self, level: u32) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.thresholds
            .range((Bound::Excluded(level), Bound::Unbounded))
            .map(|(&l, &t)| (l, t))
    }

    /// The highest level whose threshold `experience` meets.
    pub fn level_for_experience(&self, experience: u64) -> u32 {
        self.thresholds
            .iter()
            .take_while(|&(_, &t)| t <= experience)
            .map(|(&l, _)| l)
            .last()
            .unwrap_or(1)
    }

    /// All `(level, threshold)` pairs, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.thresholds.iter().map(|(&l, &t)| (l, t))
    }

    /// Number of defined levels.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns true if no levels are defined.
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}
