//! The versioned bundle of every progression table.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityClassificationTable;
use crate::bonus::ClassBonusTable;
use crate::error::{TableError, TableResult};
use crate::levels::LevelThresholdTable;
use crate::preset;
use crate::profile::StartingProfiles;
use crate::reward::XpRewardTable;

/// All tables the engine reads, validated together.
///
/// Construction always validates (except for the built-in [`preset`] data,
/// which is validated by tests), and there are no mutating methods, so a
/// `ProgressionTables` value can be shared freely across threads once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTables")]
pub struct ProgressionTables {
    version: String,
    levels: LevelThresholdTable,
    class_bonuses: ClassBonusTable,
    rewards: XpRewardTable,
    abilities: AbilityClassificationTable,
    starting: StartingProfiles,
}

/// Wire form, validated on conversion.
#[derive(Deserialize)]
struct RawTables {
    version: String,
    levels: LevelThresholdTable,
    #[serde(default)]
    class_bonuses: ClassBonusTable,
    rewards: XpRewardTable,
    abilities: AbilityClassificationTable,
    #[serde(default)]
    starting: StartingProfiles,
}

impl TryFrom<RawTables> for ProgressionTables {
    type Error = TableError;

    fn try_from(raw: RawTables) -> TableResult<Self> {
        Self::new(
            raw.version,
            raw.levels,
            raw.class_bonuses,
            raw.rewards,
            raw.abilities,
            raw.starting,
        )
    }
}

static STANDARD: LazyLock<ProgressionTables> = LazyLock::new(preset::standard);

/// The process-wide built-in tables, built on first use.
pub fn standard_tables() -> &'static ProgressionTables {
    &STANDARD
}

impl ProgressionTables {
    /// Bundle and validate a table set.
    pub fn new(
        version: impl Into<String>,
        levels: LevelThresholdTable,
        class_bonuses: ClassBonusTable,
        rewards: XpRewardTable,
        abilities: AbilityClassificationTable,
        starting: StartingProfiles,
    ) -> TableResult<Self> {
        let tables = Self::from_parts(version, levels, class_bonuses, rewards, abilities, starting);
        tables.validate()?;
        Ok(tables)
    }

    pub(crate) fn from_parts(
        version: impl Into<String>,
        levels: LevelThresholdTable,
        class_bonuses: ClassBonusTable,
        rewards: XpRewardTable,
        abilities: AbilityClassificationTable,
        starting: StartingProfiles,
    ) -> Self {
        Self {
            version: version.into(),
            levels,
            class_bonuses,
            rewards,
            abilities,
            starting,
        }
    }

    /// A fresh copy of the built-in tables.
    pub fn standard() -> Self {
        preset::standard()
    }

    /// Parse and validate tables from JSON.
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse, and validate tables from a JSON file.
    pub fn from_path(path: &Path) -> TableResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every table.
    pub fn validate(&self) -> TableResult<()> {
        self.levels.validate()?;
        self.class_bonuses.validate()?;
        self.rewards.validate()?;
        self.abilities.validate()?;
        self.starting.validate()
    }

    /// Version tag of this table set.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Level thresholds.
    pub fn levels(&self) -> &LevelThresholdTable {
        &self.levels
    }

    /// Class level bonuses.
    pub fn class_bonuses(&self) -> &ClassBonusTable {
        &self.class_bonuses
    }

    /// XP reward matrix.
    pub fn rewards(&self) -> &XpRewardTable {
        &self.rewards
    }

    /// Ability classification rules.
    pub fn abilities(&self) -> &AbilityClassificationTable {
        &self.abilities
    }

    /// Class starting profiles.
    pub fn starting(&self) -> &StartingProfiles {
        &self.starting
    }
}
