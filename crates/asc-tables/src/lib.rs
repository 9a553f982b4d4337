//! Static progression tables for Ascend.
//!
//! Holds the immutable data the progression engine runs against: the level
//! threshold table, per-class level bonuses, the XP reward matrix, the ordered
//! ability classification rules, and per-class starting profiles. Tables are
//! loaded once (from JSON or the built-in [`preset`]) and validated up front;
//! a table that fails validation is a startup error, never a per-call one.

/// Ordered ability classification rules.
pub mod ability;
/// Per-class, per-level stat and ability bonuses.
pub mod bonus;
/// Error types for table construction and loading.
pub mod error;
/// Level to cumulative XP thresholds.
pub mod levels;
/// Built-in table data.
pub mod preset;
/// Per-class starting stats and abilities.
pub mod profile;
/// XP reward matrix keyed by action type and difficulty.
pub mod reward;
/// The versioned bundle of all tables.
pub mod tables;
/// Stat names and ability categories.
pub mod vocab;

pub use ability::{AbilityClassificationTable, ClassificationRule};
pub use bonus::{ClassBonusTable, LevelBonus};
pub use error::{TableError, TableResult};
pub use levels::LevelThresholdTable;
pub use profile::{StartingProfile, StartingProfiles};
pub use reward::XpRewardTable;
pub use tables::{ProgressionTables, standard_tables};
pub use vocab::{AbilityCategory, Stat};
