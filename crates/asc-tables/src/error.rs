//! Error types for progression tables.

use std::path::PathBuf;

/// Errors raised while building, loading, or validating progression tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The level threshold table has no entries.
    #[error("level table is empty")]
    EmptyLevels,

    /// The level threshold table does not map level 1 to 0 XP.
    #[error("level table must map level 1 to 0 XP")]
    MissingBaseLevel,

    /// Level 0 appears in a table.
    #[error("level 0 is not a valid level")]
    LevelZero,

    /// A level's threshold does not exceed the threshold of the level below it.
    #[error("threshold for level {level} ({threshold}) must exceed level {previous} ({previous_threshold})")]
    NonIncreasingThreshold {
        /// The offending level.
        level: u32,
        /// Its threshold.
        threshold: u64,
        /// The preceding defined level.
        previous: u32,
        /// The preceding threshold.
        previous_threshold: u64,
    },

    /// A class bonus is attached to a level that leveling up never reaches.
    #[error("class '{class}' defines a bonus for level {level}, which is never reached by leveling up")]
    UnreachableBonus {
        /// The class name.
        class: String,
        /// The level below 2.
        level: u32,
    },

    /// A lookup key is not in normalized (lowercase) form.
    #[error("{table} key '{key}' must be lowercase")]
    UnnormalizedKey {
        /// Which table the key belongs to.
        table: &'static str,
        /// The key as written.
        key: String,
    },

    /// An ability classification rule has an empty or unnormalized pattern.
    #[error("ability classification rule {index} has invalid pattern '{pattern}'")]
    InvalidPattern {
        /// Position of the rule in the ordered list.
        index: usize,
        /// The pattern as written.
        pattern: String,
    },

    /// A table file could not be read.
    #[error("failed to read tables from {path}: {source}")]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A table file is not valid JSON for the table schema.
    #[error("malformed tables: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
