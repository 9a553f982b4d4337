//! Error types for the progression engine.

/// Errors returned by engine operations.
///
/// Unknown classes and abilities are not errors: they degrade to the
/// bootstrap stat block, an empty bonus, or the `active` category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// The XP amount to add was zero or negative.
    #[error("XP amount must be greater than 0, got {0}")]
    InvalidAmount(i64),

    /// Adding the XP would overflow the experience counter.
    #[error("experience total overflows: {current} + {amount}")]
    ExperienceOverflow {
        /// Experience before the award.
        current: u64,
        /// The award.
        amount: u64,
    },
}

/// Convenience result type for engine operations.
pub type ProgressionResult<T> = Result<T, ProgressionError>;
