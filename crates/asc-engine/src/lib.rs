//! Character progression engine for Ascend.
//!
//! Turns in-game actions into XP ([`reward`]), resolves any number of level
//! transitions for a single XP award ([`progression`]), classifies granted
//! abilities ([`classify`]), and produces an auditable [`LevelUpRecord`] per
//! level gained. The engine is pure: persistence and notification delivery sit
//! behind the collaborator traits in [`service`], which also hosts the
//! orchestrator that wires them together.

pub mod classify;
pub mod error;
pub mod memory;
pub mod message;
pub mod progression;
pub mod reward;
pub mod service;
pub mod state;
pub mod wire;

pub use classify::{classify, display_name, normalize_ability_id};
pub use error::{ProgressionError, ProgressionResult};
pub use progression::{
    AbilityChange, ExperienceResult, LevelUpRecord, NextLevelInfo, ProgressionEngine,
    ProgressionUpdate, StatChange,
};
pub use reward::{ExperienceCalculator, FixedJitter, Jitter, RewardPolicy, SeededJitter};
pub use service::{
    ActionRequest, CharacterRecord, CharacterRepository, Notification, NotificationPriority,
    NotificationSink, ProgressionService, RepositoryError, ServiceError, ServiceResult,
};
pub use state::{Abilities, ProgressionState, Stats};
pub use wire::{ActionSummary, ExperienceResponse};
