//! Orchestration: load a character, run the engine, persist, notify.
//!
//! Persistence and notification delivery are collaborators behind traits.
//! The service does not serialize concurrent awards for the same character;
//! a repository shared between writers must do that itself (per-character
//! locking, a single-writer queue, or version-checked saves).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use asc_tables::ProgressionTables;

use crate::error::ProgressionError;
use crate::message::{level_up_message, level_up_title};
use crate::progression::{LevelUpRecord, NextLevelInfo, ProgressionEngine, ProgressionUpdate};
use crate::reward::{ExperienceCalculator, Jitter, RewardPolicy};
use crate::state::ProgressionState;
use crate::wire::{ActionSummary, ExperienceResponse};

/// A stored character as the service sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// User who owns the character and receives its notifications.
    #[serde(default)]
    pub owner: Option<Uuid>,
    /// Progression fields, flattened into the record.
    #[serde(flatten)]
    pub progression: ProgressionState,
}

/// Errors from a [`CharacterRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No character has the requested id.
    #[error("character not found: {0}")]
    NotFound(Uuid),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Backend(String),
}

/// Loads and persists character progression.
pub trait CharacterRepository {
    /// Load a character.
    fn load(&self, id: Uuid) -> Result<CharacterRecord, RepositoryError>;

    /// Persist the outcome of an award.
    fn save(&mut self, id: Uuid, update: &ProgressionUpdate) -> Result<(), RepositoryError>;
}

/// Urgency of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    /// Informational.
    Low,
    /// Default.
    Medium,
    /// Worth interrupting for; used for level-ups.
    High,
    /// Needs attention now.
    Critical,
}

/// A message addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Recipient.
    pub user_id: Uuid,
    /// Character the notification concerns.
    pub character_id: Uuid,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Urgency.
    pub priority: NotificationPriority,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Delivers notifications.
pub trait NotificationSink {
    /// Deliver one notification. Failures are reported, not retried.
    fn emit(&mut self, notification: Notification) -> Result<(), String>;
}

/// Errors from [`ProgressionService`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The engine rejected the award.
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    /// The character does not exist.
    #[error("character not found: {0}")]
    CharacterNotFound(Uuid),

    /// The repository failed.
    #[error("persistence failure: {0}")]
    Persistence(#[source] RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::CharacterNotFound(id),
            other => Self::Persistence(other),
        }
    }
}

/// Convenience result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// An in-game action to reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Action type (combat, quest, puzzle, ...).
    pub action_type: String,
    /// Difficulty label.
    pub difficulty: String,
    /// Whether the action succeeded.
    pub success: bool,
}

impl ActionRequest {
    /// A successful action at medium difficulty.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            difficulty: "medium".to_string(),
            success: true,
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set whether the action succeeded.
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }
}

/// Runs awards end to end against a repository and a notification sink.
pub struct ProgressionService<'t, R, N> {
    engine: ProgressionEngine<'t>,
    calculator: ExperienceCalculator<'t>,
    repository: R,
    notifier: N,
}

impl<'t, R: CharacterRepository, N: NotificationSink> ProgressionService<'t, R, N> {
    /// A service over `tables` with the default reward policy.
    pub fn new(tables: &'t ProgressionTables, repository: R, notifier: N) -> Self {
        Self {
            engine: ProgressionEngine::new(tables),
            calculator: ExperienceCalculator::new(tables),
            repository,
            notifier,
        }
    }

    /// Replace the reward policy.
    pub fn with_policy(mut self, policy: RewardPolicy) -> Self {
        self.calculator = self.calculator.with_policy(policy);
        self
    }

    /// The repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Consume the service, returning its collaborators.
    pub fn into_parts(self) -> (R, N) {
        (self.repository, self.notifier)
    }

    /// Add `xp_amount` to a character, persist, and notify per level gained.
    pub fn award_experience(&mut self, id: Uuid, xp_amount: i64) -> ServiceResult<ExperienceResponse> {
        let mut record = self.repository.load(id)?;
        let result = self.engine.add_experience(&record.progression, xp_amount)?;

        let update = result.update();
        self.repository.save(id, &update)?;
        update.apply_to(&mut record.progression);

        tracing::info!(
            character = %id,
            xp_gained = result.xp_gained,
            xp_total = result.xp_total,
            levels = result.level_ups.len(),
            "awarded experience"
        );

        self.notify_level_ups(&record, &result.level_ups);
        Ok(ExperienceResponse::new(record, result))
    }

    /// Calculate the reward for an action and award it.
    pub fn award_action(
        &mut self,
        id: Uuid,
        action: &ActionRequest,
        jitter: &mut impl Jitter,
    ) -> ServiceResult<ExperienceResponse> {
        // Unknown ids fail before any jitter is drawn.
        self.repository.load(id)?;
        let xp = self.calculator.calculate_reward(
            &action.action_type,
            &action.difficulty,
            action.success,
            jitter,
        );
        let response = self.award_experience(id, i64::from(xp))?;
        Ok(response.with_action(ActionSummary {
            action_type: action.action_type.clone(),
            difficulty: action.difficulty.clone(),
            success: action.success,
            xp_awarded: xp,
        }))
    }

    /// Next-level progress for a character.
    pub fn next_level(&self, id: Uuid) -> ServiceResult<NextLevelInfo> {
        let record = self.repository.load(id)?;
        Ok(self.engine.next_level_info(&record.progression))
    }

    fn notify_level_ups(&mut self, record: &CharacterRecord, level_ups: &[LevelUpRecord]) {
        let Some(user_id) = record.owner else {
            return;
        };
        for level_up in level_ups {
            let notification = Notification {
                user_id,
                character_id: record.id,
                title: level_up_title(&record.name, level_up.level),
                message: level_up_message(&record.name, level_up),
                priority: NotificationPriority::High,
                created_at: Utc::now(),
            };
            if let Err(e) = self.notifier.emit(notification) {
                tracing::warn!(character = %record.id, level = level_up.level, "level-up notification failed: {e}");
            }
        }
    }
}
