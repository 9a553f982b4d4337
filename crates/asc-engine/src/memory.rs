//! In-memory collaborators for tests and embedding.

use std::collections::HashMap;

use uuid::Uuid;

use crate::progression::ProgressionUpdate;
use crate::service::{
    CharacterRecord, CharacterRepository, Notification, NotificationSink, RepositoryError,
};

/// A [`CharacterRepository`] backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    characters: HashMap<Uuid, CharacterRecord>,
}

impl InMemoryRepository {
    /// A repository holding `records`.
    pub fn with(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut repo = Self::default();
        for record in records {
            repo.insert(record);
        }
        repo
    }

    /// Store a character, replacing any with the same id.
    pub fn insert(&mut self, record: CharacterRecord) -> Option<CharacterRecord> {
        self.characters.insert(record.id, record)
    }

    /// Look up a character.
    pub fn get(&self, id: Uuid) -> Option<&CharacterRecord> {
        self.characters.get(&id)
    }

    /// Number of stored characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterRepository for InMemoryRepository {
    fn load(&self, id: Uuid) -> Result<CharacterRecord, RepositoryError> {
        self.characters
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn save(&mut self, id: Uuid, update: &ProgressionUpdate) -> Result<(), RepositoryError> {
        let record = self
            .characters
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        update.apply_to(&mut record.progression);
        Ok(())
    }
}

/// A [`NotificationSink`] that keeps everything it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Notifications in emission order.
    pub notifications: Vec<Notification>,
}

impl NotificationSink for RecordingSink {
    fn emit(&mut self, notification: Notification) -> Result<(), String> {
        self.notifications.push(notification);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProgressionState;

    fn record() -> CharacterRecord {
        CharacterRecord {
            id: Uuid::new_v4(),
            name: "Gimli".to_string(),
            owner: None,
            progression: ProgressionState::new("warrior"),
        }
    }

    #[test]
    fn load_and_save() {
        let character = record();
        let id = character.id;
        let mut repo = InMemoryRepository::with([character]);
        assert_eq!(repo.len(), 1);

        repo.save(id, &ProgressionUpdate::Experience(250)).unwrap();
        let loaded = repo.load(id).unwrap();
        assert_eq!(loaded.progression.experience, 250);
        assert_eq!(loaded.progression.level, 1);
    }

    #[test]
    fn full_update_replaces_progression() {
        let character = record();
        let id = character.id;
        let mut repo = InMemoryRepository::with([character]);

        let mut next = ProgressionState::new("warrior");
        next.level = 4;
        next.experience = 6000;
        repo.save(id, &ProgressionUpdate::Full(next.clone())).unwrap();
        assert_eq!(repo.get(id).unwrap().progression, next);
    }

    #[test]
    fn unknown_ids() {
        let mut repo = InMemoryRepository::default();
        let id = Uuid::new_v4();
        assert!(matches!(repo.load(id), Err(RepositoryError::NotFound(_))));
        assert!(matches!(
            repo.save(id, &ProgressionUpdate::Experience(1)),
            Err(RepositoryError::NotFound(_))
        ));
        assert!(repo.is_empty());
    }
}
