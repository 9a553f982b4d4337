//! A character repository backed by a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use asc_engine::{CharacterRecord, CharacterRepository, ProgressionUpdate, RepositoryError};
use uuid::Uuid;

/// Holds one character, read from and written back to `path`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the stored character.
    pub fn read(&self) -> Result<CharacterRecord, String> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| format!("cannot read {}: {e}", self.path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("invalid character file {}: {e}", self.path.display()))
    }

    /// Overwrite the file with `record`.
    pub fn write(&self, record: &CharacterRecord) -> Result<(), String> {
        let mut text = serde_json::to_string_pretty(record)
            .map_err(|e| format!("cannot serialize character: {e}"))?;
        text.push('\n');
        fs::write(&self.path, text).map_err(|e| format!("cannot write {}: {e}", self.path.display()))
    }
}

impl CharacterRepository for JsonFileStore {
    fn load(&self, id: Uuid) -> Result<CharacterRecord, RepositoryError> {
        let record = self.read().map_err(RepositoryError::Backend)?;
        if record.id == id {
            Ok(record)
        } else {
            Err(RepositoryError::NotFound(id))
        }
    }

    fn save(&mut self, id: Uuid, update: &ProgressionUpdate) -> Result<(), RepositoryError> {
        let mut record = self.load(id)?;
        update.apply_to(&mut record.progression);
        self.write(&record).map_err(RepositoryError::Backend)
    }
}
