use std::path::{Path, PathBuf};

use asc_engine::{CharacterRecord, ProgressionState};
use asc_tables::ProgressionTables;
use uuid::Uuid;

use crate::store::JsonFileStore;

pub fn run(
    tables: &ProgressionTables,
    name: &str,
    class: &str,
    out: Option<&Path>,
    owner: Option<Uuid>,
) -> Result<(), String> {
    let target = out.map_or_else(
        || PathBuf::from(format!("{}.json", name.to_lowercase().replace(' ', "_"))),
        Path::to_path_buf,
    );
    if target.exists() {
        return Err(format!("{} already exists", target.display()));
    }

    let record = CharacterRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        owner: Some(owner.unwrap_or_else(Uuid::new_v4)),
        progression: ProgressionState::starting(class.to_lowercase(), tables),
    };
    JsonFileStore::new(&target).write(&record)?;

    println!(
        "  Created {} '{}' in {}",
        record.progression.character_class,
        name,
        target.display()
    );
    Ok(())
}
