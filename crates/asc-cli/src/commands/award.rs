use std::path::Path;

use asc_engine::ProgressionService;
use asc_tables::ProgressionTables;

use super::{ConsoleSink, print_response, service_error};
use crate::store::JsonFileStore;

pub fn run(tables: &ProgressionTables, file: &Path, xp: i64, json: bool) -> Result<(), String> {
    let store = JsonFileStore::new(file);
    let id = store.read()?.id;

    let mut service = ProgressionService::new(tables, store, ConsoleSink { quiet: json });
    let response = service.award_experience(id, xp).map_err(service_error)?;
    print_response(&response, json)
}
