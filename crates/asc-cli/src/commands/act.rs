use std::path::Path;

use asc_engine::{ActionRequest, ProgressionService};
use asc_tables::ProgressionTables;

use super::{ConsoleSink, jitter, print_response, service_error};
use crate::store::JsonFileStore;

pub fn run(
    tables: &ProgressionTables,
    file: &Path,
    action: &str,
    difficulty: &str,
    success: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let store = JsonFileStore::new(file);
    let id = store.read()?.id;
    let request = ActionRequest::new(action)
        .with_difficulty(difficulty)
        .with_success(success);

    let mut service = ProgressionService::new(tables, store, ConsoleSink { quiet: json });
    let response = service
        .award_action(id, &request, &mut jitter(seed))
        .map_err(service_error)?;
    print_response(&response, json)
}
