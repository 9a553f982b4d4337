use std::path::Path;

use asc_engine::{ProgressionEngine, display_name};
use asc_tables::ProgressionTables;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::store::JsonFileStore;

pub fn run(tables: &ProgressionTables, file: &Path) -> Result<(), String> {
    let record = JsonFileStore::new(file).read()?;
    let info = ProgressionEngine::new(tables).next_level_info(&record.progression);

    println!(
        "  {} ({}), level {}, {} XP",
        record.name.bold(),
        record.progression.character_class,
        info.current_level,
        info.current_xp
    );

    let (Some(next_level), Some(threshold)) = (info.next_level, info.xp_for_next_level) else {
        println!("  Maximum level reached.");
        return Ok(());
    };
    println!(
        "  Level {next_level} at {threshold} XP: {} XP to go ({:.1}%)",
        info.xp_needed, info.progress_percent
    );

    let Some(bonus) = info.next_bonus.filter(|b| !b.is_empty()) else {
        return Ok(());
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Gain", "Amount"]);
    for (stat, delta) in &bonus.stats {
        table.add_row(vec![stat.label().to_string(), format!("+{delta}")]);
    }
    for ability in &bonus.abilities {
        table.add_row(vec![display_name(ability), "new ability".to_string()]);
    }
    println!("{table}");
    Ok(())
}
