use asc_tables::ProgressionTables;
use comfy_table::{ContentArrangement, Table};

pub fn run(tables: &ProgressionTables, class: Option<&str>) -> Result<(), String> {
    let schedule = match class {
        Some(class) => Some(
            tables
                .class_bonuses()
                .levels_for(class)
                .ok_or_else(|| format!("no bonus schedule for class '{class}'"))?,
        ),
        None => None,
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if schedule.is_some() {
        table.set_header(vec!["Level", "XP", "Stats", "Abilities"]);
    } else {
        table.set_header(vec!["Level", "XP"]);
    }

    for (level, threshold) in tables.levels().iter() {
        let mut row = vec![level.to_string(), threshold.to_string()];
        if let Some(schedule) = schedule {
            let bonus = schedule.get(&level);
            let stats = bonus
                .map(|b| {
                    b.stats
                        .iter()
                        .map(|(stat, delta)| format!("{} +{delta}", stat.label()))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            let abilities = bonus.map(|b| b.abilities.join(", ")).unwrap_or_default();
            row.push(stats);
            row.push(abilities);
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} levels (tables {})", tables.levels().len(), tables.version());
    Ok(())
}
