//! User-facing level-up text.

use crate::progression::LevelUpRecord;

/// Notification title for reaching `level`.
pub fn level_up_title(character_name: &str, level: u32) -> String {
    format!("Level Up! {character_name} is now level {level}")
}

/// Generic description of a granted ability.
pub fn ability_description(display_name: &str, character_class: &str) -> String {
    format!("A powerful {character_class} ability that allows you to use {display_name}.")
}

/// Notification body listing a level's stat improvements and new abilities.
pub fn level_up_message(character_name: &str, record: &LevelUpRecord) -> String {
    let mut message = format!("{character_name} has reached level {}!\n\n", record.level);

    if !record.stat_changes.is_empty() {
        message.push_str("Stat improvements:\n");
        for (stat, change) in &record.stat_changes {
            message.push_str(&format!(
                "• {}: {} → {} (+{})\n",
                stat.label(),
                change.old,
                change.new,
                change.delta
            ));
        }
        message.push('\n');
    }

    if !record.ability_changes.is_empty() {
        message.push_str("New abilities:\n");
        for ability in &record.ability_changes {
            message.push_str(&format!(
                "• {} ({}): {}\n",
                ability.display_name,
                ability.category.label(),
                ability_description(&ability.display_name, &record.character_class)
            ));
        }
    }

    message
}
