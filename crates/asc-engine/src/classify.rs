//! Ability classification and display names.

use asc_tables::{AbilityCategory, AbilityClassificationTable};

/// Category used when no rule matches.
pub const DEFAULT_CATEGORY: AbilityCategory = AbilityCategory::Active;

/// Lowercase an ability id and replace spaces with underscores.
pub fn normalize_ability_id(ability_id: &str) -> String {
    ability_id.to_lowercase().replace(' ', "_")
}

/// Classify an ability as passive, active, or special.
///
/// An exact match on the normalized id wins. Otherwise the first rule, in
/// table order, whose pattern occurs inside the id decides. Anything else is
/// [`DEFAULT_CATEGORY`].
pub fn classify(
    ability_id: &str,
    character_class: &str,
    table: &AbilityClassificationTable,
) -> AbilityCategory {
    let id = normalize_ability_id(ability_id);
    let rules = table.rules();

    let category = rules
        .iter()
        .find(|rule| rule.pattern == id)
        .or_else(|| rules.iter().find(|rule| id.contains(rule.pattern.as_str())))
        .map_or(DEFAULT_CATEGORY, |rule| rule.category);

    tracing::trace!(ability = %id, class = character_class, %category, "classified ability");
    category
}

/// Human-readable ability name: underscores become spaces and each word is
/// capitalized (`"power_strike"` becomes `"Power Strike"`).
pub fn display_name(ability_id: &str) -> String {
    ability_id
        .replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
