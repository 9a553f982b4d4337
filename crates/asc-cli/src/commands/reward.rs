use asc_engine::ExperienceCalculator;
use asc_tables::ProgressionTables;

pub fn run(
    tables: &ProgressionTables,
    action: &str,
    difficulty: &str,
    success: bool,
    seed: Option<u64>,
) -> Result<(), String> {
    if !tables.rewards().is_known_action(action) {
        tracing::warn!(action, "unknown action type, using fallback rewards");
    }
    let calculator = ExperienceCalculator::new(tables);
    let xp = calculator.calculate_reward(action, difficulty, success, &mut super::jitter(seed));
    let outcome = if success { "success" } else { "failure" };
    println!("  {action} ({difficulty}, {outcome}): {xp} XP");
    Ok(())
}
