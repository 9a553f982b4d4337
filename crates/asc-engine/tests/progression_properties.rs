//! Property tests for the progression engine.
use asc_engine::{ProgressionEngine, ProgressionState};
use asc_tables::standard_tables;
use proptest::prelude::*;

const CLASSES: [&str; 4] = ["warrior", "wizard", "rogue", "bard"];

fn class_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CLASSES.to_vec())
}

proptest! {
    #[test]
    fn experience_total_is_exact(
        class in class_strategy(),
        awards in prop::collection::vec(1i64..50_000, 1..8),
    ) {
        let engine = ProgressionEngine::new(standard_tables());
        let mut state = ProgressionState::new(class);
        let mut expected = 0u64;
        for xp in awards {
            let result = engine.add_experience(&state, xp).unwrap();
            expected += xp as u64;
            prop_assert_eq!(result.xp_total, expected);
            prop_assert_eq!(result.updated_state.experience, expected);
            state = result.updated_state;
        }
    }

    #[test]
    fn level_never_decreases_and_stays_capped(
        class in class_strategy(),
        awards in prop::collection::vec(1i64..100_000, 1..8),
    ) {
        let tables = standard_tables();
        let engine = ProgressionEngine::new(tables);
        let max = tables.levels().max_level();
        let mut state = ProgressionState::new(class);
        for xp in awards {
            let result = engine.add_experience(&state, xp).unwrap();
            prop_assert!(result.new_level >= result.previous_level);
            prop_assert!(result.new_level <= max);
            prop_assert_eq!(
                result.new_level,
                tables.levels().level_for_experience(result.xp_total).max(result.previous_level)
            );
            state = result.updated_state;
        }
    }

    #[test]
    fn level_up_records_ascend_without_gaps(
        class in class_strategy(),
        xp in 1i64..200_000,
    ) {
        let engine = ProgressionEngine::new(standard_tables());
        let state = ProgressionState::new(class);
        let result = engine.add_experience(&state, xp).unwrap();
        let levels: Vec<u32> = result.level_ups.iter().map(|r| r.level).collect();
        let expected: Vec<u32> = (result.previous_level + 1..=result.new_level).collect();
        prop_assert_eq!(levels, expected);
        prop_assert_eq!(result.leveled_up(), !result.level_ups.is_empty());
    }

    #[test]
    fn stats_never_shrink(
        class in class_strategy(),
        xp in 1i64..200_000,
    ) {
        let engine = ProgressionEngine::new(standard_tables());
        let state = ProgressionState::starting(class, standard_tables());
        let result = engine.add_experience(&state, xp).unwrap();
        for (stat, value) in &state.stats {
            prop_assert!(result.updated_state.stats[stat] >= *value);
        }
        for (category, ability) in state.abilities.iter() {
            prop_assert!(result.updated_state.abilities.contains(category, ability));
        }
    }
}
