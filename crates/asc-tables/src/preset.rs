//! Built-in table data.
//!
//! [`standard`] produces the same [`ProgressionTables`] that loading the
//! shipped JSON would, without a file on disk. The version string changes
//! whenever any of the data below does.

use std::collections::BTreeMap;

use crate::ability::{AbilityClassificationTable, ClassificationRule};
use crate::bonus::{ClassBonusTable, LevelBonus};
use crate::levels::LevelThresholdTable;
use crate::profile::{StartingProfile, StartingProfiles};
use crate::reward::{DEFAULT_REWARD, XpRewardTable};
use crate::tables::ProgressionTables;
use crate::vocab::AbilityCategory::{self, Active, Passive, Special};
use crate::vocab::Stat::{
    self, Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom,
};

/// Version tag of the built-in data.
pub const STANDARD_VERSION: &str = "standard-1";

/// The complete built-in table set.
///
/// Validity of this data is asserted by the tests below rather than checked
/// on every construction.
pub fn standard() -> ProgressionTables {
    ProgressionTables::from_parts(
        STANDARD_VERSION,
        level_thresholds(),
        class_bonuses(),
        xp_rewards(),
        ability_classification(),
        starting_profiles(),
    )
}

/// Twenty levels; each step costs 1000 XP more than the previous one.
pub fn level_thresholds() -> LevelThresholdTable {
    LevelThresholdTable::from_map(
        (1..=20u32)
            .map(|level| {
                let n = u64::from(level - 1);
                (level, 500 * n * (n + 1))
            })
            .collect(),
    )
}

/// Shorthand for a single table row.
fn bonus(stats: &[(Stat, u32)], ability: &str) -> LevelBonus {
    stats
        .iter()
        .fold(LevelBonus::new(), |b, &(stat, delta)| b.with_stat(stat, delta))
        .with_ability(ability)
}

/// A class's schedule for levels 2 through 10.
type Schedule = [(&'static [(Stat, u32)], &'static str); 9];

const WARRIOR: Schedule = [
    (&[(Strength, 1)], "Improved Combat Techniques"),
    (&[(Constitution, 1)], "Battle Cry"),
    (&[(Strength, 1)], "Second Wind"),
    (&[(Dexterity, 1), (Strength, 1)], "Extra Attack"),
    (&[(Constitution, 1)], "Defensive Stance"),
    (&[(Strength, 1)], "Intimidating Presence"),
    (&[(Strength, 1), (Constitution, 1)], "Improved Critical"),
    (&[(Strength, 1)], "Cleave"),
    (&[(Strength, 2), (Constitution, 1)], "Champion's Might"),
];

const WIZARD: Schedule = [
    (&[(Intelligence, 1)], "Arcane Recovery"),
    (&[(Intelligence, 1)], "Spell School Specialization"),
    (&[(Intelligence, 1)], "Cantrip Mastery"),
    (&[(Intelligence, 1), (Wisdom, 1)], "3rd Level Spells"),
    (&[(Intelligence, 1)], "Arcane Tradition Feature"),
    (&[(Intelligence, 1)], "4th Level Spells"),
    (&[(Intelligence, 2)], "Ability Score Improvement"),
    (&[(Intelligence, 1)], "5th Level Spells"),
    (&[(Intelligence, 1), (Wisdom, 1)], "Arcane Mastery"),
];

const ROGUE: Schedule = [
    (&[(Dexterity, 1)], "Cunning Action"),
    (&[(Dexterity, 1)], "Roguish Archetype"),
    (&[(Dexterity, 1)], "Uncanny Dodge"),
    (&[(Dexterity, 1)], "Evasion"),
    (&[(Dexterity, 1)], "Expertise"),
    (&[(Dexterity, 1)], "Advanced Sneak Attack"),
    (&[(Dexterity, 1), (Charisma, 1)], "Ability Score Improvement"),
    (&[(Dexterity, 1)], "Improved Reflexes"),
    (&[(Dexterity, 2)], "Shadow Master"),
];

const CLERIC: Schedule = [
    (&[(Wisdom, 1)], "Channel Divinity"),
    (&[(Wisdom, 1)], "2nd Level Spells"),
    (&[(Wisdom, 1)], "Divine Domain Feature"),
    (&[(Wisdom, 1), (Charisma, 1)], "3rd Level Spells"),
    (&[(Wisdom, 1)], "Improved Healing"),
    (&[(Wisdom, 1)], "4th Level Spells"),
    (&[(Wisdom, 1), (Constitution, 1)], "Divine Strike"),
    (&[(Wisdom, 1)], "5th Level Spells"),
    (&[(Wisdom, 2)], "Divine Intervention"),
];

const BARD: Schedule = [
    (&[(Charisma, 1)], "Jack of All Trades"),
    (&[(Charisma, 1)], "Bard College"),
    (&[(Charisma, 1)], "Expertise"),
    (&[(Charisma, 1), (Dexterity, 1)], "Font of Inspiration"),
    (&[(Charisma, 1)], "Countercharm"),
    (&[(Charisma, 1)], "Bard College Feature"),
    (&[(Charisma, 1), (Intelligence, 1)], "Ability Score Improvement"),
    (&[(Charisma, 1)], "Song of Rest Improvement"),
    (&[(Charisma, 2)], "Magical Secrets"),
];

const RANGER: Schedule = [
    (&[(Dexterity, 1)], "Fighting Style"),
    (&[(Wisdom, 1)], "Ranger Conclave"),
    (&[(Dexterity, 1)], "Primeval Awareness"),
    (&[(Dexterity, 1), (Wisdom, 1)], "Extra Attack"),
    (&[(Dexterity, 1)], "Greater Favored Enemy"),
    (&[(Wisdom, 1)], "Ranger Conclave Feature"),
    (&[(Dexterity, 1), (Wisdom, 1)], "Land's Stride"),
    (&[(Dexterity, 1)], "Hide in Plain Sight"),
    (&[(Wisdom, 2)], "Nature's Warden"),
];

const PALADIN: Schedule = [
    (&[(Strength, 1)], "Divine Smite"),
    (&[(Charisma, 1)], "Sacred Oath"),
    (&[(Constitution, 1)], "Divine Health"),
    (&[(Strength, 1), (Charisma, 1)], "Extra Attack"),
    (&[(Charisma, 1)], "Aura of Protection"),
    (&[(Strength, 1)], "Sacred Oath Feature"),
    (&[(Charisma, 1), (Wisdom, 1)], "Aura of Courage"),
    (&[(Charisma, 1)], "Divine Sense Improvement"),
    (&[(Charisma, 2)], "Aura of Devotion"),
];

const DRUID: Schedule = [
    (&[(Wisdom, 1)], "Wild Shape"),
    (&[(Wisdom, 1)], "Druid Circle"),
    (&[(Wisdom, 1)], "Wild Shape Improvement"),
    (&[(Wisdom, 1), (Constitution, 1)], "3rd Level Spells"),
    (&[(Wisdom, 1)], "Druid Circle Feature"),
    (&[(Wisdom, 1)], "4th Level Spells"),
    (&[(Wisdom, 1), (Constitution, 1)], "Wild Shape Improvement"),
    (&[(Wisdom, 1)], "5th Level Spells"),
    (&[(Wisdom, 2)], "Nature's Sanctuary"),
];

const MONK: Schedule = [
    (&[(Dexterity, 1)], "Ki"),
    (&[(Wisdom, 1)], "Monastic Tradition"),
    (&[(Dexterity, 1)], "Slow Fall"),
    (&[(Dexterity, 1), (Wisdom, 1)], "Stunning Strike"),
    (&[(Dexterity, 1)], "Ki-Empowered Strikes"),
    (&[(Dexterity, 1)], "Evasion"),
    (&[(Wisdom, 1), (Dexterity, 1)], "Stillness of Mind"),
    (&[(Dexterity, 1)], "Unarmored Movement Improvement"),
    (&[(Constitution, 1), (Wisdom, 1)], "Purity of Body"),
];

const SORCERER: Schedule = [
    (&[(Charisma, 1)], "Font of Magic"),
    (&[(Charisma, 1)], "Metamagic"),
    (&[(Charisma, 1)], "Sorcerous Origin Feature"),
    (&[(Charisma, 1), (Constitution, 1)], "3rd Level Spells"),
    (&[(Charisma, 1)], "Additional Metamagic"),
    (&[(Charisma, 1)], "4th Level Spells"),
    (&[(Charisma, 1), (Constitution, 1)], "Ability Score Improvement"),
    (&[(Charisma, 1)], "5th Level Spells"),
    (&[(Charisma, 2)], "Sorcerous Restoration"),
];

/// Bonuses for levels 2-10 of the ten built-in classes.
pub fn class_bonuses() -> ClassBonusTable {
    let schedules: [(&str, &Schedule); 10] = [
        ("warrior", &WARRIOR),
        ("wizard", &WIZARD),
        ("rogue", &ROGUE),
        ("cleric", &CLERIC),
        ("bard", &BARD),
        ("ranger", &RANGER),
        ("paladin", &PALADIN),
        ("druid", &DRUID),
        ("monk", &MONK),
        ("sorcerer", &SORCERER),
    ];

    let mut table = ClassBonusTable::new();
    for (class, schedule) in schedules {
        for (level, (stats, ability)) in (2u32..).zip(schedule.iter()) {
            table.insert(class, level, bonus(stats, ability));
        }
    }
    table
}

fn difficulty_map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries
        .iter()
        .map(|&(name, xp)| (name.to_string(), xp))
        .collect()
}

/// Base rewards for the six built-in action types, plus the fallback table.
pub fn xp_rewards() -> XpRewardTable {
    let actions = [
        (
            "combat",
            difficulty_map(&[("easy", 100), ("medium", 200), ("hard", 400), ("boss", 1000)]),
        ),
        (
            "quest",
            difficulty_map(&[
                ("minor", 300),
                ("standard", 600),
                ("major", 1200),
                ("epic", 2500),
            ]),
        ),
        (
            "puzzle",
            difficulty_map(&[("easy", 150), ("medium", 300), ("hard", 600)]),
        ),
        (
            "exploration",
            difficulty_map(&[("location", 100), ("secret", 200), ("landmark", 300)]),
        ),
        (
            "roleplay",
            difficulty_map(&[("minor", 50), ("significant", 150), ("major", 300)]),
        ),
        (
            "crafting",
            difficulty_map(&[("basic", 50), ("advanced", 150), ("masterwork", 300)]),
        ),
    ];

    XpRewardTable {
        actions: actions
            .into_iter()
            .map(|(action, d)| (action.to_string(), d))
            .collect(),
        fallback: difficulty_map(&[
            ("easy", 50),
            ("medium", 100),
            ("hard", 200),
            ("minor", 50),
            ("standard", 100),
            ("major", 200),
            ("epic", 500),
            ("boss", 500),
            ("location", 50),
            ("secret", 100),
            ("landmark", 150),
            ("significant", 100),
            ("basic", 50),
            ("advanced", 100),
            ("masterwork", 200),
        ]),
        default_reward: DEFAULT_REWARD,
    }
}

/// Classification rules in priority order.
///
/// Named abilities come first, then generic fragments. Reordering the
/// fragments changes results for ids that contain more than one of them.
pub const CLASSIFICATION_RULES: [(&str, AbilityCategory); 32] = [
    // warrior
    ("improved_combat_techniques", Passive),
    ("battle_cry", Active),
    ("second_wind", Active),
    ("extra_attack", Passive),
    ("defensive_stance", Active),
    ("intimidating_presence", Passive),
    ("improved_critical", Passive),
    ("cleave", Active),
    ("champion_s_might", Special),
    // wizard
    ("arcane_recovery", Passive),
    ("spell_school_specialization", Passive),
    ("cantrip_mastery", Passive),
    ("3rd_level_spells", Active),
    ("arcane_tradition_feature", Passive),
    ("4th_level_spells", Active),
    ("5th_level_spells", Active),
    ("arcane_mastery", Special),
    // generic fragments
    ("improved", Passive),
    ("mastery", Passive),
    ("specialization", Passive),
    ("recovery", Passive),
    ("stance", Active),
    ("strike", Active),
    ("attack", Active),
    ("cry", Active),
    ("spells", Active),
    ("shield", Active),
    ("might", Special),
    ("master", Special),
    ("focus", Special),
    ("rage", Special),
    ("intervention", Special),
];

/// The built-in classification table.
pub fn ability_classification() -> AbilityClassificationTable {
    AbilityClassificationTable::from_rules(
        CLASSIFICATION_RULES
            .iter()
            .map(|&(pattern, category)| ClassificationRule {
                pattern: pattern.to_string(),
                category,
            })
            .collect(),
    )
}

fn class(
    mods: &[(Stat, i32)],
    passive: &[&str],
    active: &[&str],
    special: &[&str],
) -> StartingProfile {
    mods.iter()
        .fold(StartingProfile::new(), |p, &(stat, m)| p.with_modifier(stat, m))
        .with_abilities(Passive, passive)
        .with_abilities(Active, active)
        .with_abilities(Special, special)
}

/// Starting stats and abilities for the ten built-in classes.
pub fn starting_profiles() -> StartingProfiles {

    let classes = [
        (
            "warrior",
            class(
                &[(Strength, 5), (Constitution, 3), (Dexterity, 2)],
                &["Toughness", "Intimidate"],
                &["Power Strike", "Shield Block", "Charge"],
                &["Berserker Rage"],
            ),
        ),
        (
            "wizard",
            class(
                &[(Intelligence, 5), (Wisdom, 3), (Constitution, -1)],
                &["Arcane Knowledge", "Spell Focus"],
                &["Fireball", "Magic Missile", "Arcane Shield"],
                &["Teleport", "Time Manipulation"],
            ),
        ),
        (
            "rogue",
            class(
                &[(Dexterity, 5), (Charisma, 2), (Intelligence, 2)],
                &["Stealth", "Trap Detection"],
                &["Backstab", "Pickpocket", "Evasion"],
                &["Shadow Strike"],
            ),
        ),
        (
            "cleric",
            class(
                &[(Wisdom, 5), (Charisma, 2), (Constitution, 2)],
                &["Divine Favor", "Healing Aura"],
                &["Heal", "Smite", "Bless"],
                &["Divine Intervention"],
            ),
        ),
        (
            "bard",
            class(
                &[(Charisma, 5), (Dexterity, 2), (Intelligence, 2)],
                &["Charismatic Aura", "Lore Knowledge"],
                &["Inspire", "Soothing Song", "Distraction"],
                &["Epic Performance"],
            ),
        ),
        (
            "ranger",
            class(
                &[(Dexterity, 4), (Wisdom, 3), (Strength, 2)],
                &["Track", "Animal Empathy"],
                &["Precise Shot", "Animal Companion", "Nature's Eye"],
                &["One With Nature"],
            ),
        ),
        (
            "paladin",
            class(
                &[(Strength, 3), (Charisma, 3), (Constitution, 3)],
                &["Divine Sense", "Aura of Protection"],
                &["Lay on Hands", "Divine Smite", "Sacred Oath"],
                &["Holy Avenger"],
            ),
        ),
        (
            "druid",
            class(
                &[(Wisdom, 4), (Constitution, 3), (Intelligence, 2)],
                &["Nature Bond", "Wild Empathy"],
                &["Wild Shape", "Entangle", "Speak with Animals"],
                &["Nature's Wrath"],
            ),
        ),
        (
            "monk",
            class(
                &[(Dexterity, 4), (Wisdom, 3), (Strength, 2)],
                &["Meditation", "Unarmored Defense"],
                &["Flurry of Blows", "Stunning Strike", "Deflect Missiles"],
                &["Ki Focus"],
            ),
        ),
        (
            "sorcerer",
            class(
                &[(Charisma, 5), (Constitution, 2), (Intelligence, 2)],
                &["Magical Heritage", "Elemental Affinity"],
                &["Wild Magic", "Metamagic", "Arcane Blast"],
                &["Sorcerous Origin"],
            ),
        ),
    ];

    StartingProfiles {
        basics: StartingProfile::new()
            .with_abilities(Passive, &["Rest", "Observe"])
            .with_abilities(Active, &["Attack"]),
        classes: classes
            .into_iter()
            .map(|(name, profile)| (name.to_string(), profile))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::TableError;

    #[test]
    fn standard_validates() {
        let tables = standard();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.version(), STANDARD_VERSION);
    }

    #[test]
    fn thresholds_match_published_curve() {
        let t = level_thresholds();
        assert!(t.validate().is_ok());
        assert_eq!(t.threshold(1), Some(0));
        assert_eq!(t.threshold(2), Some(1000));
        assert_eq!(t.threshold(3), Some(3000));
        assert_eq!(t.threshold(10), Some(45000));
        assert_eq!(t.threshold(20), Some(190000));
        assert_eq!(t.max_level(), 20);
    }

    #[test]
    fn every_class_has_levels_two_through_ten() {
        let table = class_bonuses();
        assert_eq!(table.classes().count(), 10);
        for class in table.classes() {
            let levels: Vec<u32> = table.levels_for(class).unwrap().keys().copied().collect();
            assert_eq!(levels, (2..=10).collect::<Vec<_>>(), "{class}");
        }
    }

    #[test]
    fn warrior_level_two() {
        let table = class_bonuses();
        let bonus = table.bonus("warrior", 2).unwrap();
        assert_eq!(bonus.stats.get(&Strength), Some(&1));
        assert_eq!(bonus.abilities, vec!["Improved Combat Techniques".to_string()]);
    }

    #[test]
    fn reward_matrix() {
        let rewards = xp_rewards();
        assert_eq!(rewards.base_reward("combat", "boss"), 1000);
        assert_eq!(rewards.base_reward("quest", "major"), 1200);
        assert_eq!(rewards.base_reward("unknown_type", "masterwork"), 200);
        assert!(rewards.validate().is_ok());
    }

    #[test]
    fn classification_rules_are_valid_and_unique() {
        let table = ability_classification();
        assert!(table.validate().is_ok());
        assert_eq!(table.len(), 32);
        let mut patterns: Vec<_> = table.rules().iter().map(|r| &r.pattern).collect();
        patterns.sort();
        patterns.dedup();
        assert_eq!(patterns.len(), 32);
    }

    #[test]
    fn starting_profiles_cover_classes() {
        let profiles = starting_profiles();
        assert_eq!(profiles.classes.len(), 10);
        let warrior = profiles.for_class("warrior").unwrap();
        assert_eq!(warrior.stat_modifiers[&Strength], 5);
        assert_eq!(warrior.abilities[&Special], vec!["Berserker Rage".to_string()]);
        assert_eq!(profiles.basics.abilities[&Passive].len(), 2);
    }

    #[test]
    fn table_error_is_displayable() {
        let err = TableError::EmptyLevels;
        assert_eq!(err.to_string(), "level table is empty");
    }
}
