//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ascend() -> Command {
    Command::cargo_bin("ascend").unwrap()
}

/// Create a warrior named Aragorn in a temp directory.
fn test_character() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("aragorn.json");
    ascend()
        .args(["new", "Aragorn", "--class", "warrior", "--out"])
        .arg(&file)
        .assert()
        .success();
    (dir, file)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_writes_starting_character() {
    let dir = TempDir::new().unwrap();
    ascend()
        .args(["new", "Elrond", "--class", "Wizard"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wizard 'Elrond'"));

    let json = read_json(&dir.path().join("elrond.json"));
    assert_eq!(json["name"], "Elrond");
    assert_eq!(json["level"], 1);
    assert_eq!(json["experience"], 0);
    assert_eq!(json["character_class"], "wizard");
    assert!(json["owner"].is_string());
}

#[test]
fn new_refuses_to_overwrite() {
    let (_dir, file) = test_character();
    ascend()
        .args(["new", "Aragorn", "--out"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// reward
// ---------------------------------------------------------------------------

#[test]
fn reward_is_reproducible_with_seed() {
    let first = ascend()
        .args(["reward", "quest", "--difficulty", "major", "--seed", "7"])
        .output()
        .unwrap();
    let second = ascend()
        .args(["reward", "quest", "--difficulty", "major", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("quest (major, success)"));
}

#[test]
fn reward_reports_failure() {
    ascend()
        .args(["reward", "combat", "--failed", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("combat (medium, failure)"));
}

// ---------------------------------------------------------------------------
// award
// ---------------------------------------------------------------------------

#[test]
fn award_levels_up_and_persists() {
    let (_dir, file) = test_character();
    ascend()
        .arg("award")
        .arg(&file)
        .arg("1050")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level Up! Aragorn is now level 2")
                .and(predicate::str::contains("Strength: 15 → 16 (+1)"))
                .and(predicate::str::contains("Improved Combat Techniques"))
                .and(predicate::str::contains("gained 1050 XP")),
        );

    let json = read_json(&file);
    assert_eq!(json["level"], 2);
    assert_eq!(json["experience"], 1050);
    assert_eq!(json["stats"]["strength"], 16);
}

#[test]
fn award_json_output() {
    let (_dir, file) = test_character();
    let output = ascend()
        .arg("award")
        .arg(&file)
        .args(["3500", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["xp_gained"], 3500);
    assert_eq!(json["previous_level"], 1);
    assert_eq!(json["new_level"], 3);
    assert_eq!(json["level_ups"].as_array().unwrap().len(), 2);
    assert_eq!(json["character"]["level"], 3);
}

#[test]
fn award_without_level_up_has_null_level_ups() {
    let (_dir, file) = test_character();
    let output = ascend()
        .arg("award")
        .arg(&file)
        .args(["10", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["level_ups"].is_null());
    assert_eq!(read_json(&file)["experience"], 10);
}

#[test]
fn award_rejects_non_positive_amounts() {
    let (_dir, file) = test_character();
    ascend()
        .arg("award")
        .arg(&file)
        .arg("-5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("-5"));
    ascend()
        .arg("award")
        .arg(&file)
        .arg("0")
        .assert()
        .failure();
    assert_eq!(read_json(&file)["experience"], 0);
}

#[test]
fn award_missing_file() {
    let dir = TempDir::new().unwrap();
    ascend()
        .arg("award")
        .arg(dir.path().join("nobody.json"))
        .arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// act
// ---------------------------------------------------------------------------

#[test]
fn act_awards_calculated_reward() {
    let (_dir, file) = test_character();
    let output = ascend()
        .arg("act")
        .arg(&file)
        .args(["quest", "--difficulty", "epic", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"]["type"], "quest");
    assert_eq!(json["action"]["difficulty"], "epic");
    assert_eq!(json["action"]["xp_awarded"], json["xp_gained"]);
    assert_eq!(read_json(&file)["experience"], json["xp_total"]);
}

// ---------------------------------------------------------------------------
// next-level
// ---------------------------------------------------------------------------

#[test]
fn next_level_shows_progress() {
    let (_dir, file) = test_character();
    ascend().arg("award").arg(&file).arg("500").assert().success();
    ascend()
        .arg("next-level")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level 2 at 1000 XP: 500 XP to go (50.0%)")
                .and(predicate::str::contains("Improved Combat Techniques")),
        );
}

// ---------------------------------------------------------------------------
// levels
// ---------------------------------------------------------------------------

#[test]
fn levels_lists_thresholds() {
    ascend()
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("190000").and(predicate::str::contains("20 levels")));
}

#[test]
fn levels_with_class_schedule() {
    ascend()
        .args(["levels", "--class", "Rogue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cunning Action"));
}

#[test]
fn levels_unknown_class() {
    ascend()
        .args(["levels", "--class", "necromancer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("necromancer"));
}

// ---------------------------------------------------------------------------
// --tables
// ---------------------------------------------------------------------------

#[test]
fn custom_tables_are_loaded() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("tables.json");
    fs::write(
        &tables,
        r#"{
    "version": "tiny-1",
    "levels": { "1": 0, "2": 100 },
    "rewards": {
        "actions": { "combat": { "medium": 50 } },
        "fallback": { "medium": 20 },
        "default_reward": 100
    },
    "abilities": [ { "pattern": "strike", "category": "active" } ]
}"#,
    )
    .unwrap();

    ascend()
        .arg("--tables")
        .arg(&tables)
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny-1").and(predicate::str::contains("2 levels")));
}

#[test]
fn invalid_tables_fail_fast() {
    let dir = TempDir::new().unwrap();
    let tables = dir.path().join("tables.json");
    fs::write(
        &tables,
        r#"{
    "version": "broken",
    "levels": { "1": 0, "2": 500, "3": 400 },
    "rewards": { "actions": {}, "fallback": {}, "default_reward": 100 },
    "abilities": [ { "pattern": "strike", "category": "active" } ]
}"#,
    )
    .unwrap();

    ascend()
        .arg("--tables")
        .arg(&tables)
        .arg("levels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must exceed"));
}
