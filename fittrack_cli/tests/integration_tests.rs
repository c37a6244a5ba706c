//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior including:
//! - The built-in reference report
//! - Batch files and error policies
//! - Single-package calculation
//! - Config file and flag overrides

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SWIMMING_LINE: &str = "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                             Avg speed: 1.000 km/h; Calories burned: 336.000.";
const RUNNING_LINE: &str = "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                            Avg speed: 9.750 km/h; Calories burned: 699.750.";
const WALKING_LINE: &str = "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                            Avg speed: 5.850 km/h; Calories burned: 157.500.";

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
///
/// Points the config lookup at an empty directory so a developer's own
/// config file can't change the output.
fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fittrack"));
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout summaries from fitness tracker sensor data",
        ));
}

#[test]
fn test_default_report_matches_reference() {
    let home = setup_test_dir();
    let expected = format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE);

    cli(&home).assert().success().stdout(expected.clone());
    cli(&home).arg("report").assert().success().stdout(expected);
}

#[test]
fn test_russian_labels() {
    let home = setup_test_dir();
    cli(&home)
        .args(["--lang", "ru", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
        ));
}

#[test]
fn test_json_format() {
    let home = setup_test_dir();
    let output = cli(&home)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let types: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["training_type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, vec!["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn test_calc_single_package() {
    let home = setup_test_dir();
    cli(&home)
        .args(["calc", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_calc_unknown_code_fails() {
    let home = setup_test_dir();
    cli(&home)
        .args(["calc", "XYZ", "1", "1", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("XYZ"));
}

#[test]
fn test_calc_wrong_arity_fails() {
    let home = setup_test_dir();
    cli(&home)
        .args(["calc", "WLK", "9000", "1", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidParameters"));
}

#[test]
fn test_calc_negative_duration_fails() {
    let home = setup_test_dir();
    cli(&home)
        .args(["calc", "RUN", "15000", "-1", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn test_batch_file_skips_bad_packages() {
    let home = setup_test_dir();
    let input = home.path().join("batch.toml");
    fs::write(
        &input,
        r#"
[[package]]
workout_type = "RUN"
data = [15000, 1, 75]

[[package]]
workout_type = "XYZ"
data = [1, 2, 3]

[[package]]
workout_type = "SWM"
data = [720, 1, 80, 25, 40]
"#,
    )
    .unwrap();

    cli(&home)
        .arg("report")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", RUNNING_LINE, SWIMMING_LINE))
        .stderr(
            predicate::str::contains("Skipping package #2 (XYZ)")
                .and(predicate::str::contains("package #1").not())
                .and(predicate::function(|err: &str| {
                    err.matches("(XYZ)").count() == 1
                })),
        );
}

#[test]
fn test_batch_file_fail_fast() {
    let home = setup_test_dir();
    let input = home.path().join("batch.json");
    fs::write(
        &input,
        r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 0, 75, 180]},
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
        ]"#,
    )
    .unwrap();

    cli(&home)
        .arg("report")
        .arg("--input")
        .arg(&input)
        .arg("--fail-fast")
        .assert()
        .failure()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_missing_batch_file_fails() {
    let home = setup_test_dir();
    cli(&home)
        .arg("report")
        .arg("--input")
        .arg(home.path().join("missing.toml"))
        .assert()
        .failure();
}

#[test]
fn test_config_file_sets_language() {
    let home = setup_test_dir();
    let config_path = home.path().join("custom.toml");
    fs::write(&config_path, "[report]\nlanguage = \"ru\"\n").unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("calc")
        .args(["SWM", "720", "1", "80", "25", "40"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Тип тренировки: Swimming;"));
}

#[test]
fn test_flag_overrides_config() {
    let home = setup_test_dir();
    let config_dir = home.path().join("fittrack");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[report]\nlanguage = \"ru\"\n").unwrap();

    cli(&home)
        .args(["--lang", "en", "calc", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_codes_lists_registry() {
    let home = setup_test_dir();
    cli(&home)
        .arg("codes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("RUN")
                .and(predicate::str::contains("SWM"))
                .and(predicate::str::contains("length_pool, count_pool"))
                .and(predicate::str::contains("WLK")),
        );
}
