//! CLI command integration tests.
//! Fixtures are written into a temp directory per test.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LAYOUT: &str = r#"{
    "primary": { "SW": "mother" },
    "secondary": { "NW": "father" },
    "tertiary": { "SW": "toilet" }
}"#;

fn terra_cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("terra").unwrap()
}

fn write_layout(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("layout.json");
    std::fs::write(&path, LAYOUT).unwrap();
    path
}

#[test]
fn check_embedded_dataset() {
    terra_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("64 records from embedded dataset"));
}

#[test]
fn check_rejects_short_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.json");
    std::fs::write(
        &path,
        r#"[{ "number": 1, "name": "a", "summary": "", "homeImpact": "", "usage": "", "energy": "" }]"#,
    )
    .unwrap();

    terra_cmd()
        .args(["check", "--dataset"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset check failed"));
}

#[test]
fn basic_reading_prints_export_text() {
    terra_cmd()
        .args(["read", "--direction", "N", "--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("63 | After Completion"))
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn invalid_direction_fails() {
    terra_cmd()
        .args(["read", "--direction", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading failed"));
}

#[test]
fn invalid_direction_json_shape() {
    terra_cmd()
        .args(["read", "--direction", "center", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""error": "InvalidDirection""#));
}

#[test]
fn full_reading_with_layout() {
    let dir = TempDir::new().unwrap();
    let layout = write_layout(&dir);

    terra_cmd()
        .args([
            "read",
            "--direction",
            "southwest",
            "--intention",
            "purpose",
            "--mode",
            "full",
            "--role",
            "you",
        ])
        .arg("--assignments")
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::contains("11 | Peace"))
        .stdout(predicate::str::contains("Top influence: Mother (0.75)"))
        .stdout(predicate::str::contains("Flagged: SW Toilet / bathroom"))
        .stdout(predicate::str::contains("Mother / caregiver energy back to you"));
}

#[test]
fn full_reading_requires_intention() {
    terra_cmd()
        .args(["read", "--direction", "N", "--seed", "4", "--mode", "full"])
        .assert()
        .failure();
}

#[test]
fn strategy_override() {
    terra_cmd()
        .args(["read", "--direction", "S", "--strategy", "direct", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""number": 30"#))
        .stdout(predicate::str::contains(r#""strategy": "direct""#));
}

#[test]
fn score_ranks_layout() {
    let dir = TempDir::new().unwrap();
    let layout = write_layout(&dir);

    terra_cmd()
        .arg("score")
        .arg("--assignments")
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::contains("mother       0.75"))
        .stdout(predicate::str::contains("father       0.25"))
        .stdout(predicate::str::contains("flagged: SW Toilet / bathroom"));
}

#[test]
fn config_file_changes_basic_strategy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terra.toml");
    std::fs::write(&config, "[selection]\nbasic = \"seeded_offset\"\n").unwrap();

    terra_cmd()
        .args(["read", "--direction", "N", "--seed", "64", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | The Creative"));
}

#[test]
fn bad_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terra.toml");
    std::fs::write(&config, "[weights]\nprimary = -1.0\n").unwrap();

    terra_cmd()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
