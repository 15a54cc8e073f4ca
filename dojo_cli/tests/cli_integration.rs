//! End-to-end tests running the `dojo_cli` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

const ENTRIES: &str = r#"[
    {"id": "1", "name": "Ana", "age": 10, "weight": 30, "belt": "Yellow", "gender": "Male", "club": "Tigers"},
    {"id": "2", "name": "Bo", "age": 11, "weight": 31, "belt": "Yellow", "gender": "Male", "club": "Cranes"},
    {"id": "3", "name": "Cy", "age": 25, "weight": 70, "belt": "Black", "gender": "Female", "club": "Tigers"},
    {"id": "4", "name": "Di", "age": 25, "weight": 71, "belt": "Black", "gender": "Female", "club": "Owls"}
]"#;

/// Write the fixture to a per-test file in the system temp directory.
fn entries_file(test_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "dojo_cli_{}_{}.json",
        std::process::id(),
        test_name
    ));
    std::fs::write(&path, ENTRIES).unwrap();
    path
}

fn dojo_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dojo_cli"))
        .args(args)
        .env_remove("ENTRIES_FILE")
        .env_remove("MATCH_START_TIME")
        .env_remove("BAND_SPAN")
        .env_remove("IDLE_SECONDS_BETWEEN_MATCHES")
        .env_remove("DETERMINISTIC_IDS")
        .env_remove("SLOT_POLICY")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    let output = dojo_cli(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--entries"));
}

#[test]
fn test_missing_entries_fails() {
    let output = dojo_cli(&[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ENTRIES_FILE"));
}

#[test]
fn test_prints_plan() {
    let path = entries_file("prints_plan");
    let output = dojo_cli(&["--entries", path.to_str().unwrap(), "--start", "10:00"]);
    let plan = stdout_json(&output);

    let divisions = plan["divisions"].as_array().unwrap();
    assert_eq!(divisions.len(), 2);
    assert_eq!(divisions[0]["belt"], "Yellow");

    let first_id = divisions[0]["id"].as_str().unwrap();
    let first = &plan["matchesByDivisionId"][first_id][0];
    assert_eq!(first["name"], "01");
    assert_eq!(first["startTime"], "10:08 AM");
}

#[test]
fn test_deterministic_ids_are_stable() {
    let path = entries_file("deterministic_ids");
    let args = ["--entries", path.to_str().unwrap(), "--deterministic-ids"];

    let first = dojo_cli(&args);
    let second = dojo_cli(&args);
    assert_eq!(stdout_json(&first), stdout_json(&second));
}

#[test]
fn test_club_filter() {
    let path = entries_file("club_filter");
    let output = dojo_cli(&["--entries", path.to_str().unwrap(), "--club", "owls"]);
    let plan = stdout_json(&output);

    let divisions = plan["divisions"].as_array().unwrap();
    assert_eq!(divisions.len(), 1);
    assert_eq!(divisions[0]["belt"], "Black");
}

#[test]
fn test_invalid_start_time_fails() {
    let path = entries_file("invalid_start");
    let output = dojo_cli(&["--entries", path.to_str().unwrap(), "--start", "noon"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("MATCH_START_TIME"));
}

#[test]
fn test_unknown_argument_fails() {
    let output = dojo_cli(&["--entries", "x.json", "--bracket-size", "8"]);
    assert!(!output.status.success());
}
