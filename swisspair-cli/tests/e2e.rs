//! End-to-end tests that spawn the actual swisspair binary.
//!
//! Each test gets its own state file and config path in a temp directory,
//! so nothing touches the user's home directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(base_dir: &Path, args: &[&str]) -> Output {
    let state = base_dir.join("tournament.json");
    let config = base_dir.join("config.toml");
    Command::new(env!("CARGO_BIN_EXE_swisspair"))
        .args(args)
        .arg("--state")
        .arg(&state)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run swisspair binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn register_all(dir: &Path, names: &[&str]) {
    for name in names {
        let out = run(dir, &["register", "--name", name]);
        assert!(out.status.success(), "register failed: {}", stderr(&out));
    }
}

#[test]
fn test_register_prints_serial_ids() {
    let dir = tempdir().unwrap();
    let first = run(dir.path(), &["register", "--name", "Chandra Nalaar"]);
    let second = run(dir.path(), &["register", "--name", "Jace Beleren"]);
    assert_eq!(stdout(&first).trim(), "1");
    assert_eq!(stdout(&second).trim(), "2");

    let count = run(dir.path(), &["count"]);
    assert_eq!(stdout(&count).trim(), "2");
}

#[test]
fn test_rematch_avoided_in_second_round() {
    let dir = tempdir().unwrap();
    register_all(dir.path(), &["A", "B", "C", "D"]);

    let out = run(dir.path(), &["pair", "--json"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["pairs"][0]["id1"], 1);
    assert_eq!(json["pairs"][0]["id2"], 2);

    for (w, l) in [("1", "2"), ("3", "4")] {
        let out = run(dir.path(), &["report", "--winner", w, "--loser", l]);
        assert!(out.status.success(), "{}", stderr(&out));
    }

    // Standings: 1, 3 (winners), 2, 4. Naive pairs are fresh: (1,3), (2,4).
    let out = run(dir.path(), &["pair", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["pairs"][0]["id1"], 1);
    assert_eq!(json["pairs"][0]["id2"], 3);
    assert_eq!(json["pairs"][1]["id1"], 2);
    assert_eq!(json["pairs"][1]["id2"], 4);
    assert_eq!(json["repair_attempts"], 0);
}

#[test]
fn test_odd_field_fails_to_pair() {
    let dir = tempdir().unwrap();
    register_all(dir.path(), &["A", "B", "C"]);

    let out = run(dir.path(), &["pair"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("even number of players"));
}

#[test]
fn test_exhausted_budget_is_reported() {
    let dir = tempdir().unwrap();
    register_all(dir.path(), &["A", "B"]);
    run(dir.path(), &["report", "--winner", "1", "--loser", "2"]);

    let out = run(dir.path(), &["pair", "--max-attempts", "5"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("after 6 repair attempts"));
}

#[test]
fn test_report_unknown_player_rejected_and_not_saved() {
    let dir = tempdir().unwrap();
    register_all(dir.path(), &["A", "B"]);

    let out = run(dir.path(), &["report", "--winner", "1", "--loser", "9"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no registered player with id 9"));

    let standings = run(dir.path(), &["standings", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&standings)).unwrap();
    assert_eq!(json[0]["matches"], 0);
}

#[test]
fn test_delete_players_resets_count() {
    let dir = tempdir().unwrap();
    register_all(dir.path(), &["A", "B"]);

    let out = run(dir.path(), &["delete-players"]);
    assert_eq!(stdout(&out).trim(), "Deleted 2 players");
    assert_eq!(stdout(&run(dir.path(), &["count"])).trim(), "0");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let first = run(dir.path(), &["init"]);
    assert!(first.status.success());
    assert!(dir.path().join("config.toml").exists());

    let second = run(dir.path(), &["init"]);
    assert!(!second.status.success());
    assert!(stderr(&second).contains("already exists"));
}
