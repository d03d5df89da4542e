//! CLI integration tests for the todo shell
//!
//! These tests drive the `todo` binary with scripted stdin and check the
//! transcript and the export files it writes.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the todo binary
fn todo_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("todo"))
}

/// Create a temporary directory with an empty config file, so the user's
/// own configuration never leaks into a test
fn setup_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "").unwrap();
    dir
}

/// Command running inside `dir` with its isolated config
fn session(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = todo_cmd();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn export_files(dir: &TempDir, extension: &str) -> Vec<String> {
    fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("tasks_") && name.ends_with(extension))
        .collect()
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_exit_immediately() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to Todo List App!"))
        .stdout(predicate::str::contains("--- TODO MENU ---"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_no_banner_flag() {
    let dir = setup_dir();

    session(&dir)
        .arg("--no-banner")
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_banner_disabled_in_config() {
    let dir = setup_dir();
    fs::write(dir.path().join("config.toml"), "[shell]\nbanner = false\n").unwrap();

    session(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_invalid_choice_does_not_crash() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("banana\n\n8\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again.").count(3));
}

#[test]
fn test_scenario_add_complete_delete() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nWrite report\n1\nCall client\n3\n1\n5\n2\ny\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully! ID: 1"))
        .stdout(predicate::str::contains("Task added successfully! ID: 2"))
        .stdout(predicate::str::contains("Task marked as complete!"))
        .stdout(predicate::str::contains("Task deleted successfully!"))
        .stdout(predicate::str::ends_with(
            "--- YOUR TASKS ---\n1. [DONE] Write report\n\n\n--- TODO MENU ---\n\
             1. Add new task\n2. View all tasks\n3. Mark task as complete\n4. Edit task\n\
             5. Delete task\n6. Export tasks\n7. Exit\nEnter your choice: Goodbye!\n",
        ));
}

#[test]
fn test_ids_not_reused_after_delete() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nOne\n5\n1\ny\n1\nTwo\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully! ID: 2"))
        .stdout(predicate::str::contains("2. [TODO] Two"));
}

#[test]
fn test_edit_flow() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nDraft\n4\n1\n  Final  \n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current title: Draft"))
        .stdout(predicate::str::contains("Task updated successfully!"))
        .stdout(predicate::str::contains("1. [TODO] Final\n"));
}

#[test]
fn test_validation_errors() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\n \n1\nReal\n3\nx\n5\n1\nn\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task title cannot be empty."))
        .stdout(predicate::str::contains("Please enter a valid number."))
        .stdout(predicate::str::contains("Delete cancelled."))
        .stdout(predicate::str::contains("Task added successfully! ID: 1"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_csv_named_file() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nBuy milk\n1\nPay, rent\n3\n2\n6\n2\nreport.csv\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks exported successfully to: "))
        .stdout(predicate::str::contains("report.csv"));

    let csv = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert_eq!(
        csv,
        "ID,Title,Status\n1,Buy milk,Pending\n2,\"Pay, rent\",Completed\n"
    );
}

#[test]
fn test_export_json_default_file() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nBuy milk\n1\nPay, rent\n3\n2\n6\n1\n\n7\n")
        .assert()
        .success();

    let files = export_files(&dir, ".json");
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(dir.path().join(&files[0])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["totalTasks"], 2);
    assert!(json["exportDate"].as_str().unwrap().ends_with('Z'));
    assert_eq!(
        json["tasks"],
        serde_json::json!([
            {"id": 1, "title": "Buy milk", "completed": false},
            {"id": 2, "title": "Pay, rent", "completed": true}
        ])
    );
}

#[test]
fn test_export_dir_flag() {
    let dir = setup_dir();
    let out_dir = TempDir::new().unwrap();

    session(&dir)
        .arg("--export-dir")
        .arg(out_dir.path())
        .write_stdin("1\nBuy milk\n6\n2\n\n7\n")
        .assert()
        .success();

    let files: Vec<_> = fs::read_dir(out_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(export_files(&dir, ".csv").is_empty());
}

#[test]
fn test_export_failure_is_reported() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("1\nBuy milk\n6\n1\nmissing/dir/out.json\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export failed: Failed to export to JSON"))
        .stdout(predicate::str::contains("1. [TODO] Buy milk"));
}

#[test]
fn test_export_requires_tasks() {
    let dir = setup_dir();

    session(&dir)
        .write_stdin("6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks to export."));

    assert!(export_files(&dir, ".json").is_empty());
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    todo_cmd()
        .current_dir(dir.path())
        .args(["--config", "nope.toml"])
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = setup_dir();
    fs::write(dir.path().join("config.toml"), "[shell\nbanner = ").unwrap();

    session(&dir)
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_verbose_goes_to_stderr() {
    let dir = setup_dir();

    session(&dir)
        .arg("--verbose")
        .write_stdin("1\nBuy milk\n7\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:add] Created task 1: Buy milk"))
        .stdout(predicate::str::contains("[verbose").not());
}
