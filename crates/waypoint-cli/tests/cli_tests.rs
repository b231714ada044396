use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A `wp` command with plain output against the given database, with no
/// completion service configured.
fn wp_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("WAYPOINT_DATABASE_FILE")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

#[test]
fn test_cli_generate_plan() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Launch", "a", "product", "with", "marketing", "in", "2", "weeks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains(
            "# 1. Launch a product with marketing in 2 weeks",
        ))
        .stdout(predicate::str::contains("Define scope & success metrics"))
        .stdout(predicate::str::contains("Marketing prep"))
        .stdout(predicate::str::contains("Deployment & Launch"));
}

#[test]
fn test_cli_generate_with_owner() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book", "--owner", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: Alice"));
}

#[test]
fn test_cli_generate_json() {
    let temp_dir = create_cli_test_environment();

    let output = wp_cmd(&temp_dir)
        .args(["generate", "Write a book", "--json"])
        .output()
        .expect("Failed to run wp");
    assert!(output.status.success());

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(plan["id"], 1);
    assert_eq!(plan["goal_text"], "Write a book");

    let tasks = plan["tasks"].as_array().expect("tasks should be an array");
    assert_eq!(tasks.len(), 6);
    assert_eq!(tasks[0]["title"], "Define scope & success metrics");
    assert_eq!(tasks[0]["depends_on"], "");
    assert_eq!(tasks[1]["depends_on"], "Define scope & success metrics");
}

#[test]
fn test_cli_dry_run_does_not_store() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "ship a product with marketing in 3 days", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan preview"))
        .stdout(predicate::str::contains("### 4. Marketing prep"))
        .stdout(predicate::str::contains("Created plan").not());

    wp_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_dry_run_json() {
    let temp_dir = create_cli_test_environment();

    let output = wp_cmd(&temp_dir)
        .args([
            "generate",
            "ship a product with marketing in 3 days",
            "--dry-run",
            "--json",
        ])
        .output()
        .expect("Failed to run wp");
    assert!(output.status.success());

    let tasks: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let tasks = tasks.as_array().expect("preview should be an array");
    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[3]["title"], "Marketing prep");
}

#[test]
fn test_cli_external_without_service_falls_back() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book", "--external"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("Service note").not());
}

#[test]
fn test_cli_blank_goal_fails() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate plan"));
}

#[test]
fn test_cli_generate_requires_goal() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir).arg("generate").assert().failure();
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_default_command_lists() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book"])
        .assert()
        .success();

    wp_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Write a book (ID: 1) (6 tasks)"));
}

#[test]
fn test_cli_list_newest_first() {
    let temp_dir = create_cli_test_environment();

    for goal in ["Write a book", "ship mvp in 3 days"] {
        wp_cmd(&temp_dir).args(["generate", goal]).assert().success();
    }

    let output = wp_cmd(&temp_dir)
        .arg("ls")
        .output()
        .expect("Failed to run wp");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let newer = stdout.find("ship mvp in 3 days (ID: 2) (4 tasks)");
    let older = stdout.find("Write a book (ID: 1) (6 tasks)");
    assert!(newer.is_some() && older.is_some());
    assert!(newer < older);
}

#[test]
fn test_cli_show_plan() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book"])
        .assert()
        .success();

    wp_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Write a book"))
        .stdout(predicate::str::contains("## Tasks"))
        .stdout(predicate::str::contains(
            "**Depends on**: Define scope & success metrics",
        ));
}

#[test]
fn test_cli_show_numbers_tasks_within_plan() {
    let temp_dir = create_cli_test_environment();

    for goal in ["Write a book", "ship mvp in 3 days"] {
        wp_cmd(&temp_dir).args(["generate", goal]).assert().success();
    }

    wp_cmd(&temp_dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Define scope & success metrics"))
        .stdout(predicate::str::contains("### 4. Testing & QA"))
        .stdout(predicate::str::contains("### 7.").not());
}

#[test]
fn test_cli_show_plan_json() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book"])
        .assert()
        .success();

    let output = wp_cmd(&temp_dir)
        .args(["show", "1", "--json"])
        .output()
        .expect("Failed to run wp");
    assert!(output.status.success());

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(plan["tasks"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_cli_delete_plan() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["generate", "Write a book"])
        .assert()
        .success();

    wp_cmd(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'Write a book' (ID: 1)"));

    wp_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .failure();

    wp_cmd(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 1 not found"));
}

#[test]
fn test_cli_invalid_plan_id() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(&temp_dir)
        .args(["show", "not-a-number"])
        .assert()
        .failure();
}
