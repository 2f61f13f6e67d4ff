use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROSTER_FILE")
        .env("NO_COLOR", "1");
    cmd
}

fn add(dir: &TempDir, id: &str, name: &str, age: &str, grade: &str, email: &str) {
    roster(dir)
        .args(["add", id, name, age, grade, email])
        .assert()
        .success();
}

#[test]
fn test_add_writes_table_in_current_dir() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "1", "Ann", "20", "A", "ann@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added (1): Ann"));

    let table = fs::read_to_string(dir.path().join("students.csv")).unwrap();
    assert_eq!(table, "id,name,age,grade,email\n1,Ann,20,A,ann@x.com\n");
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .arg("count")
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::is_empty());
    assert!(!dir.path().join("students.csv").exists());
}

#[test]
fn test_list_keeps_insertion_order() {
    let dir = TempDir::new().unwrap();
    add(&dir, "3", "Cy", "30", "C", "cy@x");
    add(&dir, "1", "Ann", "20", "A", "ann@x");

    let output = roster(&dir).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let cy = stdout.find("Cy").unwrap();
    let ann = stdout.find("Ann").unwrap();
    assert!(cy < ann);
    assert!(stdout.contains("Total: 2 students"));
}

#[test]
fn test_duplicate_id_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1", "Ann", "20", "A", "ann@x");

    roster(&dir)
        .args(["add", "1", "Bob", "22", "B", "bob@x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Student ID 1 already exists"));

    roster(&dir).arg("count").assert().stdout("1\n");
}

#[test]
fn test_invalid_fields_are_rejected() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["add", "1", "Ann", "150", "A", "ann@x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age must be between 1 and 149"));

    roster(&dir)
        .args(["add", "1", "Ann", "20", "A", "ann.x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain '@'"));

    assert!(!dir.path().join("students.csv").exists());
}

#[test]
fn test_show_and_search() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1", "Anna", "19", "A", "anna@x");
    add(&dir, "2", "Bob", "22", "B", "bob@x");
    add(&dir, "3", "Anand", "21", "A", "anand@x");

    roster(&dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout("ID: 2 | Name: Bob | Age: 22 | Grade: B | Email: bob@x\n");

    roster(&dir)
        .args(["search", "AN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ID: 1 | Name: Anna"))
        .stdout(predicate::str::contains("2. ID: 3 | Name: Anand"))
        .stdout(predicate::str::contains("Bob").not());

    roster(&dir)
        .args(["show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student with ID 9 not found"));
}

#[test]
fn test_partial_update() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1", "Ann", "20", "A", "ann@x");

    roster(&dir)
        .args(["update", "1", "--name", "Annie", "--age", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept current age"))
        .stdout(predicate::str::contains("Student updated (1): Annie"));

    let table = fs::read_to_string(dir.path().join("students.csv")).unwrap();
    assert!(table.contains("1,Annie,20,A,ann@x\n"));
}

#[test]
fn test_delete_with_and_without_confirmation() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1", "Ann", "20", "A", "ann@x");
    add(&dir, "2", "Bob", "22", "B", "bob@x");

    roster(&dir)
        .args(["delete", "1"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));
    roster(&dir).arg("count").assert().stdout("2\n");

    roster(&dir)
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted (1): Ann"));

    roster(&dir)
        .args(["delete", "2", "--yes"])
        .assert()
        .success();
    roster(&dir).arg("count").assert().stdout("0\n");

    let table = fs::read_to_string(dir.path().join("students.csv")).unwrap();
    assert_eq!(table, "id,name,age,grade,email\n");
}

#[test]
fn test_file_flag_and_env() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("nested").join("class.csv");

    roster(&dir)
        .args(["add", "1", "Ann", "20", "A", "ann@x", "--file"])
        .arg(&custom)
        .assert()
        .success();
    assert!(custom.exists());

    roster(&dir)
        .env("ROSTER_FILE", &custom)
        .arg("count")
        .assert()
        .stdout("1\n");
}

#[test]
fn test_config_data_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "data_file": "period3.csv" }"#,
    )
    .unwrap();

    add(&dir, "1", "Ann", "20", "A", "ann@x");
    assert!(dir.path().join("period3.csv").exists());
    assert!(!dir.path().join("students.csv").exists());
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("students.csv"),
        "id,name,age,grade,email\n1,Ann,20,A,ann@x\n2,Bob,x,B,bob@x\n",
    )
    .unwrap();

    roster(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped: Malformed record on line 3"))
        .stdout(predicate::str::contains("Total: 1 student"));
}

#[test]
fn test_init_creates_header_only_table() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized roster"));

    let table = fs::read_to_string(dir.path().join("students.csv")).unwrap();
    assert_eq!(table, "id,name,age,grade,email\n");
}

#[test]
fn test_init_writes_default_config_once() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    roster(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains(r#""data_file": "students.csv""#));

    fs::write(&config, r#"{ "data_file": "period3.csv" }"#).unwrap();
    roster(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config").not());
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        r#"{ "data_file": "period3.csv" }"#
    );
    assert!(dir.path().join("period3.csv").exists());
}

#[test]
fn test_init_with_file_flag_leaves_config_alone() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .args(["init", "--file", "elsewhere.csv"])
        .assert()
        .success();
    assert!(dir.path().join("elsewhere.csv").exists());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_menu_session() {
    let dir = TempDir::new().unwrap();
    roster(&dir)
        .write_stdin("1\n5\nEve\n33\nD\neve@x\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No existing data file found"))
        .stdout(predicate::str::contains("Student added (5): Eve"))
        .stdout(predicate::str::contains("Goodbye"));

    let table = fs::read_to_string(dir.path().join("students.csv")).unwrap();
    assert!(table.contains("5,Eve,33,D,eve@x"));
}
