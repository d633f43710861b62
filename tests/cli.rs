//! End-to-end tests for the `expense` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_DASHBOARD_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, title: &str, amount: &str, date: &str) {
    expense(dir)
        .args(["add", title, amount, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added exp-"));
}

#[test]
fn add_then_list_and_summary() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Groceries", "250.75", "2025-01-10");
    add(&dir, "Rent", "12000", "2025-01-01");

    let output = expense(&dir).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let groceries = stdout.find("Groceries").unwrap();
    let rent = stdout.find("Rent").unwrap();
    assert!(groceries < rent, "newest date first:\n{}", stdout);

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:      ₹ 1,000.00"))
        .stdout(predicate::str::contains("Total Expenses:    ₹ 12,250.75"))
        .stdout(predicate::str::contains("Remaining Income:  ₹ -11,250.75"));

    assert!(dir.path().join("database.db").exists());
}

#[test]
fn list_on_fresh_directory_is_empty() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn negative_amount_is_accepted() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Refund", "-20", "2025-02-01");

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Income:  ₹ 1,020.00"));
}

#[test]
fn chart_prints_json() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Tea", "2.5", "2025-03-01");

    expense(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Expenses Over Time\""))
        .stdout(predicate::str::contains("\"mode\":\"lines+markers\""))
        .stdout(predicate::str::contains("2025-03-01"));
}

#[test]
fn export_csv_writes_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Groceries", "250.75", "2025-01-10");
    let out = dir.path().join("expenses.csv");

    expense(&dir)
        .args(["export", out.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(out).unwrap();
    assert!(contents.contains("Groceries"));
    assert!(contents.contains("2025-01-10"));
}

#[test]
fn init_writes_settings_and_database() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("database.db").exists());
}

#[test]
fn config_reports_paths_and_income() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("database.db"))
        .stdout(predicate::str::contains("Fixed income:    1000"));
}

#[test]
fn add_rejects_non_numeric_amount() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Tea", "lots"])
        .assert()
        .failure();
}
