use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").expect("binary built");
    cmd.env("SPENDLOG_HOME", home.path());
    cmd
}

#[test]
fn list_on_fresh_store_reports_nothing_recorded() {
    let home = TempDir::new().unwrap();
    spendlog(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn add_then_summary_reports_totals_and_overspend() {
    let home = TempDir::new().unwrap();
    spendlog(&home).args(["budget", "300"]).assert().success();
    spendlog(&home)
        .args(["add", "2025-03-01", "groceries", "food", "200"])
        .assert()
        .success();
    spendlog(&home)
        .args(["add", "2025-03-02", "train ticket", "Travel", "150"])
        .assert()
        .success();

    spendlog(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Food")
                .and(predicate::str::contains("350.00"))
                .and(predicate::str::contains("-50.00"))
                .and(predicate::str::contains("exceeded your budget")),
        );
}

#[test]
fn add_rejects_unknown_category() {
    let home = TempDir::new().unwrap();
    spendlog(&home)
        .args(["add", "2025-03-01", "misc", "gadgets", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let home = TempDir::new().unwrap();
    spendlog(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn list_shows_recorded_entries() {
    let home = TempDir::new().unwrap();
    spendlog(&home)
        .args(["add", "2025-03-10", "march rent", "rent", "900"])
        .assert()
        .success();
    spendlog(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2025-03-10")
                .and(predicate::str::contains("Rent"))
                .and(predicate::str::contains("march rent")),
        );
}
