//! End-to-end tests for the `pulse` binary
//!
//! Each test points PULSE_CLI_DATA_DIR at a fresh temp directory so no
//! test ever touches a real config file.

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::TempDir;

fn pulse(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pulse").unwrap();
    cmd.env("PULSE_CLI_DATA_DIR", config_dir.path());
    cmd
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn calculate_reports_strong_health() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args([
            "calculate",
            "--income",
            "50000",
            "--rent",
            "15000",
            "--utilities",
            "3000",
            "--other",
            "2000",
            "--loan-amount",
            "120000",
            "--loan-interest-rate",
            "12",
            "--loan-time-period",
            "24",
            "--amount-paid",
            "20000",
            "--loan-start-date",
            &today(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strong"))
        .stdout(predicate::str::contains("$24633.33"))
        .stdout(predicate::str::contains("$5366.67 per month"))
        .stdout(predicate::str::contains("24 months"));
}

#[test]
fn calculate_reports_deficit_with_warning() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args([
            "calculate",
            "--income",
            "20000",
            "--rent",
            "15000",
            "--utilities",
            "3000",
            "--other",
            "5000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deficit"))
        .stdout(predicate::str::contains("-$3000.00"))
        .stdout(predicate::str::contains(
            "Warning: your expenses exceed your income.",
        ));
}

#[test]
fn calculate_with_garbage_input_still_renders() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args([
            "calculate",
            "--income",
            "not-a-number",
            "--rent",
            "???",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to chart yet"));
}

#[test]
fn loan_without_start_date_shows_placeholders() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args([
            "loan",
            "--loan-amount",
            "120000",
            "--loan-interest-rate",
            "12",
            "--loan-time-period",
            "24",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Months Remaining:    -"))
        .stdout(predicate::str::contains("Monthly EMI:         -"));
}

#[test]
fn report_without_income_prints_prompt() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args(["report", "--rent", "12000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please provide a valid income figure",
        ));
}

#[test]
fn report_names_tier_and_savings() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args([
            "report",
            "--income",
            "50000",
            "--rent",
            "15000",
            "--utilities",
            "3000",
            "--other",
            "2000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("income of $50000.00"))
        .stdout(predicate::str::contains("*Strong*"))
        .stdout(predicate::str::contains("investing the surplus"));
}

#[test]
fn calculate_json_is_structured() {
    let dir = TempDir::new().unwrap();

    let output = pulse(&dir)
        .args([
            "calculate",
            "--json",
            "--income",
            "50000",
            "--rent",
            "15000",
            "--utilities",
            "3000",
            "--other",
            "2000",
            "--loan-amount",
            "120000",
            "--loan-interest-rate",
            "12",
            "--loan-time-period",
            "24",
            "--amount-paid",
            "20000",
            "--loan-start-date",
            &today(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    // Amounts are serialized in cents
    assert_eq!(value["budget"]["health"], "strong");
    assert_eq!(value["budget"]["savings"], 2_463_333);
    assert_eq!(value["loan"]["monthly_installment"], 536_667);
    assert_eq!(value["chart"]["slices"][0]["kind"], "rent");
    assert_eq!(value["chart"]["slices"][4]["amount"], 2_463_333);
}

#[test]
fn loan_json_placeholder_is_all_null() {
    let dir = TempDir::new().unwrap();

    let output = pulse(&dir)
        .args(["loan", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["months_remaining"].is_null());
    assert!(value["monthly_installment"].is_null());
}

#[test]
fn no_subcommand_prints_hint() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("pulse --help"))
        .stdout(predicate::str::contains("pulse tui"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    pulse(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings target:      10%"))
        .stdout(predicate::str::contains("config.json"));
}
