//! End-to-end tests for the change_dist binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Investing.com style export: quoted numbers, `Change %` as text.
const NIFTY_BANK_SAMPLE: &str = "\
Date,Price,Open,High,Low,Vol.,Change %
\"02-01-2024\",\"48,195.85\",\"48,234.10\",\"48,363.40\",\"47,855.05\",\"251.40M\",0.30%
\"03-01-2024\",\"47,499.90\",\"48,195.85\",\"48,320.55\",\"47,422.70\",\"289.00M\",-1.44%
\"04-01-2024\",\"48,419.05\",\"47,499.90\",\"48,499.00\",\"47,499.90\",\"301.50M\",2.00%
\"05-01-2024\",\"46,800.00\",\"48,419.05\",\"48,500.00\",\"46,750.00\",\"410.10M\",-3.34%
\"08-01-2024\",\"49,100.10\",\"46,800.00\",\"49,200.00\",\"46,800.00\",\"520.00M\",4.91%
\"09-01-2024\",\"49,100.10\",\"49,100.10\",\"49,100.10\",\"49,100.10\",\"-\",n/a
";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn change_dist() -> Command {
    let mut cmd = Command::cargo_bin("change_dist").unwrap();
    cmd.env_remove("CHANGE_DIST_INPUT")
        .env_remove("CHANGE_DIST_COLUMN")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// REPORT
// =============================================================================

#[test]
fn prints_distribution_in_canonical_order() {
    let file = csv_file(NIFTY_BANK_SAMPLE);

    change_dist()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Change% Distribution:\n0-2%: 2\n2-3%: 1\n3-4%: 1\n4%+: 1\n");
}

#[test]
fn one_value_per_bucket_and_missing_row_excluded() {
    let file = csv_file("Date,Change %\nd1,1.5%\nd2,2.5%\nd3,-3.5%\nd4,5.0%\nd5,abc\n");

    change_dist()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Change% Distribution:\n0-2%: 1\n2-3%: 1\n3-4%: 1\n4%+: 1\n");
}

#[test]
fn empty_buckets_still_print() {
    let file = csv_file("Change %\n0.00%\n-0.5%\n");

    change_dist()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0-2%: 2\n"))
        .stdout(predicate::str::contains("2-3%: 0\n"))
        .stdout(predicate::str::contains("3-4%: 0\n"))
        .stdout(predicate::str::contains("4%+: 0\n"));
}

#[test]
fn bad_values_after_long_numeric_run_are_missing() {
    let mut contents = String::from("Date,Vol.,Change %\n");
    for i in 0..10_000 {
        contents.push_str(&format!("d{i},100,1.5\n"));
    }
    contents.push_str("dx,-,abc\ndy,100,2.5\n");
    let file = csv_file(&contents);

    change_dist()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Change% Distribution:\n0-2%: 10000\n2-3%: 1\n3-4%: 0\n4%+: 0\n");
}

#[test]
fn repeated_runs_give_identical_output() {
    let file = csv_file(NIFTY_BANK_SAMPLE);

    let first = stdout_of(change_dist().arg(file.path()));
    let second = stdout_of(change_dist().arg(file.path()));
    assert_eq!(first, second);
}

#[test]
fn json_format_reports_missing_rows() {
    let file = csv_file(NIFTY_BANK_SAMPLE);

    let out = stdout_of(change_dist().arg(file.path()).args(["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["column"], "Change %");
    assert_eq!(value["total_rows"], 6);
    assert_eq!(value["missing"], 1);
    let counts: Vec<u64> = value["distribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![2, 1, 1, 1]);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn input_path_from_environment() {
    let file = csv_file("Change %\n3.2%\n");

    change_dist()
        .env("CHANGE_DIST_INPUT", file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3-4%: 1\n"));
}

#[test]
fn custom_column_name() {
    let file = csv_file("Date,Chg\nd1,-2.7\nd2,0.4\n");

    change_dist()
        .arg(file.path())
        .args(["--column", "Chg"])
        .assert()
        .success()
        .stdout("Change% Distribution:\n0-2%: 1\n2-3%: 1\n3-4%: 0\n4%+: 0\n");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn missing_file_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Nifty Bank Historical Data.csv");

    change_dist()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("CSV file not found"))
        .stderr(predicate::str::contains("Nifty Bank Historical Data.csv"));
}

#[test]
fn missing_change_column_fails() {
    let file = csv_file("Date,Price\nd1,100\n");

    change_dist()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column 'Change %' not found"));
}

#[test]
fn extra_field_row_fails_without_report() {
    let file = csv_file("Date,Change %\nd1,1.5%\nd2,2.5%,oops\n");

    change_dist()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load CSV"));
}

#[test]
fn missing_input_argument_fails() {
    change_dist().assert().failure();
}
