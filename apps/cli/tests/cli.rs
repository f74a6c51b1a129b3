//! End-to-end tests for the `zeikomi` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zeikomi() -> Command {
    let mut cmd = Command::cargo_bin("zeikomi").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ZEIKOMI_LOG_FILTER")
        .env_remove("ZEIKOMI_INPUT_FORMAT")
        .env_remove("ZEIKOMI_BREAKDOWN");
    cmd
}

#[test]
fn test_stdin_baskets() {
    zeikomi()
        .write_stdin("BTDD500\nDTDD500\nDTDD400:BTDD199\nDTDD200:BTDD300\n")
        .assert()
        .success()
        .stdout("550\n540\n647\n486\n");
}

#[test]
fn test_positional_baskets() {
    zeikomi()
        .args(["BTDD200:DTDD400:BTDD200", "DTDD2:BTDD5", "DTDD3:DTDD3:DTDD3"])
        .assert()
        .success()
        .stdout("868\n8\n9\n");
}

#[test]
fn test_rejected_basket_sets_exit_code() {
    zeikomi()
        .write_stdin("BTDD500\nXTDD1\nDTDD10000:BTDD10000\n")
        .assert()
        .failure()
        .code(1)
        .stdout("550\nerror: unknown product code in 'XTDD1'\n22000\n");
}

#[test]
fn test_out_of_range_price() {
    zeikomi()
        .arg("BTDD100000")
        .assert()
        .failure()
        .stdout(predicate::str::contains("between 0 and 99999 yen"));
}

#[test]
fn test_json_format() {
    zeikomi()
        .args(["--format", "json"])
        .write_stdin(
            r#"[{"category":"Food","isOral":true,"service":"TakeOut","deliveryMethod":"Catering","deliveryDestination":"NursingHome","price":400},{"category":"Book","isOral":false,"service":"TakeOut","deliveryMethod":"Delivery","deliveryDestination":"House","price":500}]"#,
        )
        .assert()
        .success()
        .stdout("972\n");
}

#[test]
fn test_format_from_environment() {
    zeikomi()
        .env("ZEIKOMI_INPUT_FORMAT", "json")
        .write_stdin("BTDD500\n")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("error: Invalid JSON"));
}

#[test]
fn test_breakdown() {
    zeikomi()
        .args(["--breakdown", "DTDD400:BTDD199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":647"))
        .stdout(predicate::str::contains("\"discountApplied\":false"));
}

#[test]
fn test_missing_config_file() {
    zeikomi()
        .args(["--config", "no-such-zeikomi.toml", "BTDD500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_invalid_log_filter_fails_before_any_basket() {
    zeikomi()
        .env("ZEIKOMI_LOG_FILTER", "warn,[[[not-a-directive")
        .arg("BTDD500")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid log filter"));
}

#[test]
fn test_invalid_input_format_from_environment() {
    zeikomi()
        .env("ZEIKOMI_INPUT_FORMAT", "xml")
        .arg("BTDD500")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to load configuration"));
}

/// A working directory holding a `zeikomi.toml` with the given contents.
fn config_dir(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("zeikomi.toml"), contents).unwrap();
    dir
}

#[test]
fn test_config_file_enables_breakdown() {
    let dir = config_dir("breakdown = true\n");
    zeikomi()
        .current_dir(dir.path())
        .arg("BTDD500")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":550"));
}

#[test]
fn test_no_breakdown_flag_overrides_config_file() {
    let dir = config_dir("breakdown = true\n");
    zeikomi()
        .current_dir(dir.path())
        .args(["--no-breakdown", "BTDD500"])
        .assert()
        .success()
        .stdout("550\n");
}

#[test]
fn test_last_breakdown_flag_wins() {
    zeikomi()
        .args(["--breakdown", "--no-breakdown", "BTDD500"])
        .assert()
        .success()
        .stdout("550\n");
}

#[test]
fn test_explicit_config_file() {
    let dir = config_dir("input_format = \"json\"\n");
    let path = dir.path().join("zeikomi.toml");
    zeikomi()
        .arg("--config")
        .arg(&path)
        .write_stdin(r#"[{"category":"Beverage","isOral":true,"service":"TakeOut","deliveryMethod":"Delivery","deliveryDestination":"House","price":500}]"#)
        .assert()
        .success()
        .stdout("540\n");
}
