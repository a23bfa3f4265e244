// Runs the ledger-kit binary so the shared stdout logger is exercised end to end

use std::process::{Command, Output};

fn run_ledger_kit(args: &[&str], log_level: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ledger-kit"));
    cmd.args(args).env_remove("LEDGER_LOG_LEVEL");
    if let Some(level) = log_level {
        cmd.env("LEDGER_LOG_LEVEL", level);
    }
    cmd.output().expect("failed to run ledger-kit")
}

#[test]
fn test_demo_prints_info_lines_to_stdout() {
    let output = run_ledger_kit(&["demo"], None);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[INFO] Deposited 100.00, balance 100.00"));
    assert!(stdout.contains("[INFO] Withdrew 50.00, balance 50.00"));
    assert!(stdout.contains("[ERROR] Withdrawal of 200.00 refused: Insufficient balance"));
    assert!(stdout.contains("(balance still 50.00)"));
    assert!(stdout.contains("[ERROR] Deposit refused: Cannot deposit negative amount"));
    assert!(stdout.contains("[INFO] Final balance 50.00 after 2 movements"));
    assert!(!stdout.contains("[WARNING]"));
}

#[test]
fn test_demo_respects_log_level() {
    let output = run_ledger_kit(&[], Some("error"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("[INFO]"));
    assert!(stdout.contains("[ERROR] Withdrawal of 200.00 refused"));
}

#[test]
fn test_demo_warns_on_bad_log_level() {
    let output = run_ledger_kit(&["demo"], Some("verbose"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[WARNING] Unknown log level: verbose (LEDGER_LOG_LEVEL), using INFO"));
    assert!(stdout.contains("[INFO] Deposited 100.00"));
}

#[test]
fn test_statement_prints_json() {
    let output = run_ledger_kit(&["statement"], Some("error"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(value["balance"], 50.0);
    assert_eq!(value["movements"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_command_exits_with_usage() {
    let output = run_ledger_kit(&["frobnicate"], None);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: ledger-kit [demo|statement]"));
}
