use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tally() -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    // Keep a developer's tally.toml and TALLY__ overrides out of the way.
    cmd.current_dir(std::env::temp_dir()).env_remove("RUST_LOG");
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with("TALLY__")) {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn quotes_the_smallest_loan() {
    tally()
        .args(["quote", "--amount", "100", "--term", "6", "--income", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment:   $16.94"))
        .stdout(predicate::str::contains("Total interest:    $1.61"));
}

#[test]
fn blank_quote_is_all_zeros() {
    tally()
        .args(["quote", "--amount", "0", "--term", "0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""monthlyPayment": 0.0"#))
        .stdout(predicate::str::contains(r#""debtToIncomeRatio": 0.0"#));
}

#[test]
fn schedule_ends_at_zero_balance() {
    tally()
        .args(["schedule", "--amount", "1200", "--term", "12", "--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  12       100.00         0.00       100.00         0.00",
        ))
        .stdout(predicate::str::contains("Total interest:  0.00"));
}

#[test]
fn approved_application_prints_the_request() {
    tally()
        .args([
            "apply", "--account", "acc-1", "--amount", "5000", "--term", "12", "--income", "3000",
            "--purpose", "car repair", "--json",
        ])
        .assert()
        .success()
        .stdout(r#"{"accountId":"acc-1","loanAmount":5000.0,"termMonths":12}"#.to_owned() + "\n");
}

#[test]
fn unaffordable_application_is_rejected() {
    tally()
        .args([
            "apply", "--account", "acc-1", "--amount", "10000", "--term", "6", "--income", "1000",
            "--purpose", "boat",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rejected: debt-to-income ratio exceeds 40%"));
}

#[test]
fn only_the_first_failure_is_reported() {
    tally()
        .args(["apply", "--amount", "50", "--term", "3", "--income", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("minimum loan amount is 100"))
        .stderr(predicate::str::contains("term must be").not());
}

#[test]
fn config_file_changes_the_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tally.toml");
    fs::write(&path, "[lending]\nannual_rate_percent = 0.0\nmin_principal = 1000.0\n").unwrap();

    tally()
        .args(["quote", "--amount", "1200", "--term", "12", "--income", "1000", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment:   $100.00"));

    tally()
        .args(["apply", "--account", "a", "--amount", "500", "--term", "12", "--income", "900"])
        .args(["--purpose", "rent", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("minimum loan amount is 1000"));
}

#[test]
fn environment_overrides_the_rate() {
    tally()
        .env("TALLY__LENDING__ANNUAL_RATE_PERCENT", "0")
        .args(["quote", "--amount", "600", "--term", "6", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""monthlyPayment": 100.0"#));
}

#[test]
fn missing_config_file_fails() {
    tally()
        .args(["quote", "--amount", "100", "--term", "6", "--config", "/nonexistent/tally.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn oversized_schedule_term_fails_without_allocating() {
    tally()
        .args(["schedule", "--amount", "1000", "--term", "4000000000", "--rate", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("term must be between 6 and 60 months"));
}

#[test]
fn usage_errors_are_not_rejections() {
    tally()
        .args(["quote", "--amount", "100", "--term", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--term"));

    tally().args(["apply", "--amount", "100"]).assert().code(1);
}

#[test]
fn help_is_not_a_failure() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("schedule"));
}

#[test]
fn unusable_policy_fails_every_command() {
    tally()
        .env("TALLY__LENDING__ANNUAL_RATE_PERCENT", "-1")
        .args(["quote", "--amount", "1000", "--term", "12"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Lending policy is unusable"));

    tally()
        .env("TALLY__LENDING__DEBT_TO_INCOME_WARNING", "NaN")
        .args(["schedule", "--amount", "1000", "--term", "12"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("debt_to_income_warning"));
}

#[test]
fn inconsistent_policy_fails_apply() {
    tally()
        .env("TALLY__LENDING__MIN_TERM_MONTHS", "72")
        .args(["apply", "--account", "a", "--amount", "500", "--term", "12", "--income", "900"])
        .args(["--purpose", "rent"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Lending policy is unusable"));
}
