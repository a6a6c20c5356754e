//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{accrue_cmd, PRIVATE_KEY};

#[test]
fn test_help_output() {
    accrue_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("accrue"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("harvest"))
        .stdout(predicate::str::contains("set-target"))
        .stdout(predicate::str::contains("mock-yield"))
        .stdout(predicate::str::contains("faucet"));
}

#[test]
fn test_invalid_command() {
    accrue_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_deposit_requires_amount_or_max() {
    accrue_cmd()
        .arg("deposit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_deposit_amount_conflicts_with_max() {
    accrue_cmd()
        .args(["deposit", "1", "--max"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_set_target_missing_asset() {
    accrue_cmd()
        .arg("set-target")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_watch_rejects_zero_interval() {
    accrue_cmd()
        .args(["watch", "--interval", "0"])
        .assert()
        .failure();
}

#[test]
fn test_landing_without_wallet() {
    accrue_cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Connect a wallet"))
        .stdout(predicate::str::contains("Treasury Bonds"));
}

#[test]
fn test_landing_json_without_wallet() {
    accrue_cmd()
        .args(["dashboard", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"connected\": false"));
}

#[test]
fn test_writes_require_wallet() {
    for args in [
        vec!["harvest"],
        vec!["deposit", "1"],
        vec!["set-target", "2"],
        vec!["mock-yield"],
        vec!["faucet"],
    ] {
        accrue_cmd()
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Wallet not connected"));
    }
}

#[test]
fn test_portfolio_requires_wallet() {
    accrue_cmd()
        .arg("portfolio")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not connected"));
}

#[test]
fn test_invalid_private_key() {
    accrue_cmd()
        .args(["--private-key", "not-a-key", "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid private key"));
}

#[test]
fn test_unsupported_chain() {
    accrue_cmd()
        .args(["--chain-id", "1", "addresses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported chain ID: 1"));
}

#[test]
fn test_addresses_offline() {
    accrue_cmd()
        .arg("addresses")
        .assert()
        .success()
        .stdout(predicate::str::contains("mantle-sepolia (5003)"))
        .stdout(predicate::str::contains(
            "0x9C70C2F67028e5464F5b60E29648240e358E83B6",
        ));
}

#[test]
fn test_assets_offline() {
    accrue_cmd()
        .arg("assets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice Financing"))
        .stdout(predicate::str::contains("8.50%"));
}

#[test]
fn test_deposit_zero_rejected_before_sending() {
    accrue_cmd()
        .args(["--private-key", PRIVATE_KEY, "deposit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_empty_deposit_is_noop() {
    accrue_cmd()
        .args(["--private-key", PRIVATE_KEY, "deposit", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to deposit"));
}
