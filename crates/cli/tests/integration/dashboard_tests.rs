//! Dashboard, read and precondition tests against a mocked JSON-RPC node.

use std::time::{SystemTime, UNIX_EPOCH};

use accrue_contracts::erc20::IERC20;
use accrue_contracts::meth::IMETH;
use accrue_contracts::rwa_token::IRWAToken;
use accrue_contracts::test_util::RpcMock;
use accrue_contracts::yield_vault::IYieldVault;
use accrue_contracts::MANTLE_SEPOLIA;
use alloy::primitives::U256;
use alloy::sol_types::{SolCall, SolValue};
use predicates::prelude::*;

use super::helpers::{accrue_cmd, accrue_cmd_with_node, start_node};

fn milli(n: u64) -> U256 {
    U256::from(n) * U256::from(1_000_000_000_000_000u64)
}

fn wei(whole: u64) -> U256 {
    milli(whole * 1_000)
}

struct Position {
    principal: U256,
    pending: U256,
    last_faucet: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            principal: wei(5),
            pending: milli(2),
            last_faucet: 0,
        }
    }
}

fn node(position: Position) -> RpcMock {
    let vault = MANTLE_SEPOLIA.yield_vault;
    let meth = MANTLE_SEPOLIA.meth;
    RpcMock::new()
        .with_native_balance(wei(3))
        .on_call(
            vault,
            IYieldVault::getUserDashboardCall::SELECTOR,
            (position.principal, position.pending, wei(1), milli(900), U256::from(3))
                .abi_encode_params(),
        )
        .on_call(
            vault,
            IYieldVault::getYieldProgressCall::SELECTOR,
            U256::from(40).abi_encode(),
        )
        .on_call(
            vault,
            IYieldVault::getProtocolStatsCall::SELECTOR,
            (wei(120), U256::from(7), wei(3), wei(2)).abi_encode_params(),
        )
        .on_call(meth, IERC20::balanceOfCall::SELECTOR, wei(10).abi_encode())
        .on_call(meth, IERC20::allowanceCall::SELECTOR, U256::MAX.abi_encode())
        .on_call(
            meth,
            IMETH::lastFaucetTimeCall::SELECTOR,
            U256::from(position.last_faucet).abi_encode(),
        )
        .on_call(
            meth,
            IMETH::FAUCET_COOLDOWNCall::SELECTOR,
            U256::from(3600).abi_encode(),
        )
        .on_call(
            MANTLE_SEPOLIA.rwa_token,
            IRWAToken::balanceOfCall::SELECTOR,
            U256::from(4).abi_encode(),
        )
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn test_dashboard_table_output() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd_with_node(&server)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, 0xf39fd6..."))
        .stdout(predicate::str::contains("Principal Staked: 5.0000 mETH"))
        .stdout(predicate::str::contains("Pending Yield:    0.002000 mETH"))
        .stdout(predicate::str::contains("Invoice Financing (8.50% APY)"))
        .stdout(predicate::str::contains("mETH Balance: 10.0000 mETH"))
        .stdout(predicate::str::contains("Total Users:        7"));
}

#[tokio::test]
async fn test_dashboard_json_output() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd_with_node(&server)
        .args(["dashboard", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"connected\": true"))
        .stdout(predicate::str::contains("\"progress_percent\": 40"))
        .stdout(predicate::str::contains("\"harvest\": true"));
}

#[tokio::test]
async fn test_stats_without_wallet() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd()
        .env("ACCRUE_RPC_URL", server.uri())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Value Locked: 120.0000 mETH"))
        .stdout(predicate::str::contains("RWA Purchased:      2.0000 mETH"));
}

#[tokio::test]
async fn test_portfolio_lists_holdings() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd_with_node(&server)
        .arg("portfolio")
        .assert()
        .success()
        .stdout(predicate::str::contains("NYC Real Estate"))
        .stdout(predicate::str::contains("Infrastructure"));
}

#[tokio::test]
async fn test_assets_marks_current_target() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd_with_node(&server)
        .args(["assets", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": 3"));
}

#[tokio::test]
async fn test_harvest_below_threshold_rejected() {
    let server = start_node(node(Position {
        pending: U256::from(500_000_000_000_000u64),
        ..Position::default()
    }))
    .await;

    accrue_cmd_with_node(&server)
        .arg("harvest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("harvest minimum"));
}

#[tokio::test]
async fn test_faucet_rejected_during_cooldown() {
    let server = start_node(node(Position {
        last_faucet: now() - 60,
        ..Position::default()
    }))
    .await;

    accrue_cmd_with_node(&server)
        .arg("faucet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Faucet cooldown active"));
}

#[tokio::test]
async fn test_dashboard_shows_faucet_cooldown() {
    let server = start_node(node(Position {
        last_faucet: now() - 60,
        ..Position::default()
    }))
    .await;

    accrue_cmd_with_node(&server)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooldown:"));
}

#[tokio::test]
async fn test_set_target_requires_principal() {
    let server = start_node(node(Position {
        principal: U256::ZERO,
        ..Position::default()
    }))
    .await;

    accrue_cmd_with_node(&server)
        .args(["set-target", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deposit mETH first"));
}

#[tokio::test]
async fn test_set_target_unknown_asset() {
    let server = start_node(node(Position::default())).await;

    accrue_cmd_with_node(&server)
        .args(["set-target", "gold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target asset: gold"));
}

#[tokio::test]
async fn test_mock_yield_requires_principal() {
    let server = start_node(node(Position {
        principal: U256::ZERO,
        ..Position::default()
    }))
    .await;

    accrue_cmd_with_node(&server)
        .arg("mock-yield")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deposit mETH first"));
}

#[tokio::test]
async fn test_deposit_sends_approve_then_deposit() {
    let mock = node(Position::default());
    let sent = mock.sent();
    let server = start_node(mock).await;

    accrue_cmd_with_node(&server)
        .args(["deposit", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction confirmed!"))
        .stdout(predicate::str::contains("Block:     42"))
        .stdout(predicate::str::contains("Gas Used:  50,000"));

    let approve = IERC20::approveCall::SELECTOR;
    let deposit = IYieldVault::depositCall::SELECTOR;
    assert_eq!(sent.selectors(&[approve, deposit]), vec![approve, deposit]);
}

#[tokio::test]
async fn test_reverted_harvest_fails() {
    let server = start_node(node(Position::default()).reverting_transactions()).await;

    accrue_cmd_with_node(&server)
        .arg("harvest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction reverted"));
}

#[test]
fn test_stats_unreachable_node_is_connection_error() {
    accrue_cmd()
        .env("ACCRUE_RPC_URL", "http://127.0.0.1:1")
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC connection failed"));
}
