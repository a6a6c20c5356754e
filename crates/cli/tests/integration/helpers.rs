//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use wiremock::MockServer;

use accrue_contracts::test_util::RpcMock;

// Anvil's default account 0
pub const PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Create a CLI command with no wallet and the default RPC (for validation tests).
pub fn accrue_cmd() -> Command {
    let mut cmd = Command::cargo_bin("accrue").unwrap();
    cmd.env_remove("PRIVATE_KEY")
        .env_remove("ACCRUE_RPC_URL")
        .env("NO_COLOR", "1");
    cmd
}

/// Create a CLI command with a wallet, pointing at a mock node.
pub fn accrue_cmd_with_node(server: &MockServer) -> Command {
    let mut cmd = accrue_cmd();
    cmd.env("ACCRUE_RPC_URL", server.uri())
        .env("PRIVATE_KEY", PRIVATE_KEY);
    cmd
}

/// Start a mock node answering from `mock`.
pub async fn start_node(mock: RpcMock) -> MockServer {
    mock.start().await
}
