//! Integration tests for the Accrue CLI.
//!
//! These tests run the `accrue` binary end to end. Commands that read chain
//! state point `ACCRUE_RPC_URL` at a wiremock JSON-RPC node.
//!
//! # Test Categories
//!
//! - **CLI validation tests**: argument parsing, help text, errors raised before any RPC
//! - **Dashboard tests**: dashboard, stats, portfolio and action preconditions against a mocked node
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p accrue-cli --test integration
//! ```

mod integration {
    pub mod cli_validation_tests;
    pub mod dashboard_tests;
    pub mod helpers;
}
