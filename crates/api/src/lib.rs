//! Accrue client library
//!
//! This crate drives the Accrue yield-routing dashboard on Mantle Sepolia:
//! mETH deposited into the yield vault accrues yield, and harvesting that
//! yield buys the selected real-world asset.
//!
//! # Example
//!
//! ```no_run
//! use accrue_api::{AccrueClient, AccrueClientConfig, Dashboard, LogNotifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), accrue_api::ApiError> {
//!     let config = AccrueClientConfig::new().with_private_key("0x...");
//!     let dashboard = Dashboard::new(AccrueClient::with_config(config)?, LogNotifier);
//!
//!     // Approve and deposit 1.5 mETH, then harvest.
//!     dashboard.deposit("1.5").await?;
//!     dashboard.harvest().await?;
//!
//!     let snapshot = dashboard.refetch().await?;
//!     println!("target: {}", snapshot.dashboard.target_asset().name);
//!     Ok(())
//! }
//! ```
//!
//! # Actions
//!
//! Every write goes through [`Dashboard`], which checks the action's
//! preconditions (see [`gating`]), allows one transaction at a time,
//! publishes [`TxStatus`] changes and reports progress to a [`Notifier`].
//! A successful action refetches the [`DashboardSnapshot`].
//!
//! # Error Handling
//!
//! All errors are unified through [`ApiError`], which wraps
//! [`accrue_contracts::ContractError`]. Use [`ApiError::error_category()`]
//! for high-level classification.

pub mod backend;
pub mod client;
pub mod controller;
pub mod error;
pub mod gating;
pub mod notify;
pub mod slot;
pub mod status;
pub mod types;

pub use backend::AccrueBackend;
pub use client::{AccrueClient, AccrueClientConfig, Screen};
pub use controller::{Dashboard, DEFAULT_FAUCET_AMOUNT, DEFAULT_MOCK_YIELD};
pub use error::{ApiError, ErrorCategory, Result};
pub use gating::Availability;
pub use notify::{transaction_failed_message, LogNotifier, Notifier};
pub use slot::PendingSlot;
pub use status::{Action, StatusTracker, TxStatus, TxSummary};
pub use types::{
    chain_label, find_target_asset, format_meth, format_meth_fixed, parse_meth, target_asset,
    DashboardSnapshot, DashboardView, FaucetState, NamedChain, ProtocolStats, RwaHolding,
    TargetAsset, WalletBalances, YieldProgress, DEFAULT_TARGET_ASSET, HARVEST_THRESHOLD,
    TARGET_ASSETS,
};

// Re-export contract-layer types used in the public API.
pub use accrue_contracts::{
    ContractAddresses, ContractError, MANTLE_SEPOLIA_CHAIN_ID, MANTLE_SEPOLIA_RPC_URL,
};
