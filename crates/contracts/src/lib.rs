//! Contract bindings and transaction clients for the Accrue yield vault.
//!
//! This crate provides Solidity bindings for the three Accrue contracts
//! (mETH token, RWA token, yield vault), the static deployment registry, and
//! clients for reading state and sending transactions on Mantle Sepolia.
//!
//! # Example
//!
//! ```no_run
//! use accrue_contracts::{AccrueReader, AccrueTransactionClient};
//! use alloy::primitives::U256;
//!
//! #[tokio::main]
//! async fn main() -> accrue_contracts::Result<()> {
//!     let client = AccrueTransactionClient::new(
//!         "https://rpc.sepolia.mantle.xyz",
//!         "0x...", // private key
//!     )?;
//!
//!     let balance = client.meth_balance(client.signer_address()).await?;
//!     if let Some(approval) = client.approve_if_needed(balance, U256::MAX).await? {
//!         approval.send().await?;
//!     }
//!     client.deposit(balance).send().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod addresses;
pub mod erc20;
pub mod error;
pub mod meth;
pub mod prepared_call;
pub mod provider;
pub mod read_client;
pub mod reader;
pub mod rwa_token;
pub mod tx_client;
pub mod yield_vault;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_util;

pub use addresses::{
    contract_addresses, ContractAddresses, MANTLE_SEPOLIA, MANTLE_SEPOLIA_CHAIN_ID,
    MANTLE_SEPOLIA_RPC_URL,
};
pub use error::{ContractError, Result};
pub use prepared_call::PreparedCall;
pub use provider::HttpProvider;
pub use read_client::AccrueReadClient;
pub use reader::{AccrueReader, ProtocolTotals, UserDashboard};
pub use tx_client::AccrueTransactionClient;
