//! Error types for the contracts crate.

use alloy_primitives::{B256, U256};
use thiserror::Error;

/// Errors that can occur when using contract clients.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// A view call or transaction submission failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The transaction was mined but reverted.
    #[error("Transaction reverted: {tx_hash:#x}")]
    Reverted { tx_hash: B256 },

    /// The signer holds less mETH than the deposit needs.
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: U256, need: U256 },

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// No contract deployment is registered for the chain.
    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),
}

impl ContractError {
    /// The error detail without the variant's own prefix.
    pub fn message(&self) -> String {
        match self {
            ContractError::RpcConnection(message) | ContractError::TransactionFailed(message) => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
