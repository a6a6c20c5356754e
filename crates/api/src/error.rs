//! Error types for the Accrue client.

use accrue_contracts::ContractError;
use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur when using the Accrue client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the contract layer (RPC, submission, revert).
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// A write was requested but no signing key is configured.
    #[error("Wallet not connected: configure a private key to send transactions")]
    WalletNotConnected,

    /// The amount could not be parsed or is not positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Pending yield is below the harvest minimum.
    #[error("Pending yield {pending} wei is below the 0.001 mETH harvest minimum")]
    HarvestBelowThreshold { pending: U256 },

    /// The action requires deposited principal.
    #[error("Deposit mETH first")]
    DepositRequired,

    /// No target asset matches the given id or name.
    #[error("Unknown target asset: {0}")]
    UnknownAsset(String),

    /// The faucet is still cooling down.
    #[error("Faucet cooldown active: {remaining}s remaining")]
    FaucetCooldown { remaining: u64 },

    /// Another transaction is already in flight.
    #[error("A transaction is already pending")]
    TransactionPending,
}

/// High-level classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration or network reachability.
    Connection,
    /// Rejected locally before anything was sent.
    Validation,
    /// Sent (or attempted) and failed on chain or at the node.
    Transaction,
}

impl ApiError {
    /// Classify the error.
    pub fn error_category(&self) -> ErrorCategory {
        match self {
            ApiError::Contract(ContractError::RpcConnection(_))
            | ApiError::Contract(ContractError::InvalidPrivateKey)
            | ApiError::Contract(ContractError::UnsupportedChain(_))
            | ApiError::WalletNotConnected => ErrorCategory::Connection,
            ApiError::Contract(ContractError::InsufficientBalance { .. })
            | ApiError::InvalidAmount(_)
            | ApiError::HarvestBelowThreshold { .. }
            | ApiError::DepositRequired
            | ApiError::UnknownAsset(_)
            | ApiError::FaucetCooldown { .. }
            | ApiError::TransactionPending => ErrorCategory::Validation,
            ApiError::Contract(_) => ErrorCategory::Transaction,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
