//! Transaction status tracking.
//!
//! Each write moves through `AwaitingSignature → Confirming → Confirmed`, or
//! ends in `Failed`. The current status is published on a `watch` channel so
//! a front end can relabel or disable its controls.

use alloy::rpc::types::TransactionReceipt;
use alloy_primitives::B256;
use serde::Serialize;
use tokio::sync::watch;

/// A user-facing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// mETH approval ahead of a deposit.
    Approve,
    Deposit,
    Harvest,
    SetTarget,
    MockYield,
    Faucet,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Approve => "approve",
            Action::Deposit => "deposit",
            Action::Harvest => "harvest",
            Action::SetTarget => "set-target",
            Action::MockYield => "mock-yield",
            Action::Faucet => "faucet",
        }
    }
}

/// Where the current (or last) transaction stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum TxStatus {
    #[default]
    Idle,
    /// Built and handed to the signer.
    AwaitingSignature(Action),
    /// Accepted by the node, waiting to be mined.
    Confirming { action: Action, tx_hash: B256 },
    Confirmed(Action),
    Failed { action: Action, message: String },
}

impl TxStatus {
    /// Whether a transaction is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            TxStatus::AwaitingSignature(_) | TxStatus::Confirming { .. }
        )
    }

    /// Label for the control that started the action, if it is in flight.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            TxStatus::AwaitingSignature(Action::Approve) => Some("Approving..."),
            TxStatus::AwaitingSignature(Action::Deposit) => Some("Depositing..."),
            TxStatus::AwaitingSignature(_) => Some("Processing..."),
            TxStatus::Confirming { .. } => Some("Confirming..."),
            _ => None,
        }
    }
}

/// Summary of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxSummary {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl From<&TransactionReceipt> for TxSummary {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}

/// Publishes [`TxStatus`] changes.
#[derive(Debug)]
pub struct StatusTracker {
    tx: watch::Sender<TxStatus>,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(TxStatus::Idle);
        Self { tx }
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.tx.subscribe()
    }

    /// The current status.
    pub fn current(&self) -> TxStatus {
        self.tx.borrow().clone()
    }

    pub fn awaiting_signature(&self, action: Action) {
        self.set(TxStatus::AwaitingSignature(action));
    }

    pub fn confirming(&self, action: Action, tx_hash: B256) {
        self.set(TxStatus::Confirming { action, tx_hash });
    }

    pub fn confirmed(&self, action: Action) {
        self.set(TxStatus::Confirmed(action));
    }

    pub fn failed(&self, action: Action, message: impl Into<String>) {
        self.set(TxStatus::Failed {
            action,
            message: message.into(),
        });
    }

    fn set(&self, status: TxStatus) {
        tracing::trace!(?status, "tx status");
        self.tx.send_replace(status);
    }
}
