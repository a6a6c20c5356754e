//! The seam between the dashboard controller and the chain.

#![allow(async_fn_in_trait)]

use alloy_primitives::U256;

use crate::error::Result;
use crate::status::{StatusTracker, TxSummary};
use crate::types::DashboardSnapshot;

/// Reads and writes the dashboard needs.
///
/// Write methods report `Confirming` on `status` once the node accepted the
/// transaction and return after it is mined.
pub trait AccrueBackend {
    /// Read everything the dashboard shows for the connected account.
    async fn snapshot(&self) -> Result<DashboardSnapshot>;

    /// Make sure the vault may pull `amount` mETH. Returns `None` when no
    /// approval transaction was needed.
    async fn approve_for_deposit(
        &self,
        amount: U256,
        status: &StatusTracker,
    ) -> Result<Option<TxSummary>>;

    async fn deposit(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary>;

    async fn harvest(&self, status: &StatusTracker) -> Result<TxSummary>;

    async fn set_target_asset(&self, asset_id: u64, status: &StatusTracker) -> Result<TxSummary>;

    async fn mock_yield(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary>;

    async fn faucet(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary>;
}
