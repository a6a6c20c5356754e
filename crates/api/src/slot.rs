//! The wallet's pending-transaction slot.

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{ApiError, Result};

/// Allows at most one transaction in flight. A second submission fails
/// immediately instead of queueing.
#[derive(Debug, Default)]
pub struct PendingSlot {
    inner: Mutex<()>,
}

/// Held while a transaction is in flight; releases the slot on drop.
pub type SlotGuard<'a> = MutexGuard<'a, ()>;

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, or fail with [`ApiError::TransactionPending`].
    pub fn try_acquire(&self) -> Result<SlotGuard<'_>> {
        self.inner
            .try_lock()
            .map_err(|_| ApiError::TransactionPending)
    }

    /// Whether a transaction currently holds the slot.
    pub fn is_taken(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}
