//! Dashboard controller.
//!
//! Runs the user actions against an [`AccrueBackend`]: checks the action's
//! preconditions, holds the pending-transaction slot, publishes status,
//! notifies, and refetches once the transaction is confirmed.

use std::future::Future;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::backend::AccrueBackend;
use crate::error::{ApiError, Result};
use crate::gating::{self, Availability};
use crate::notify::{transaction_failed_message, Notifier};
use crate::slot::PendingSlot;
use crate::status::{Action, StatusTracker, TxSummary};
use crate::types::{format_meth, DashboardSnapshot};

/// Amount credited by the "simulate yield" control.
pub const DEFAULT_MOCK_YIELD: &str = "0.01";

/// Amount requested from the faucet.
pub const DEFAULT_FAUCET_AMOUNT: &str = "10";

struct Toasts {
    key: &'static str,
    loading: &'static str,
    failure: &'static str,
}

const DEPOSIT: Toasts = Toasts {
    key: "deposit",
    loading: "Approving mETH...",
    failure: "Deposit failed",
};

const HARVEST: Toasts = Toasts {
    key: "harvest",
    loading: "Harvesting yield...",
    failure: "Harvest failed",
};

const SET_TARGET: Toasts = Toasts {
    key: "target",
    loading: "Changing target asset...",
    failure: "Failed to change target",
};

const MOCK_YIELD: Toasts = Toasts {
    key: "mock",
    loading: "Simulating yield...",
    failure: "Mock yield failed",
};

const FAUCET: Toasts = Toasts {
    key: "faucet",
    loading: "Getting test mETH...",
    failure: "Faucet failed",
};

fn success_message(label: &str) -> String {
    format!("{} successful! 🎉", label)
}

/// The dashboard's action handlers and cached snapshot.
pub struct Dashboard<B, N> {
    backend: B,
    notifier: N,
    status: StatusTracker,
    slot: PendingSlot,
    snapshot: RwLock<Option<Cached>>,
}

/// A snapshot and the moment it was read.
struct Cached {
    snapshot: DashboardSnapshot,
    fetched_at: Instant,
}

impl Cached {
    /// The snapshot with its faucet clock moved to now.
    fn aged(&self) -> DashboardSnapshot {
        let mut snapshot = self.snapshot.clone();
        snapshot.faucet.now = snapshot
            .faucet
            .now
            .saturating_add(self.fetched_at.elapsed().as_secs());
        snapshot
    }
}

impl<B: AccrueBackend, N: Notifier> Dashboard<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend,
            notifier,
            status: StatusTracker::new(),
            slot: PendingSlot::new(),
            snapshot: RwLock::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Transaction status of the current or last action.
    pub fn status(&self) -> &StatusTracker {
        &self.status
    }

    /// Re-read everything and replace the cached snapshot.
    pub async fn refetch(&self) -> Result<DashboardSnapshot> {
        let fresh = self.backend.snapshot().await?;
        *self.snapshot.write().await = Some(Cached {
            snapshot: fresh.clone(),
            fetched_at: Instant::now(),
        });
        Ok(fresh)
    }

    /// The cached snapshot, fetching it on first use.
    ///
    /// Time-dependent state (the faucet cooldown) is aged by the time spent
    /// in the cache.
    pub async fn current(&self) -> Result<DashboardSnapshot> {
        if let Some(cached) = self.snapshot.read().await.as_ref() {
            return Ok(cached.aged());
        }
        self.refetch().await
    }

    /// Which controls are enabled right now.
    pub async fn availability(&self) -> Result<Availability> {
        let snapshot = self.current().await?;
        let busy = self.slot.is_taken() || self.status.current().is_busy();
        Ok(Availability::evaluate(&snapshot, busy))
    }

    /// Approve then deposit `amount` mETH.
    ///
    /// An empty amount does nothing and returns `Ok(None)`.
    pub async fn deposit(&self, amount: &str) -> Result<Option<TxSummary>> {
        let value = match gating::deposit_amount(amount)? {
            Some(value) => value,
            None => return Ok(None),
        };

        let work = async {
            self.status.awaiting_signature(Action::Approve);
            self.backend
                .approve_for_deposit(value, &self.status)
                .await?;

            self.notifier.loading(DEPOSIT.key, "Depositing mETH...");
            self.status.awaiting_signature(Action::Deposit);
            self.backend.deposit(value, &self.status).await
        };

        let summary = self
            .execute(Action::Deposit, &DEPOSIT, success_message("Deposit"), work)
            .await?;
        Ok(Some(summary))
    }

    /// Deposit the whole mETH balance (or 10 when it is unknown).
    pub async fn deposit_max(&self) -> Result<Option<TxSummary>> {
        let amount = self.current().await?.balances.max_deposit();
        self.deposit(&amount).await
    }

    /// Harvest pending yield into the target RWA.
    pub async fn harvest(&self) -> Result<TxSummary> {
        let snapshot = self.current().await?;
        gating::check_harvest(&snapshot.dashboard)?;

        let work = async {
            self.status.awaiting_signature(Action::Harvest);
            self.backend.harvest(&self.status).await
        };
        self.execute(
            Action::Harvest,
            &HARVEST,
            success_message("Harvest & Buy RWA"),
            work,
        )
        .await
    }

    /// Change the target asset, by id or name.
    pub async fn set_target_asset(&self, asset: &str) -> Result<TxSummary> {
        let snapshot = self.current().await?;
        let target = gating::check_set_target(&snapshot.dashboard, asset)?;

        let work = async {
            self.status.awaiting_signature(Action::SetTarget);
            self.backend
                .set_target_asset(target.id, &self.status)
                .await
        };
        self.execute(
            Action::SetTarget,
            &SET_TARGET,
            success_message(&format!("Target changed to {}", target.name)),
            work,
        )
        .await
    }

    /// Credit simulated yield (testnet).
    pub async fn mock_yield(&self, amount: &str) -> Result<TxSummary> {
        let value = gating::positive_amount(amount)?;
        let snapshot = self.current().await?;
        gating::check_mock_yield(&snapshot.dashboard)?;

        let work = async {
            self.status.awaiting_signature(Action::MockYield);
            self.backend.mock_yield(value, &self.status).await
        };
        self.execute(
            Action::MockYield,
            &MOCK_YIELD,
            success_message("Yield simulated"),
            work,
        )
        .await
    }

    /// Claim test mETH from the faucet.
    pub async fn faucet(&self, amount: &str) -> Result<TxSummary> {
        let value = gating::positive_amount(amount)?;
        let snapshot = self.current().await?;
        gating::check_faucet(&snapshot.faucet)?;

        let work = async {
            self.status.awaiting_signature(Action::Faucet);
            self.backend.faucet(value, &self.status).await
        };
        let success = format!("Got {} test mETH! 🚰", trim_zeros(&format_meth(value)));
        self.execute(Action::Faucet, &FAUCET, success, work).await
    }

    /// Hold the slot for the duration of `work` and report its outcome.
    async fn execute<T, F>(
        &self,
        action: Action,
        toasts: &Toasts,
        success: String,
        work: F,
    ) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _slot = self.slot.try_acquire()?;
        tracing::debug!(action = action.name(), "starting action");
        self.notifier.loading(toasts.key, toasts.loading);

        match work.await {
            Ok(value) => {
                self.notifier.dismiss(toasts.key);
                self.status.confirmed(action);
                self.notifier.success(&success);
                tracing::info!(action = action.name(), "action confirmed");

                if let Err(e) = self.refetch().await {
                    tracing::warn!(action = action.name(), error = %e, "refetch failed");
                }
                Ok(value)
            }
            Err(error) => {
                self.notifier.dismiss(toasts.key);
                self.status.failed(action, error.to_string());
                tracing::error!(action = action.name(), error = %error, "action failed");

                self.notifier.error(toasts.failure);
                if let ApiError::Contract(contract) = &error {
                    self.notifier
                        .error(&transaction_failed_message(&contract.message()));
                }
                Err(error)
            }
        }
    }
}

/// `"10.000000000000000000"` → `"10"`, `"0.010"` → `"0.01"`.
fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
