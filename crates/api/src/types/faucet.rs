//! Faucet cooldown state.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Faucet eligibility derived from the last claim time and the cooldown.
///
/// All values are unix seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetState {
    /// Time of the last claim, 0 if the account never claimed.
    pub last_claim: u64,
    /// Cooldown length.
    pub cooldown: u64,
    /// Time the state was computed at.
    pub now: u64,
}

impl FaucetState {
    /// Build from on-chain values.
    pub fn from_chain(last_claim: U256, cooldown: U256, now: u64) -> Self {
        Self {
            last_claim: last_claim.saturating_to(),
            cooldown: cooldown.saturating_to(),
            now,
        }
    }

    /// Seconds until the faucet can be used again.
    pub fn cooldown_remaining(&self) -> u64 {
        if self.last_claim == 0 {
            return 0;
        }
        self.last_claim
            .saturating_add(self.cooldown)
            .saturating_sub(self.now)
    }

    /// Whether a claim is allowed now.
    pub fn can_use(&self) -> bool {
        self.cooldown_remaining() == 0
    }

    /// Remaining cooldown as `"{m}m {s}s"`.
    pub fn cooldown_label(&self) -> String {
        let remaining = self.cooldown_remaining();
        format!("{}m {}s", remaining / 60, remaining % 60)
    }
}

/// Current unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
