//! Read models assembled from contract reads.
//!
//! None of these are persisted; they are recomputed on every refetch.

use accrue_contracts::{ProtocolTotals, UserDashboard};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::amount::{format_meth, HARVEST_THRESHOLD};
use super::asset::{target_asset, TargetAsset, DEFAULT_TARGET_ASSET};
use super::faucet::FaucetState;

/// A user's position in the vault. All amounts are mETH wei.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Deposited principal.
    pub principal: U256,
    /// Yield accrued since the last harvest.
    pub pending_yield: U256,
    /// Yield harvested over the position's lifetime.
    pub total_harvested: U256,
    /// Value of RWA bought with harvested yield.
    pub rwa_value: U256,
    /// RWA token id that harvests buy.
    pub target_asset_id: u64,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            principal: U256::ZERO,
            pending_yield: U256::ZERO,
            total_harvested: U256::ZERO,
            rwa_value: U256::ZERO,
            target_asset_id: DEFAULT_TARGET_ASSET.id,
        }
    }
}

impl From<UserDashboard> for DashboardView {
    fn from(d: UserDashboard) -> Self {
        Self {
            principal: d.principal,
            pending_yield: d.pendingYield,
            total_harvested: d.totalHarvested,
            rwa_value: d.rwaValue,
            target_asset_id: d.targetAssetId.saturating_to(),
        }
    }
}

impl DashboardView {
    /// The selected target asset, falling back to the first catalog entry.
    pub fn target_asset(&self) -> &'static TargetAsset {
        target_asset(self.target_asset_id).unwrap_or(&DEFAULT_TARGET_ASSET)
    }

    /// Whether any principal is deposited.
    pub fn has_principal(&self) -> bool {
        !self.principal.is_zero()
    }

    /// Whether pending yield reaches the harvest minimum.
    pub fn can_harvest(&self) -> bool {
        self.pending_yield >= HARVEST_THRESHOLD
    }

    /// Some yield is pending but not enough to harvest.
    pub fn below_harvest_minimum(&self) -> bool {
        !self.pending_yield.is_zero() && !self.can_harvest()
    }
}

/// Progress toward the next RWA purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldProgress {
    /// 0 to 100.
    pub progress_percent: u8,
}

impl From<U256> for YieldProgress {
    fn from(percent: U256) -> Self {
        let clamped: u64 = percent.saturating_to::<u64>().min(100);
        Self {
            progress_percent: clamped as u8,
        }
    }
}

/// Protocol-wide aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolStats {
    /// Total value locked, mETH wei.
    pub total_deposits: U256,
    /// Number of depositors.
    pub total_users: u64,
    /// Yield harvested across all users, mETH wei.
    pub protocol_yield: U256,
    /// RWA bought across all users, mETH wei.
    pub rwa_value: U256,
}

impl From<ProtocolTotals> for ProtocolStats {
    fn from(t: ProtocolTotals) -> Self {
        Self {
            total_deposits: t.totalDeposits,
            total_users: t.totalUsers.saturating_to(),
            protocol_yield: t.protocolYield,
            rwa_value: t.rwaValue,
        }
    }
}

/// Wallet balances. `None` means the read failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalances {
    /// Native MNT, wei.
    pub native: Option<U256>,
    /// mETH, wei.
    pub meth: Option<U256>,
}

impl WalletBalances {
    /// Amount the deposit "MAX" shortcut fills in: the whole mETH balance,
    /// or `"10"` when the balance is unknown.
    pub fn max_deposit(&self) -> String {
        match self.meth {
            Some(balance) => format_meth(balance),
            None => "10".to_string(),
        }
    }
}

/// RWA token balance for one catalog asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RwaHolding {
    /// The asset.
    pub asset: TargetAsset,
    /// Token balance.
    pub balance: U256,
}

/// Everything the dashboard renders for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    /// Connected account.
    pub account: Address,
    /// Vault position.
    pub dashboard: DashboardView,
    /// Progress toward the next purchase.
    pub progress: YieldProgress,
    /// Protocol aggregates.
    pub stats: ProtocolStats,
    /// Wallet balances.
    pub balances: WalletBalances,
    /// Faucet eligibility.
    pub faucet: FaucetState,
    /// RWA holdings, one entry per catalog asset.
    pub holdings: Vec<RwaHolding>,
}

impl DashboardSnapshot {
    /// Snapshot with every panel at its fallback value.
    pub fn empty(account: Address) -> Self {
        Self {
            account,
            dashboard: DashboardView::default(),
            progress: YieldProgress::default(),
            stats: ProtocolStats::default(),
            balances: WalletBalances::default(),
            faucet: FaucetState::default(),
            holdings: Vec::new(),
        }
    }

    /// First eight characters of the account, as shown in the greeting.
    pub fn short_account(&self) -> String {
        let full = format!("{:#x}", self.account);
        full.chars().take(8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::amount::parse_meth;

    #[test]
    fn test_default_view_targets_first_asset() {
        let view = DashboardView::default();
        assert_eq!(view.target_asset_id, 1);
        assert_eq!(view.target_asset().name, "NYC Real Estate");
        assert!(!view.has_principal());
    }

    #[test]
    fn test_unknown_target_falls_back() {
        let view = DashboardView {
            target_asset_id: 42,
            ..DashboardView::default()
        };
        assert_eq!(view.target_asset().id, 1);
    }

    #[test]
    fn test_harvest_threshold_boundaries() {
        let mut view = DashboardView::default();
        assert!(!view.can_harvest());
        assert!(!view.below_harvest_minimum());

        view.pending_yield = parse_meth("0.0009").unwrap();
        assert!(!view.can_harvest());
        assert!(view.below_harvest_minimum());

        view.pending_yield = parse_meth("0.001").unwrap();
        assert!(view.can_harvest());
        assert!(!view.below_harvest_minimum());
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(YieldProgress::from(U256::from(37)).progress_percent, 37);
        assert_eq!(YieldProgress::from(U256::from(250)).progress_percent, 100);
    }

    #[test]
    fn test_max_deposit_fallback() {
        let unknown = WalletBalances::default();
        assert_eq!(unknown.max_deposit(), "10");

        let known = WalletBalances {
            native: None,
            meth: Some(parse_meth("3.5").unwrap()),
        };
        assert_eq!(known.max_deposit(), "3.500000000000000000");
    }

    #[test]
    fn test_short_account() {
        let snapshot = DashboardSnapshot::empty(Address::repeat_byte(0xab));
        assert_eq!(snapshot.short_account(), "0xababab");
    }
}
