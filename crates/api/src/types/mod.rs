//! Type definitions for the Accrue client.

pub mod amount;
pub mod asset;
pub mod chain;
pub mod dashboard;
pub mod faucet;

pub use amount::{format_meth, format_meth_fixed, parse_meth, HARVEST_THRESHOLD, METH_DECIMALS};
pub use asset::{find_target_asset, target_asset, TargetAsset, DEFAULT_TARGET_ASSET, TARGET_ASSETS};
pub use chain::{chain_from_id, chain_label, NamedChain};
pub use dashboard::{
    DashboardSnapshot, DashboardView, ProtocolStats, RwaHolding, WalletBalances, YieldProgress,
};
pub use faucet::{unix_now, FaucetState};
