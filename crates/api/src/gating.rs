//! Preconditions for each action.
//!
//! These mirror which dashboard controls are enabled: an action whose check
//! fails is never sent.

use alloy_primitives::U256;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::types::{
    find_target_asset, parse_meth, DashboardSnapshot, DashboardView, FaucetState, TargetAsset,
};

/// Validate a deposit amount. An empty amount is a no-op and yields `None`.
pub fn deposit_amount(amount: &str) -> Result<Option<U256>> {
    if amount.trim().is_empty() {
        return Ok(None);
    }
    let value = parse_meth(amount)?;
    if value.is_zero() {
        return Err(ApiError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(Some(value))
}

/// Parse a positive amount for mock yield or the faucet.
pub fn positive_amount(amount: &str) -> Result<U256> {
    deposit_amount(amount)?
        .ok_or_else(|| ApiError::InvalidAmount("amount is empty".to_string()))
}

/// Harvest needs at least the minimum pending yield.
pub fn check_harvest(view: &DashboardView) -> Result<()> {
    if view.can_harvest() {
        Ok(())
    } else {
        Err(ApiError::HarvestBelowThreshold {
            pending: view.pending_yield,
        })
    }
}

/// Mock yield needs deposited principal.
pub fn check_mock_yield(view: &DashboardView) -> Result<()> {
    if view.has_principal() {
        Ok(())
    } else {
        Err(ApiError::DepositRequired)
    }
}

/// Changing the target needs principal and a catalog asset.
pub fn check_set_target(view: &DashboardView, query: &str) -> Result<&'static TargetAsset> {
    let asset =
        find_target_asset(query).ok_or_else(|| ApiError::UnknownAsset(query.to_string()))?;
    if !view.has_principal() {
        return Err(ApiError::DepositRequired);
    }
    Ok(asset)
}

/// The faucet is closed during its cooldown.
pub fn check_faucet(state: &FaucetState) -> Result<()> {
    if state.can_use() {
        Ok(())
    } else {
        Err(ApiError::FaucetCooldown {
            remaining: state.cooldown_remaining(),
        })
    }
}

/// Which controls are enabled for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub deposit: bool,
    pub harvest: bool,
    pub mock_yield: bool,
    pub set_target: bool,
    pub faucet: bool,
}

impl Availability {
    /// Evaluate every precondition; everything is disabled while `busy`.
    pub fn evaluate(snapshot: &DashboardSnapshot, busy: bool) -> Self {
        let view = &snapshot.dashboard;
        Self {
            deposit: !busy,
            harvest: !busy && check_harvest(view).is_ok(),
            mock_yield: !busy && check_mock_yield(view).is_ok(),
            set_target: !busy && view.has_principal(),
            faucet: !busy && check_faucet(&snapshot.faucet).is_ok(),
        }
    }
}
