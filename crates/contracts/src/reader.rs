//! Shared view-call trait for Accrue clients.
//!
//! Every read the dashboard needs is a default method here. Implementors
//! only provide the provider and the deployment addresses.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::transports::TransportError;

use crate::addresses::ContractAddresses;
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::meth::IMETH;
use crate::provider::HttpProvider;
use crate::rwa_token::IRWAToken;
use crate::yield_vault::IYieldVault;

/// Per-user vault position as returned by `getUserDashboard`.
pub type UserDashboard = IYieldVault::getUserDashboardReturn;

/// Protocol aggregates as returned by `getProtocolStats`.
pub type ProtocolTotals = IYieldVault::getProtocolStatsReturn;

/// A JSON-RPC error response (a revert) is a failed call. Any other transport
/// error is a connection failure.
fn transport_error(what: &str, e: TransportError) -> ContractError {
    if e.is_error_resp() {
        ContractError::TransactionFailed(format!("{} call failed: {}", what, e))
    } else {
        ContractError::RpcConnection(format!("{}: {}", what, e))
    }
}

fn view_error(what: &str, e: alloy::contract::Error) -> ContractError {
    match e {
        alloy::contract::Error::TransportError(e) => transport_error(what, e),
        other => ContractError::TransactionFailed(format!("{} call failed: {}", what, other)),
    }
}

/// View functions over the Accrue contracts.
pub trait AccrueReader {
    /// Returns a reference to the HTTP provider.
    fn provider(&self) -> &HttpProvider;

    /// Returns the deployment this client talks to.
    fn addresses(&self) -> &ContractAddresses;

    /// Native (MNT) balance of an account.
    async fn native_balance(&self, account: Address) -> Result<U256> {
        self.provider()
            .get_balance(account)
            .await
            .map_err(|e| transport_error("native balance", e))
    }

    /// mETH balance of an account.
    async fn meth_balance(&self, account: Address) -> Result<U256> {
        let contract = IERC20::new(self.addresses().meth, self.provider());
        contract
            .balanceOf(account)
            .call()
            .await
            .map_err(|e| view_error("mETH balance", e))
    }

    /// How much mETH the vault may pull from `owner`.
    async fn vault_allowance(&self, owner: Address) -> Result<U256> {
        let addresses = self.addresses();
        let contract = IERC20::new(addresses.meth, self.provider());
        contract
            .allowance(owner, addresses.yield_vault)
            .call()
            .await
            .map_err(|e| view_error("allowance", e))
    }

    /// Principal, pending yield, harvest totals and target asset of a user.
    async fn user_dashboard(&self, user: Address) -> Result<UserDashboard> {
        let contract = IYieldVault::new(self.addresses().yield_vault, self.provider());
        contract
            .getUserDashboard(user)
            .call()
            .await
            .map_err(|e| view_error("user dashboard", e))
    }

    /// Progress toward the next RWA purchase, in percent.
    async fn yield_progress(&self, user: Address) -> Result<U256> {
        let contract = IYieldVault::new(self.addresses().yield_vault, self.provider());
        contract
            .getYieldProgress(user)
            .call()
            .await
            .map_err(|e| view_error("yield progress", e))
    }

    /// Protocol-wide totals.
    async fn protocol_totals(&self) -> Result<ProtocolTotals> {
        let contract = IYieldVault::new(self.addresses().yield_vault, self.provider());
        contract
            .getProtocolStats()
            .call()
            .await
            .map_err(|e| view_error("protocol stats", e))
    }

    /// Unix timestamp of the account's last faucet claim (0 if never).
    async fn last_faucet_time(&self, account: Address) -> Result<U256> {
        let contract = IMETH::new(self.addresses().meth, self.provider());
        contract
            .lastFaucetTime(account)
            .call()
            .await
            .map_err(|e| view_error("last faucet time", e))
    }

    /// Faucet cooldown in seconds.
    async fn faucet_cooldown(&self) -> Result<U256> {
        let contract = IMETH::new(self.addresses().meth, self.provider());
        contract
            .FAUCET_COOLDOWN()
            .call()
            .await
            .map_err(|e| view_error("faucet cooldown", e))
    }

    /// RWA token balance of an account for one asset id.
    async fn rwa_balance(&self, account: Address, asset_id: u64) -> Result<U256> {
        let contract = IRWAToken::new(self.addresses().rwa_token, self.provider());
        contract
            .balanceOf(account, U256::from(asset_id))
            .call()
            .await
            .map_err(|e| view_error("RWA balance", e))
    }
}
