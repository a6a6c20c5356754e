//! Transaction client for the Accrue contracts.

use alloy::primitives::{Address, U256};

use crate::addresses::{contract_addresses, ContractAddresses, MANTLE_SEPOLIA_CHAIN_ID};
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::meth::IMETH;
use crate::prepared_call::PreparedCall;
use crate::provider::{signer_provider, HttpProvider};
use crate::reader::AccrueReader;
use crate::yield_vault::IYieldVault;

/// Client for executing transactions against the Accrue contracts.
///
/// Write methods return a [`PreparedCall`]; nothing is sent until the caller
/// invokes `send()`.
pub struct AccrueTransactionClient {
    provider: HttpProvider,
    signer_address: Address,
    addresses: ContractAddresses,
}

impl AccrueTransactionClient {
    /// Create a transaction client for the Mantle Sepolia deployment.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        Self::for_chain(rpc_url, private_key, MANTLE_SEPOLIA_CHAIN_ID)
    }

    /// Create a transaction client for the deployment registered under `chain_id`.
    pub fn for_chain(rpc_url: &str, private_key: &str, chain_id: u64) -> Result<Self> {
        let addresses = contract_addresses(chain_id)?;
        let (provider, signer_address) = signer_provider(rpc_url, private_key)?;
        Ok(Self {
            provider,
            signer_address,
            addresses,
        })
    }

    /// Get the signer's address.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Approve the vault to pull `amount` mETH from the signer.
    pub fn approve(&self, amount: U256) -> PreparedCall<'_, IERC20::approveCall> {
        let call = IERC20::approveCall {
            spender: self.addresses.yield_vault,
            amount,
        };
        PreparedCall::new(self.addresses.meth, call, U256::ZERO, &self.provider)
    }

    /// Approve the vault for `approval` if the current allowance is below `required`.
    /// Returns `None` when the allowance already covers it.
    pub async fn approve_if_needed(
        &self,
        required: U256,
        approval: U256,
    ) -> Result<Option<PreparedCall<'_, IERC20::approveCall>>> {
        let current_allowance = self.vault_allowance(self.signer_address).await?;

        if current_allowance >= required {
            return Ok(None);
        }

        Ok(Some(self.approve(approval)))
    }

    /// Fail with [`ContractError::InsufficientBalance`] when the signer holds
    /// less than `amount` mETH.
    pub async fn ensure_meth_balance(&self, amount: U256) -> Result<()> {
        let have = self.meth_balance(self.signer_address).await?;
        if have < amount {
            return Err(ContractError::InsufficientBalance { have, need: amount });
        }
        Ok(())
    }

    /// Deposit mETH principal into the vault.
    pub fn deposit(&self, amount: U256) -> PreparedCall<'_, IYieldVault::depositCall> {
        let call = IYieldVault::depositCall { amount };
        PreparedCall::new(self.addresses.yield_vault, call, U256::ZERO, &self.provider)
    }

    /// Harvest pending yield and buy the target RWA with it.
    pub fn harvest(&self) -> PreparedCall<'_, IYieldVault::harvestAndBuyRWACall> {
        PreparedCall::new(
            self.addresses.yield_vault,
            IYieldVault::harvestAndBuyRWACall {},
            U256::ZERO,
            &self.provider,
        )
    }

    /// Select which RWA future harvests buy.
    pub fn set_target_asset(
        &self,
        asset_id: u64,
    ) -> PreparedCall<'_, IYieldVault::setTargetAssetCall> {
        let call = IYieldVault::setTargetAssetCall {
            assetId: U256::from(asset_id),
        };
        PreparedCall::new(self.addresses.yield_vault, call, U256::ZERO, &self.provider)
    }

    /// Credit simulated yield to the signer (testnet only).
    pub fn mock_yield(&self, amount: U256) -> PreparedCall<'_, IYieldVault::mockYieldCall> {
        let call = IYieldVault::mockYieldCall { amount };
        PreparedCall::new(self.addresses.yield_vault, call, U256::ZERO, &self.provider)
    }

    /// Claim test mETH from the faucet.
    pub fn faucet(&self, amount: U256) -> PreparedCall<'_, IMETH::faucetCall> {
        let call = IMETH::faucetCall { amount };
        PreparedCall::new(self.addresses.meth, call, U256::ZERO, &self.provider)
    }
}

impl AccrueReader for AccrueTransactionClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }
}
