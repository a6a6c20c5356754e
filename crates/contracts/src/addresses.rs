//! Deployed contract addresses.
//!
//! Accrue is deployed on a single network, Mantle Sepolia (chain ID 5003).

use alloy::primitives::{address, Address};
use alloy_chains::NamedChain;

use crate::error::{ContractError, Result};

/// Chain ID of Mantle Sepolia.
pub const MANTLE_SEPOLIA_CHAIN_ID: u64 = 5003;

/// Public RPC endpoint for Mantle Sepolia.
pub const MANTLE_SEPOLIA_RPC_URL: &str = "https://rpc.sepolia.mantle.xyz";

/// Addresses of the three contracts the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    /// mETH test token (principal).
    pub meth: Address,
    /// RWA token, one token id per real-world asset.
    pub rwa_token: Address,
    /// Yield vault holding principal and routing yield.
    pub yield_vault: Address,
}

/// Mantle Sepolia deployment.
pub const MANTLE_SEPOLIA: ContractAddresses = ContractAddresses {
    meth: address!("B7Ab966115aF7d21E7Aa6e31A9AdfC92291092E0"),
    rwa_token: address!("a520c7Aa947f3B610d274377D261Eb5AcD70883F"),
    yield_vault: address!("9C70C2F67028e5464F5b60E29648240e358E83B6"),
};

/// Look up the deployment for a chain ID.
pub fn contract_addresses(chain_id: u64) -> Result<ContractAddresses> {
    match NamedChain::try_from(chain_id) {
        Ok(NamedChain::MantleSepolia) => Ok(MANTLE_SEPOLIA),
        _ => Err(ContractError::UnsupportedChain(chain_id)),
    }
}
