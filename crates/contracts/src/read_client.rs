//! Read-only client for the Accrue contracts.

use crate::addresses::{contract_addresses, ContractAddresses, MANTLE_SEPOLIA_CHAIN_ID};
use crate::error::Result;
use crate::provider::{read_provider, HttpProvider};
use crate::reader::AccrueReader;

/// Client for view calls. Needs no key.
pub struct AccrueReadClient {
    provider: HttpProvider,
    addresses: ContractAddresses,
}

impl AccrueReadClient {
    /// Create a read client for the Mantle Sepolia deployment.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Self::for_chain(rpc_url, MANTLE_SEPOLIA_CHAIN_ID)
    }

    /// Create a read client for the deployment registered under `chain_id`.
    pub fn for_chain(rpc_url: &str, chain_id: u64) -> Result<Self> {
        let addresses = contract_addresses(chain_id)?;
        let provider = read_provider(rpc_url)?;
        Ok(Self {
            provider,
            addresses,
        })
    }
}

impl AccrueReader for AccrueReadClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    fn addresses(&self) -> &ContractAddresses {
        &self.addresses
    }
}
