//! Provider construction for contract clients.
//!
//! Both read-only and signing clients share one erased provider type so the
//! view helpers in [`crate::reader`] work the same for either.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::error::{ContractError, Result};

/// The concrete provider type used by contract clients.
pub type HttpProvider = DynProvider;

fn parse_rpc_url(rpc_url: &str) -> Result<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))
}

/// Build a provider without a wallet, for view calls only.
pub fn read_provider(rpc_url: &str) -> Result<HttpProvider> {
    let url = parse_rpc_url(rpc_url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Build a provider that signs with `private_key`.
///
/// Returns the provider together with the signer's address.
pub fn signer_provider(rpc_url: &str, private_key: &str) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::InvalidPrivateKey)?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url = parse_rpc_url(rpc_url)?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

    Ok((provider, signer_address))
}
