//! Chain helpers for the Accrue deployment.
//!
//! The full `NamedChain` type is re-exported from `alloy_chains`.

pub use alloy_chains::NamedChain;

/// Try to create a NamedChain from a chain ID.
pub fn chain_from_id(id: u64) -> Option<NamedChain> {
    NamedChain::try_from(id).ok()
}

/// Network name for display, e.g. `mantle-sepolia`, or the bare id.
pub fn chain_label(id: u64) -> String {
    match chain_from_id(id) {
        Some(chain) => chain.to_string(),
        None => id.to_string(),
    }
}
