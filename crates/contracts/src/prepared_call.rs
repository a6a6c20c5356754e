//! Prepared call types for deferred transaction execution.
//!
//! A `PreparedCall` is a transaction that has been constructed but not yet
//! sent. It can be inspected (target, value, calldata), sent directly, or
//! sent while observing the moment the node accepts it.

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A prepared transaction that can be inspected or executed.
///
/// # Example
///
/// ```rust,ignore
/// let receipt = client.deposit(amount).send().await?;
///
/// let receipt = client
///     .harvest()
///     .send_with(|hash| println!("submitted {hash:#x}"))
///     .await?;
/// ```
pub struct PreparedCall<'a, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(to: Address, call: C, value: U256, provider: &'a HttpProvider) -> Self {
        Self {
            to,
            call,
            value,
            provider,
        }
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the native value to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Returns the ABI-encoded calldata.
    pub fn calldata(&self) -> Bytes {
        self.call.abi_encode().into()
    }

    /// Sends the transaction and waits for the receipt.
    pub async fn send(self) -> Result<TransactionReceipt> {
        self.send_with(|_| {}).await
    }

    /// Sends the transaction, calls `on_submitted` with the hash once the node
    /// accepted it, then waits for the receipt.
    ///
    /// A mined transaction with a failed status is reported as
    /// [`ContractError::Reverted`].
    pub async fn send_with<F>(self, on_submitted: F) -> Result<TransactionReceipt>
    where
        F: FnOnce(B256),
    {
        let tx = TransactionRequest::default()
            .to(self.to)
            .input(self.calldata().into())
            .value(self.value);

        let pending = self.provider.send_transaction(tx).await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to send transaction: {}", e))
        })?;

        let tx_hash = *pending.tx_hash();
        tracing::debug!(to = %self.to, tx_hash = %tx_hash, "transaction submitted");
        on_submitted(tx_hash);

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get receipt: {}", e))
        })?;

        if !receipt.status() {
            return Err(ContractError::Reverted { tx_hash });
        }

        tracing::debug!(
            tx_hash = %tx_hash,
            block = receipt.block_number.unwrap_or_default(),
            gas_used = receipt.gas_used,
            "transaction confirmed"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::signer_provider;
    use crate::yield_vault::IYieldVault;

    // Anvil's default account 0 private key
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn create_test_provider() -> HttpProvider {
        let (provider, _) = signer_provider("http://localhost:8545", TEST_PRIVATE_KEY)
            .expect("invalid test provider");
        provider
    }

    #[test]
    fn test_to_returns_target_address() {
        let provider = create_test_provider();
        let target = Address::repeat_byte(0x42);
        let call = IYieldVault::setTargetAssetCall {
            assetId: U256::from(2),
        };

        let prepared = PreparedCall::new(target, call, U256::ZERO, &provider);

        assert_eq!(prepared.to(), target);
        assert_eq!(prepared.value(), U256::ZERO);
    }

    #[test]
    fn test_calldata_matches_abi_encoding() {
        let provider = create_test_provider();
        let call = IYieldVault::depositCall {
            amount: U256::from(1_000u64),
        };
        let expected = call.abi_encode();

        let prepared = PreparedCall::new(Address::repeat_byte(0x42), call, U256::ZERO, &provider);

        assert_eq!(prepared.calldata().as_ref(), expected.as_slice());
    }
}
