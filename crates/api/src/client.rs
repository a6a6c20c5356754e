//! The Accrue client: configuration, connection state and chain access.

use accrue_contracts::{
    AccrueReadClient, AccrueReader, AccrueTransactionClient, ContractAddresses, PreparedCall,
    MANTLE_SEPOLIA_CHAIN_ID, MANTLE_SEPOLIA_RPC_URL,
};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, U256};
use futures::future::join_all;

use crate::backend::AccrueBackend;
use crate::error::{ApiError, Result};
use crate::status::{Action, StatusTracker, TxSummary};
use crate::types::{
    unix_now, DashboardSnapshot, DashboardView, FaucetState, ProtocolStats, RwaHolding,
    WalletBalances, YieldProgress, TARGET_ASSETS,
};

/// Configuration for [`AccrueClient`].
#[derive(Debug, Clone)]
pub struct AccrueClientConfig {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Private key of the wallet. Without one the client is disconnected.
    pub private_key: Option<String>,
    /// Chain whose deployment to use.
    pub chain_id: u64,
    /// Skip the approval when the vault allowance already covers the
    /// deposit. Defaults to false: every deposit is approve then deposit.
    pub skip_covered_approval: bool,
}

impl Default for AccrueClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: MANTLE_SEPOLIA_RPC_URL.to_string(),
            private_key: None,
            chain_id: MANTLE_SEPOLIA_CHAIN_ID,
            skip_covered_approval: false,
        }
    }
}

impl AccrueClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RPC URL.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Set the private key.
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set the chain id.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set whether a deposit skips an approval the allowance already covers.
    pub fn with_skip_covered_approval(mut self, skip: bool) -> Self {
        self.skip_covered_approval = skip;
        self
    }
}

/// What the shell shows: the landing page until a wallet is connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Dashboard(Box<DashboardSnapshot>),
}

/// Client for the Accrue deployment.
///
/// Reads work without a wallet. Writes need a private key and fail with
/// [`ApiError::WalletNotConnected`] otherwise.
///
/// # Example
///
/// ```no_run
/// use accrue_api::{AccrueClient, AccrueClientConfig, Screen};
///
/// #[tokio::main]
/// async fn main() -> Result<(), accrue_api::ApiError> {
///     let config = AccrueClientConfig::new().with_private_key("0x...");
///     let client = AccrueClient::with_config(config)?;
///
///     if let Screen::Dashboard(snapshot) = client.screen().await {
///         println!("principal: {}", snapshot.dashboard.principal);
///     }
///     Ok(())
/// }
/// ```
pub struct AccrueClient {
    reader: AccrueReadClient,
    tx: Option<AccrueTransactionClient>,
    chain_id: u64,
    skip_covered_approval: bool,
}

impl AccrueClient {
    /// Create a disconnected client for Mantle Sepolia.
    pub fn new() -> Result<Self> {
        Self::with_config(AccrueClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// If a private key is set, the client is connected and can send
    /// transactions.
    pub fn with_config(config: AccrueClientConfig) -> Result<Self> {
        let reader = AccrueReadClient::for_chain(&config.rpc_url, config.chain_id)?;
        let tx = match &config.private_key {
            Some(private_key) => Some(AccrueTransactionClient::for_chain(
                &config.rpc_url,
                private_key,
                config.chain_id,
            )?),
            None => None,
        };

        if let Some(tx) = &tx {
            tracing::debug!(
                account = %tx.signer_address(),
                chain_id = config.chain_id,
                "wallet connected"
            );
        }

        Ok(Self {
            reader,
            tx,
            chain_id: config.chain_id,
            skip_covered_approval: config.skip_covered_approval,
        })
    }

    /// Whether a wallet is connected.
    pub fn is_connected(&self) -> bool {
        self.tx.is_some()
    }

    /// The connected account, if any.
    pub fn account(&self) -> Option<Address> {
        self.tx.as_ref().map(|tx| tx.signer_address())
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Deployment addresses in use.
    pub fn addresses(&self) -> &ContractAddresses {
        self.reader.addresses()
    }

    /// Check if deposits skip an approval the allowance already covers.
    pub fn skip_covered_approval(&self) -> bool {
        self.skip_covered_approval
    }

    /// Protocol-wide statistics. Needs no wallet.
    pub async fn protocol_stats(&self) -> Result<ProtocolStats> {
        Ok(self.reader.protocol_totals().await?.into())
    }

    /// The landing screen, or the dashboard for the connected account.
    pub async fn screen(&self) -> Screen {
        match self.account() {
            None => Screen::Landing,
            Some(account) => Screen::Dashboard(Box::new(self.snapshot_for(account).await)),
        }
    }

    /// Read every dashboard panel for `account` concurrently.
    ///
    /// A panel whose read fails is replaced by its fallback value.
    pub async fn snapshot_for(&self, account: Address) -> DashboardSnapshot {
        let reader = &self.reader;
        let holdings = join_all(TARGET_ASSETS.iter().map(|asset| async move {
            RwaHolding {
                asset: *asset,
                balance: or_fallback("rwa balance", reader.rwa_balance(account, asset.id).await),
            }
        }));

        let (dashboard, progress, totals, native, meth, last_claim, cooldown, holdings) =
            tokio::join!(
                reader.user_dashboard(account),
                reader.yield_progress(account),
                reader.protocol_totals(),
                reader.native_balance(account),
                reader.meth_balance(account),
                reader.last_faucet_time(account),
                reader.faucet_cooldown(),
                holdings,
            );

        DashboardSnapshot {
            account,
            dashboard: or_fallback::<DashboardView>("dashboard", dashboard.map(Into::into)),
            progress: or_fallback::<YieldProgress>("yield progress", progress.map(Into::into)),
            stats: or_fallback::<ProtocolStats>("protocol stats", totals.map(Into::into)),
            balances: WalletBalances {
                native: optional("native balance", native),
                meth: optional("mETH balance", meth),
            },
            faucet: FaucetState::from_chain(
                or_fallback("last faucet time", last_claim),
                or_fallback("faucet cooldown", cooldown),
                unix_now(),
            ),
            holdings,
        }
    }

    fn signer(&self) -> Result<&AccrueTransactionClient> {
        self.tx.as_ref().ok_or(ApiError::WalletNotConnected)
    }
}

fn or_fallback<T: Default>(panel: &str, result: accrue_contracts::Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(panel, error = %e, "read failed, using fallback");
        T::default()
    })
}

fn optional<T>(panel: &str, result: accrue_contracts::Result<T>) -> Option<T> {
    result
        .map_err(|e| tracing::warn!(panel, error = %e, "read failed"))
        .ok()
}

/// Send `call`, reporting `Confirming` once the node accepted it.
async fn submit<C: SolCall>(
    call: PreparedCall<'_, C>,
    action: Action,
    status: &StatusTracker,
) -> Result<TxSummary> {
    let receipt = call
        .send_with(|tx_hash| status.confirming(action, tx_hash))
        .await?;
    Ok(TxSummary::from(&receipt))
}

impl AccrueBackend for AccrueClient {
    async fn snapshot(&self) -> Result<DashboardSnapshot> {
        let account = self.account().ok_or(ApiError::WalletNotConnected)?;
        Ok(self.snapshot_for(account).await)
    }

    async fn approve_for_deposit(
        &self,
        amount: U256,
        status: &StatusTracker,
    ) -> Result<Option<TxSummary>> {
        let tx = self.signer()?;
        tx.ensure_meth_balance(amount).await?;

        let approval = if self.skip_covered_approval {
            tx.approve_if_needed(amount, U256::MAX).await?
        } else {
            Some(tx.approve(U256::MAX))
        };

        match approval {
            Some(call) => Ok(Some(submit(call, Action::Approve, status).await?)),
            None => {
                tracing::debug!(%amount, "allowance covers deposit, skipping approval");
                Ok(None)
            }
        }
    }

    async fn deposit(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary> {
        submit(self.signer()?.deposit(amount), Action::Deposit, status).await
    }

    async fn harvest(&self, status: &StatusTracker) -> Result<TxSummary> {
        submit(self.signer()?.harvest(), Action::Harvest, status).await
    }

    async fn set_target_asset(&self, asset_id: u64, status: &StatusTracker) -> Result<TxSummary> {
        submit(
            self.signer()?.set_target_asset(asset_id),
            Action::SetTarget,
            status,
        )
        .await
    }

    async fn mock_yield(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary> {
        submit(self.signer()?.mock_yield(amount), Action::MockYield, status).await
    }

    async fn faucet(&self, amount: U256, status: &StatusTracker) -> Result<TxSummary> {
        submit(self.signer()?.faucet(amount), Action::Faucet, status).await
    }
}
