//! Read-only commands: stats, assets, portfolio and addresses.

use accrue_api::{chain_label, AccrueClient, AccrueClientConfig, ApiError, TARGET_ASSETS};
use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::output::{format_addresses, format_assets_table, format_holdings_table, format_stats};

pub async fn run_stats(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let client = AccrueClient::with_config(config)?;
    let stats = client.protocol_stats().await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_stats(&stats));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

pub async fn run_assets(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let client = AccrueClient::with_config(config)?;

    // Mark the selected target when a wallet is connected.
    let current = match client.account() {
        Some(account) => Some(client.snapshot_for(account).await.dashboard.target_asset_id),
        None => None,
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_assets_table(&TARGET_ASSETS, current));
        }
        OutputFormat::Json => {
            let value = json!({ "assets": TARGET_ASSETS, "target": current });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

pub async fn run_portfolio(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let client = AccrueClient::with_config(config)?;
    let account = client.account().ok_or(ApiError::WalletNotConnected)?;
    let snapshot = client.snapshot_for(account).await;

    match format {
        OutputFormat::Table => {
            println!("{}", format_holdings_table(&snapshot.holdings));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshot.holdings)?);
        }
    }

    Ok(())
}

pub fn run_addresses(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let client = AccrueClient::with_config(config)?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_addresses(client.chain_id(), client.addresses()));
        }
        OutputFormat::Json => {
            let addresses = client.addresses();
            let value = json!({
                "chainId": client.chain_id(),
                "network": chain_label(client.chain_id()),
                "meth": addresses.meth,
                "rwaToken": addresses.rwa_token,
                "yieldVault": addresses.yield_vault,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
