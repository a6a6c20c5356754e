//! Write commands: deposit, harvest, set-target, mock-yield and faucet.

use accrue_api::{AccrueClient, AccrueClientConfig, ApiError, Dashboard, TxSummary};
use anyhow::Result;

use crate::cli::{DepositArgs, FaucetArgs, MockYieldArgs, OutputFormat, SetTargetArgs};
use crate::output::{format_tx_summary, TerminalNotifier};

type CliDashboard = Dashboard<AccrueClient, TerminalNotifier>;

/// Build a dashboard for a connected wallet.
fn connect(config: AccrueClientConfig) -> Result<CliDashboard> {
    let client = AccrueClient::with_config(config)?;
    if !client.is_connected() {
        return Err(ApiError::WalletNotConnected.into());
    }
    Ok(Dashboard::new(client, TerminalNotifier))
}

fn print_summary(summary: &TxSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_tx_summary(summary));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}

pub async fn run_deposit(
    args: &DepositArgs,
    config: AccrueClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = connect(config)?;

    let summary = if args.max {
        dashboard.deposit_max().await?
    } else {
        dashboard
            .deposit(args.amount.as_deref().unwrap_or_default())
            .await?
    };

    match summary {
        Some(summary) => print_summary(&summary, format),
        None => {
            println!("Nothing to deposit.");
            Ok(())
        }
    }
}

pub async fn run_harvest(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let dashboard = connect(config)?;
    let summary = dashboard.harvest().await?;
    print_summary(&summary, format)
}

pub async fn run_set_target(
    args: &SetTargetArgs,
    config: AccrueClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = connect(config)?;
    let summary = dashboard.set_target_asset(&args.asset).await?;
    print_summary(&summary, format)
}

pub async fn run_mock_yield(
    args: &MockYieldArgs,
    config: AccrueClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = connect(config)?;
    let summary = dashboard.mock_yield(&args.amount).await?;
    print_summary(&summary, format)
}

pub async fn run_faucet(
    args: &FaucetArgs,
    config: AccrueClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = connect(config)?;
    let summary = dashboard.faucet(&args.amount).await?;
    print_summary(&summary, format)
}
