//! Dashboard and watch commands.

use std::time::Duration;

use accrue_api::{AccrueClient, AccrueClientConfig, Availability, Screen};
use anyhow::Result;
use serde_json::json;

use crate::cli::{OutputFormat, WatchArgs};
use crate::output::{format_dashboard, format_landing};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

async fn render(client: &AccrueClient, format: OutputFormat) -> Result<()> {
    let screen = client.screen().await;

    match (format, screen) {
        (OutputFormat::Table, Screen::Landing) => {
            println!("{}", format_landing());
        }
        (OutputFormat::Table, Screen::Dashboard(snapshot)) => {
            let availability = Availability::evaluate(&snapshot, false);
            println!("{}", format_dashboard(&snapshot, &availability));
        }
        (OutputFormat::Json, Screen::Landing) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "connected": false }))?);
        }
        (OutputFormat::Json, Screen::Dashboard(snapshot)) => {
            let availability = Availability::evaluate(&snapshot, false);
            let value = json!({
                "connected": true,
                "snapshot": snapshot,
                "availability": availability,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

pub async fn run_dashboard(config: AccrueClientConfig, format: OutputFormat) -> Result<()> {
    let client = AccrueClient::with_config(config)?;
    render(&client, format).await
}

/// Refetch and redraw every `args.interval` seconds until Ctrl-C.
pub async fn run_watch(
    args: &WatchArgs,
    config: AccrueClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let client = AccrueClient::with_config(config)?;
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if matches!(format, OutputFormat::Table) {
                    print!("{}", CLEAR_SCREEN);
                }
                render(&client, format).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("watch interrupted");
                return Ok(());
            }
        }
    }
}
