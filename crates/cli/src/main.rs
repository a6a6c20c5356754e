//! Accrue CLI - route Mantle staking yield into real-world assets.

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{
    run_addresses, run_assets, run_dashboard, run_deposit, run_faucet, run_harvest,
    run_mock_yield, run_portfolio, run_set_target, run_stats, run_watch,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();
    let config = cli.client_config();
    let format = cli.format;

    match &cli.command {
        Commands::Dashboard => run_dashboard(config, format).await?,
        Commands::Watch(args) => run_watch(args, config, format).await?,
        Commands::Deposit(args) => run_deposit(args, config, format).await?,
        Commands::Harvest => run_harvest(config, format).await?,
        Commands::SetTarget(args) => run_set_target(args, config, format).await?,
        Commands::MockYield(args) => run_mock_yield(args, config, format).await?,
        Commands::Faucet(args) => run_faucet(args, config, format).await?,
        Commands::Stats => run_stats(config, format).await?,
        Commands::Assets => run_assets(config, format).await?,
        Commands::Portfolio => run_portfolio(config, format).await?,
        Commands::Addresses => run_addresses(config, format)?,
    }

    Ok(())
}
