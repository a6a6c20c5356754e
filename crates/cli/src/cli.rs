//! CLI argument definitions using clap.

use accrue_api::{
    AccrueClientConfig, DEFAULT_FAUCET_AMOUNT, DEFAULT_MOCK_YIELD, MANTLE_SEPOLIA_CHAIN_ID,
    MANTLE_SEPOLIA_RPC_URL,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Accrue - route staking yield into real-world assets
#[derive(Parser, Debug)]
#[command(name = "accrue")]
#[command(about = "Accrue yield routing dashboard for Mantle Sepolia", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// JSON-RPC endpoint (can also use ACCRUE_RPC_URL env var)
    #[arg(long, global = true, env = "ACCRUE_RPC_URL", default_value = MANTLE_SEPOLIA_RPC_URL)]
    pub rpc_url: String,

    /// Wallet private key (can also use PRIVATE_KEY env var). Without it only
    /// the landing page and public stats are available.
    #[arg(long, global = true, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Chain to use
    #[arg(long, global = true, default_value_t = MANTLE_SEPOLIA_CHAIN_ID)]
    pub chain_id: u64,

    /// Skip the approval step of a deposit when the allowance already covers it
    #[arg(long, global = true)]
    pub skip_covered_approval: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration from the global flags.
    pub fn client_config(&self) -> AccrueClientConfig {
        let config = AccrueClientConfig::new()
            .with_rpc_url(&self.rpc_url)
            .with_chain_id(self.chain_id)
            .with_skip_covered_approval(self.skip_covered_approval);
        match &self.private_key {
            Some(key) if !key.trim().is_empty() => config.with_private_key(key.trim()),
            _ => config,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard (or the landing page without a wallet)
    Dashboard,
    /// Keep the dashboard on screen, refreshing it periodically
    Watch(WatchArgs),
    /// Approve and deposit mETH into the vault
    Deposit(DepositArgs),
    /// Harvest pending yield and buy the target RWA
    Harvest,
    /// Choose which RWA harvested yield buys
    #[command(name = "set-target")]
    SetTarget(SetTargetArgs),
    /// Credit simulated yield to your position (testnet)
    #[command(name = "mock-yield")]
    MockYield(MockYieldArgs),
    /// Claim test mETH from the faucet
    Faucet(FaucetArgs),
    /// Show protocol-wide statistics
    Stats,
    /// List the RWAs harvests can buy
    Assets,
    /// Show your RWA token holdings
    Portfolio,
    /// Show the contract addresses in use
    Addresses,
}

#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

#[derive(Parser, Debug)]
pub struct DepositArgs {
    /// Amount of mETH in human-readable units (e.g., "1.5")
    #[arg(required_unless_present = "max", conflicts_with = "max")]
    pub amount: Option<String>,

    /// Deposit the whole mETH balance
    #[arg(long)]
    pub max: bool,
}

#[derive(Parser, Debug)]
pub struct SetTargetArgs {
    /// Asset id or name (e.g., "2" or "treasury-bonds")
    pub asset: String,
}

#[derive(Parser, Debug)]
pub struct MockYieldArgs {
    /// Amount of mETH yield to simulate
    #[arg(default_value = DEFAULT_MOCK_YIELD)]
    pub amount: String,
}

#[derive(Parser, Debug)]
pub struct FaucetArgs {
    /// Amount of test mETH to request
    #[arg(default_value = DEFAULT_FAUCET_AMOUNT)]
    pub amount: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["accrue", "dashboard"]).unwrap();
        assert_eq!(cli.chain_id, 5003);
        assert!(matches!(cli.format, OutputFormat::Table));
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn test_deposit_amount_or_max() {
        let cli = Cli::try_parse_from(["accrue", "deposit", "1.5"]).unwrap();
        match cli.command {
            Commands::Deposit(args) => {
                assert_eq!(args.amount.as_deref(), Some("1.5"));
                assert!(!args.max);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["accrue", "deposit", "--max"]).is_ok());
        assert!(Cli::try_parse_from(["accrue", "deposit"]).is_err());
        assert!(Cli::try_parse_from(["accrue", "deposit", "1", "--max"]).is_err());
    }

    #[test]
    fn test_action_defaults() {
        let cli = Cli::try_parse_from(["accrue", "mock-yield"]).unwrap();
        assert!(matches!(cli.command, Commands::MockYield(ref a) if a.amount == "0.01"));

        let cli = Cli::try_parse_from(["accrue", "faucet"]).unwrap();
        assert!(matches!(cli.command, Commands::Faucet(ref a) if a.amount == "10"));

        let cli = Cli::try_parse_from(["accrue", "watch"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch(ref a) if a.interval == 15));
    }

    #[test]
    fn test_deposits_approve_unless_skipping_is_requested() {
        let cli = Cli::try_parse_from(["accrue", "deposit", "1"]).unwrap();
        assert!(!cli.client_config().skip_covered_approval);

        let cli =
            Cli::try_parse_from(["accrue", "--skip-covered-approval", "deposit", "1"]).unwrap();
        assert!(cli.client_config().skip_covered_approval);
    }

    #[test]
    fn test_blank_private_key_is_disconnected() {
        let cli =
            Cli::try_parse_from(["accrue", "--private-key", "  ", "dashboard"]).unwrap();
        assert!(cli.client_config().private_key.is_none());
    }
}
