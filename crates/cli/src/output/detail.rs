//! Detailed output for the landing page, the dashboard and transactions.

use accrue_api::{
    chain_label, format_meth_fixed, Availability, ContractAddresses, DashboardSnapshot, FaucetState,
    ProtocolStats, TxSummary, YieldProgress, TARGET_ASSETS,
};
use alloy_primitives::U256;
use colored::Colorize;

const RULE_WIDTH: usize = 60;
const PROGRESS_WIDTH: usize = 20;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn format_meth(value: U256) -> String {
    format!("{} mETH", format_meth_fixed(value, 4))
}

fn format_balance(value: Option<U256>, unit: &str) -> String {
    format!("{} {}", format_meth_fixed(value.unwrap_or_default(), 4), unit)
}

fn format_progress(progress: &YieldProgress) -> String {
    let filled = usize::from(progress.progress_percent) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        progress.progress_percent
    )
}

fn format_faucet(faucet: &FaucetState) -> String {
    if faucet.can_use() {
        "Ready: 10 test mETH available".green().to_string()
    } else {
        format!("⏳ Cooldown: {} remaining", faucet.cooldown_label())
            .yellow()
            .to_string()
    }
}

fn flag(enabled: bool) -> String {
    if enabled {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

/// Header shown above both screens.
fn format_header(output: &mut String) {
    output.push_str(&format!("{}\n", rule()));
    output.push_str(&format!(
        "{}{}  {}\n",
        "Acc".bold(),
        "rue".cyan().bold(),
        "Mantle Sepolia".dimmed()
    ));
    output.push_str(&format!("{}\n", rule()));
}

pub fn format_landing() -> String {
    let mut output = String::new();
    format_header(&mut output);

    output.push_str(
        "Stake mETH, keep your principal, and let the yield buy real-world assets.\n\n",
    );

    output.push_str(&format!("{}\n", "How it Works".cyan().bold()));
    output.push_str("  1. Deposit mETH into the yield vault\n");
    output.push_str("  2. Yield accrues on your principal\n");
    output.push_str("  3. Harvest to buy your chosen RWA\n\n");

    output.push_str(&format!("{}\n", "Assets".cyan().bold()));
    for asset in &TARGET_ASSETS {
        output.push_str(&format!(
            "  {:<18} {:.2}% APY\n",
            asset.name,
            asset.apy_percent()
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "{}\n",
        "Connect a wallet: set PRIVATE_KEY or pass --private-key".yellow()
    ));
    output
}

pub fn format_dashboard(snapshot: &DashboardSnapshot, availability: &Availability) -> String {
    let view = &snapshot.dashboard;
    let target = view.target_asset();
    let mut output = String::new();
    format_header(&mut output);

    output.push_str(&format!(
        "Welcome back, {}...\n",
        snapshot.short_account().bold()
    ));
    output.push_str("Your yield is working hard to build real wealth\n\n");

    // Position
    output.push_str(&format!("{}\n", "Position".cyan().bold()));
    output.push_str(&format!("  Principal Staked: {}\n", format_meth(view.principal)));
    output.push_str(&format!(
        "  Pending Yield:    {} mETH\n",
        format_meth_fixed(view.pending_yield, 6)
    ));
    output.push_str(&format!("  Total Harvested:  {}\n", format_meth(view.total_harvested)));
    output.push_str(&format!("  RWA Value:        {}\n", format_meth(view.rwa_value)));
    output.push_str(&format!(
        "  Target Asset:     {} ({:.2}% APY)\n",
        target.name,
        target.apy_percent()
    ));
    output.push_str(&format!(
        "  Next Purchase:    {}\n\n",
        format_progress(&snapshot.progress)
    ));

    // Wallet
    output.push_str(&format!("{}\n", "Wallet".cyan().bold()));
    output.push_str(&format!(
        "  MNT Balance:  {}\n",
        format_balance(snapshot.balances.native, "MNT")
    ));
    output.push_str(&format!(
        "  mETH Balance: {}\n\n",
        format_balance(snapshot.balances.meth, "mETH")
    ));

    // Harvest
    output.push_str(&format!("{}\n", "Harvest".cyan().bold()));
    output.push_str(&format!(
        "  Convert {} mETH yield to RWA\n",
        format_meth_fixed(view.pending_yield, 6)
    ));
    if view.below_harvest_minimum() {
        output.push_str(&format!(
            "  {}\n",
            "⚠️ Minimum 0.001 mETH required to harvest".yellow()
        ));
    }
    if !view.has_principal() {
        output.push_str(&format!(
            "  {}\n",
            "⚠️ Deposit mETH first to change target asset".yellow()
        ));
    }
    output.push('\n');

    // Faucet
    output.push_str(&format!("{}\n", "Test Token Faucet".cyan().bold()));
    output.push_str(&format!("  {}\n\n", format_faucet(&snapshot.faucet)));

    output.push_str(&format_stats(&snapshot.stats));
    output.push('\n');

    // Actions
    output.push_str(&format!("{}\n", "Actions".cyan().bold()));
    output.push_str(&format!("  deposit:    {}\n", flag(availability.deposit)));
    output.push_str(&format!("  harvest:    {}\n", flag(availability.harvest)));
    output.push_str(&format!("  set-target: {}\n", flag(availability.set_target)));
    output.push_str(&format!("  mock-yield: {}\n", flag(availability.mock_yield)));
    output.push_str(&format!("  faucet:     {}\n", flag(availability.faucet)));

    output
}

pub fn format_stats(stats: &ProtocolStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Protocol Stats".cyan().bold()));
    output.push_str(&format!(
        "  Total Value Locked: {}\n",
        format_meth(stats.total_deposits)
    ));
    output.push_str(&format!("  Total Users:        {}\n", stats.total_users));
    output.push_str(&format!(
        "  Yield Harvested:    {}\n",
        format_meth(stats.protocol_yield)
    ));
    output.push_str(&format!("  RWA Purchased:      {}\n", format_meth(stats.rwa_value)));
    output
}

pub fn format_addresses(chain_id: u64, addresses: &ContractAddresses) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Contracts".cyan().bold()));
    output.push_str(&format!(
        "  Network:     {} ({})\n",
        chain_label(chain_id),
        chain_id
    ));
    output.push_str(&format!("  mETH:        {}\n", addresses.meth));
    output.push_str(&format!("  RWA Token:   {}\n", addresses.rwa_token));
    output.push_str(&format!("  Yield Vault: {}\n", addresses.yield_vault));
    output
}

pub fn format_tx_summary(summary: &TxSummary) -> String {
    let mut output = String::new();
    output.push_str("Transaction confirmed!\n");
    output.push_str(&format!("  Tx Hash:   {:#x}\n", summary.tx_hash));
    output.push_str(&format!(
        "  Block:     {}\n",
        summary.block_number.unwrap_or_default()
    ));
    output.push_str(&format!("  Gas Used:  {}\n", format_gas(summary.gas_used)));
    output
}

/// Format gas with thousands separators.
fn format_gas(gas: u64) -> String {
    let s = gas.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
