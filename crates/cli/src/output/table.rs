//! Table formatting for the asset catalog and RWA holdings.

use accrue_api::{RwaHolding, TargetAsset};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct AssetRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Asset")]
    name: String,
    #[tabled(rename = "APY")]
    apy: String,
    #[tabled(rename = "Target")]
    target: String,
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Asset")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn format_apy(asset: &TargetAsset) -> String {
    format!("{:.2}%", asset.apy_percent())
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

/// The catalog, marking the currently selected target if known.
pub fn format_assets_table(assets: &[TargetAsset], current: Option<u64>) -> String {
    let rows: Vec<AssetRow> = assets
        .iter()
        .map(|asset| AssetRow {
            id: asset.id,
            name: asset.name.to_string(),
            apy: format_apy(asset),
            target: if current == Some(asset.id) {
                "✓".to_string()
            } else {
                String::new()
            },
        })
        .collect();

    render(rows)
}

pub fn format_holdings_table(holdings: &[RwaHolding]) -> String {
    let rows: Vec<HoldingRow> = holdings
        .iter()
        .filter(|h| !h.balance.is_zero())
        .map(|h| HoldingRow {
            id: h.asset.id,
            name: h.asset.name.to_string(),
            balance: h.balance.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return "No RWA holdings yet. Harvest yield to buy your first asset.".to_string();
    }
    render(rows)
}
