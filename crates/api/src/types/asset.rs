//! Real-world assets that harvested yield can buy.

use rust_decimal::Decimal;
use serde::Serialize;

/// An RWA that can be selected as the harvest target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetAsset {
    /// RWA token id.
    pub id: u64,
    /// Display name.
    pub name: &'static str,
    /// Advertised APY in basis points.
    pub apy_bps: u32,
}

impl TargetAsset {
    /// Advertised APY in percent (e.g. 4.50).
    pub fn apy_percent(&self) -> Decimal {
        Decimal::new(i64::from(self.apy_bps), 2)
    }
}

/// The asset catalog, ordered by id.
pub const TARGET_ASSETS: [TargetAsset; 4] = [
    TargetAsset {
        id: 1,
        name: "NYC Real Estate",
        apy_bps: 450,
    },
    TargetAsset {
        id: 2,
        name: "Treasury Bonds",
        apy_bps: 525,
    },
    TargetAsset {
        id: 3,
        name: "Invoice Financing",
        apy_bps: 850,
    },
    TargetAsset {
        id: 4,
        name: "Infrastructure",
        apy_bps: 650,
    },
];

/// Shown when the vault reports an id outside the catalog.
pub const DEFAULT_TARGET_ASSET: TargetAsset = TARGET_ASSETS[0];

/// Look up an asset by token id.
pub fn target_asset(id: u64) -> Option<&'static TargetAsset> {
    TARGET_ASSETS.iter().find(|a| a.id == id)
}

/// Look up an asset by id (`"2"`) or name, ignoring case, spaces and dashes
/// (`"treasury-bonds"`, `"Treasury Bonds"`).
pub fn find_target_asset(query: &str) -> Option<&'static TargetAsset> {
    let query = query.trim();
    if let Ok(id) = query.parse::<u64>() {
        return target_asset(id);
    }

    let wanted = normalize(query);
    TARGET_ASSETS.iter().find(|a| normalize(a.name) == wanted)
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
