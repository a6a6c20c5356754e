//! mETH amount parsing and display.

use std::str::FromStr;

use alloy::primitives::utils::{format_units, parse_units};
use alloy_primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ApiError, Result};

/// mETH uses 18 decimals.
pub const METH_DECIMALS: u8 = 18;

/// Smallest pending yield that can be harvested: 0.001 mETH.
pub const HARVEST_THRESHOLD: U256 = U256::from_limbs([1_000_000_000_000_000, 0, 0, 0]);

/// Parse a human-readable mETH amount (e.g. `"1.5"`) into wei.
pub fn parse_meth(amount: &str) -> Result<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidAmount("amount is empty".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(ApiError::InvalidAmount(format!("{} is negative", trimmed)));
    }

    let parsed = parse_units(trimmed, METH_DECIMALS)
        .map_err(|e| ApiError::InvalidAmount(format!("{}: {}", trimmed, e)))?;
    Ok(parsed.get_absolute())
}

/// Format wei as mETH with full precision.
pub fn format_meth(value: U256) -> String {
    format_units(value, METH_DECIMALS).unwrap_or_else(|_| value.to_string())
}

/// Format wei as mETH rounded to `places` decimal places.
pub fn format_meth_fixed(value: U256, places: u32) -> String {
    let full = format_meth(value);
    let (integer, fraction) = full.split_once('.').unwrap_or((full.as_str(), ""));

    // One extra digit is enough to round correctly.
    let keep = (places as usize + 1).min(fraction.len());
    let candidate = if keep == 0 {
        integer.to_string()
    } else {
        format!("{}.{}", integer, &fraction[..keep])
    };

    match Decimal::from_str(&candidate) {
        Ok(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", places as usize, rounded)
        }
        // Beyond Decimal's range; truncate instead.
        Err(_) => {
            if places == 0 {
                return integer.to_string();
            }
            let digits: String = fraction
                .chars()
                .chain(std::iter::repeat('0'))
                .take(places as usize)
                .collect();
            format!("{}.{}", integer, digits)
        }
    }
}
