//! Boundary conversions between human decimal strings and 18-decimal
//! base-unit integers.
//!
//! Amounts that feed on-chain calls are always `U256` base units; decimal
//! strings exist only at the edges (CLI input, log output). All arithmetic
//! here is integer arithmetic.

use crate::errors::{Result, TradeError};
use ethers::types::U256;

/// Token fixed-point precision. Both the curve tokens and the chain's
/// native asset use 18 decimals.
pub const BASE_DECIMALS: u32 = 18;

/// Parse a human decimal string ("1.5") into base units.
///
/// Rejects empty input, malformed digits, more fractional digits than the
/// token carries, and values that overflow `U256`.
pub fn parse_base_units(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TradeError::InvalidInput("empty amount".into()));
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(TradeError::InvalidInput(format!("malformed amount '{input}'")));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(TradeError::InvalidInput(format!("malformed amount '{input}'")));
    }
    if frac.len() as u32 > BASE_DECIMALS {
        return Err(TradeError::InvalidInput(format!(
            "amount '{input}' has more than {BASE_DECIMALS} decimal places"
        )));
    }

    let scale = U256::exp10(BASE_DECIMALS as usize);
    let whole_units = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole)
            .map_err(|e| TradeError::InvalidInput(format!("amount '{input}': {e}")))?
            .checked_mul(scale)
            .ok_or_else(|| TradeError::InvalidInput(format!("amount '{input}' overflows")))?
    };

    let frac_units = if frac.is_empty() {
        U256::zero()
    } else {
        let padding = BASE_DECIMALS as usize - frac.len();
        U256::from_dec_str(frac)
            .map_err(|e| TradeError::InvalidInput(format!("amount '{input}': {e}")))?
            * U256::exp10(padding)
    };

    whole_units
        .checked_add(frac_units)
        .ok_or_else(|| TradeError::InvalidInput(format!("amount '{input}' overflows")))
}

/// Format base units as a decimal string with trailing zeros trimmed.
pub fn format_base_units(value: U256) -> String {
    let scale = U256::exp10(BASE_DECIMALS as usize);
    let whole = value / scale;
    let remainder = value % scale;

    if remainder.is_zero() {
        return whole.to_string();
    }
    let digits = remainder.to_string();
    let frac = format!("{digits:0>width$}", width = BASE_DECIMALS as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
