//! Conversion of raw base-unit balances to human-scale amounts.
//!
//! Chain balances are 18-decimal fixed-point integers and routinely exceed
//! 2^53, so they must never pass through a float before scaling. Conversion
//! parses the full value into a `u128` and divides by `10^decimals` in
//! integer space; only the quotient is converted to `f64`. The sub-token
//! remainder is truncated, matching the chain's human display.

use erapay_types::TOKEN_DECIMALS;

use crate::{Result, RewardError};

/// Convert a raw base-unit balance string to a scaled amount.
///
/// Accepts the chain's human encoding: ASCII digits with optional comma
/// grouping (`"1,234,000"`). Surrounding whitespace is tolerated.
///
/// # Errors
///
/// [`RewardError::InvalidAmount`] if the input is empty, negative, exceeds
/// `u128`, or contains anything other than digits and comma grouping.
pub fn to_scaled_amount(raw: &str, decimals: u32) -> Result<f64> {
    let value = parse_raw(raw)?;
    let divisor = 10u128
        .checked_pow(decimals)
        .ok_or_else(|| invalid(raw, "decimal scale out of range"))?;
    Ok((value / divisor) as f64)
}

/// Convert a raw balance string using the chain's native 18-decimal scale.
pub fn to_tokens(raw: &str) -> Result<f64> {
    to_scaled_amount(raw, TOKEN_DECIMALS)
}

/// Parse a raw balance string into its full-precision integer value.
pub fn parse_raw(raw: &str) -> Result<u128> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(raw, "empty amount"));
    }
    if trimmed.starts_with('-') {
        return Err(invalid(raw, "negative amount"));
    }

    let mut value: u128 = 0;
    let mut digits = 0usize;
    for ch in trimmed.chars() {
        match ch {
            '0'..='9' => {
                let digit = (ch as u8 - b'0') as u128;
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| invalid(raw, "amount exceeds u128"))?;
                digits += 1;
            }
            // Comma grouping as emitted by the chain's human encoding
            ',' => {}
            _ => return Err(invalid(raw, "not an integer")),
        }
    }
    if digits == 0 {
        return Err(invalid(raw, "not an integer"));
    }
    Ok(value)
}

fn invalid(value: &str, reason: &'static str) -> RewardError {
    RewardError::InvalidAmount {
        value: value.to_string(),
        reason,
    }
}
