//! Conversions between raw token amounts and their decimal representation
//!
//! All amounts printed by the scripts go through [`format_ether`], which
//! scales by the fixed `10^18` base.

use alloy_primitives::{
    utils::{format_units, parse_units},
    I256, U256,
};

use crate::{constants::TOKEN_DECIMALS, errors::ScriptError};

/// Format a raw amount as a decimal string.
///
/// Trailing zeros of the fractional part are dropped, keeping at least one
/// digit, e.g. `1500000000000000000` formats as `1.5` and `10^18` as `1.0`.
pub fn format_ether(amount: U256) -> Result<String, ScriptError> {
    let formatted = format_units(amount, TOKEN_DECIMALS)
        .map_err(|e| ScriptError::UnitConversion(e.to_string()))?;

    Ok(trim_fraction(formatted))
}

/// Format a signed raw amount as a decimal string
pub fn format_signed_ether(amount: I256) -> Result<String, ScriptError> {
    let (sign, abs) = amount.into_sign_and_abs();
    let formatted = format_ether(abs)?;
    if sign.is_negative() && !abs.is_zero() {
        Ok(format!("-{formatted}"))
    } else {
        Ok(formatted)
    }
}

/// Parse a non-negative decimal string into a raw amount
pub fn parse_ether(value: &str) -> Result<U256, ScriptError> {
    let parsed = parse_units(value.trim(), TOKEN_DECIMALS)
        .map_err(|e| ScriptError::UnitConversion(format!("{value}: {e}")))?;
    if parsed.is_negative() {
        return Err(ScriptError::UnitConversion(format!(
            "{value}: amount must not be negative"
        )));
    }

    Ok(parsed.get_absolute())
}

/// Drop trailing zeros after the decimal point
fn trim_fraction(mut formatted: String) -> String {
    if formatted.contains('.') {
        let trimmed_len = formatted.trim_end_matches('0').len();
        formatted.truncate(trimmed_len);
        if formatted.ends_with('.') {
            formatted.push('0');
        }
    }
    formatted
}
