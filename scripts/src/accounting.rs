//! Off-chain mirrors of the vault's share accounting, used when reporting

use alloy_primitives::{I256, U256};

use crate::{constants::FIXED_POINT_BASE, errors::ScriptError};

/// The fixed-point base as a `U256`
pub fn fixed_point_base() -> U256 {
    U256::from(FIXED_POINT_BASE)
}

/// The yield the vault holds beyond its share supply, floored at zero
pub fn claimed(balance: U256, total_supply: U256) -> U256 {
    balance.saturating_sub(total_supply)
}

/// The unrealized earnings of a holder of `balance_of` shares at `price_per_share`.
///
/// Computes `balance_of * pps / 10^18 - balance_of`. The division floors the
/// share value before the principal is subtracted, so a price below par gives
/// a negative value.
pub fn earned(balance_of: U256, price_per_share: U256) -> Result<I256, ScriptError> {
    let value = balance_of
        .checked_mul(price_per_share)
        .ok_or(ScriptError::Overflow)?
        / fixed_point_base();

    signed(value)?
        .checked_sub(signed(balance_of)?)
        .ok_or(ScriptError::Overflow)
}

/// The signed change from `before` to `after`, positive when the balance shrank
pub fn balance_delta(before: U256, after: U256) -> Result<I256, ScriptError> {
    signed(before)?
        .checked_sub(signed(after)?)
        .ok_or(ScriptError::Overflow)
}

/// Reinterpret an unsigned value as signed, rejecting values above `I256::MAX`
fn signed(value: U256) -> Result<I256, ScriptError> {
    I256::try_from(value).map_err(|_| ScriptError::Overflow)
}
