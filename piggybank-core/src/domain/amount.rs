//! Amount validation, parsing and display rounding
//!
//! Both the shell and the [`Account`](super::Account) go through
//! [`validate_amount`], so a value the shell accepts is exactly a value the
//! account accepts.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::result::{Error, Result};

/// Number of decimal places shown for currency values
pub const CURRENCY_DECIMALS: u32 = 2;

/// Largest amount or balance that still renders with exactly 2 decimals
///
/// This is the full 96-bit mantissa at scale 2:
/// `792281625142643375935439503.35`.
pub const MAX_BALANCE: Decimal =
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, CURRENCY_DECIMALS);

/// Check that `amount` is a positive number no larger than [`MAX_BALANCE`]
pub fn validate_amount(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_amount("amount must be greater than 0"));
    }
    if amount > MAX_BALANCE {
        return Err(Error::invalid_amount("amount is out of range"));
    }
    Ok(amount)
}

/// Parse user text into a positive amount
///
/// Accepts plain decimal notation ("12.50") and scientific notation ("1e3").
/// Surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(Error::invalid_amount("amount is empty"));
    }

    let amount = match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(amount) if !amount.is_zero() => amount,
        _ => return Err(unparsed(raw)),
    };

    validate_amount(amount)
}

/// Explain why `raw` did not produce a non-zero decimal
///
/// Text that is a real number but too small or too large for a decimal
/// (e.g. "1e-29", "1e400") is out of range rather than "not a number".
fn unparsed(raw: &str) -> Error {
    let is_infinity_literal = raw.to_ascii_lowercase().contains("inf");
    match raw.parse::<f64>() {
        Ok(value) if value.is_nan() || is_infinity_literal => {
            Error::invalid_amount(format!("'{}' is not a number", raw))
        }
        Ok(value) if value <= 0.0 => Error::invalid_amount("amount must be greater than 0"),
        Ok(_) => Error::invalid_amount("amount is out of range"),
        Err(_) => Error::invalid_amount(format!("'{}' is not a number", raw)),
    }
}

/// Convert a binary float into a positive amount
///
/// NaN and infinities have no decimal representation and are rejected.
pub fn amount_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::invalid_amount("amount must be a finite number"));
    }
    let amount = Decimal::from_f64(value)
        .ok_or_else(|| Error::invalid_amount("amount is out of range"))?;
    if amount.is_zero() && value > 0.0 {
        return Err(Error::invalid_amount("amount is out of range"));
    }
    validate_amount(amount)
}

/// Round a value for display: 2 decimals, round-half-to-even, scale fixed at 2
///
/// Ties go to the even neighbour, so `10.005` becomes `10.00` and `10.015`
/// becomes `10.02`. For values up to [`MAX_BALANCE`] the scale is always 2,
/// so `Display` renders `100` as `100.00`.
pub fn round_for_display(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CURRENCY_DECIMALS);
    rounded
}
