//! Output rounding for money values.
//!
//! Amounts are carried at full precision through a calculation and rounded
//! once, when they are written into a result.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money is reported with.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds `value` to cents, half away from zero, with exactly two decimals.
///
/// # Examples
///
/// ```
/// use bonus_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("74.995").unwrap()).to_string(), "75.00");
/// assert_eq!(round_money(Decimal::from(450)).to_string(), "450.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}
