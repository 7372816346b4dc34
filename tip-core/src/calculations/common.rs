//! Common utility functions for tip calculations.
//!
//! This module provides the rounding and display rules shared by the live
//! breakdown and the history records.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places used for every monetary value.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard currency rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value with exactly two decimal places.
///
/// The value is rounded with [`round_half_up`] first, then padded so that
/// whole numbers render as `"15.00"` rather than `"15"`. Padding is done on
/// the text, so values with 29 integer digits still get two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::format_money;
///
/// assert_eq!(format_money(dec!(15)), "15.00");
/// assert_eq!(format_money(dec!(7.5)), "7.50");
/// assert_eq!(format_money(dec!(2.345)), "2.35");
/// ```
pub fn format_money(value: Decimal) -> String {
    let text = round_half_up(value).to_string();
    let width = MONEY_SCALE as usize;
    match text.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{fraction:0<width$}"),
        None => format!("{text}.{:0<width$}", ""),
    }
}
