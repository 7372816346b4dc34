//! Tip and total calculation.
//!
//! The calculation is a pure function of the current amount and percentage
//! choice. It runs on every edit to drive the live display and once more at
//! commit time, so identical inputs must always produce identical output.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Amount: empty or unparseable text yields the zero breakdown |
//! | 2    | Rate: preset value, parsed custom text (0 if blank), or 0 when unset |
//! | 3    | Rate check: a negative rate is rejected |
//! | 4    | Tip: amount × rate / 100, rounded to cents |
//! | 5    | Total: amount + tip, rounded to cents |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::TipCalculator;
//! use tip_core::{AmountField, PercentageChoice, PresetRate};
//!
//! let calculator = TipCalculator::new();
//! let result = calculator
//!     .calculate(&AmountField::new("100"), &PercentageChoice::Preset(PresetRate::Fifteen))
//!     .unwrap();
//!
//! assert_eq!(result.tip, dec!(15.00));
//! assert_eq!(result.total, dec!(115.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::{AmountField, PercentageChoice};

/// Errors that can occur during a tip calculation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TipCalculationError {
    /// The resolved tip percentage was below zero.
    #[error("tip percentage cannot be negative, got {0}")]
    NegativeRate(Decimal),

    /// The tip or total does not fit in a [`Decimal`].
    #[error("amount {amount} at {rate}% is too large to calculate")]
    Overflow { amount: Decimal, rate: Decimal },
}

/// Tip and total for one amount/rate pair, both rounded to cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TipBreakdown {
    pub tip: Decimal,
    pub total: Decimal,
}

impl TipBreakdown {
    pub const ZERO: TipBreakdown = TipBreakdown {
        tip: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Calculator for tip breakdowns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipCalculator;

impl TipCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the tip and total for the given field and choice.
    ///
    /// An empty or unparseable amount is not an error; it yields
    /// [`TipBreakdown::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`TipCalculationError::NegativeRate`] if the choice resolves to
    /// a rate below zero. Sanitized input cannot produce one.
    ///
    /// Returns [`TipCalculationError::Overflow`] if the tip or total exceeds
    /// the range of [`Decimal`].
    pub fn calculate(
        &self,
        amount: &AmountField,
        choice: &PercentageChoice,
    ) -> Result<TipBreakdown, TipCalculationError> {
        let Some(amount) = amount.value() else {
            return Ok(TipBreakdown::ZERO);
        };

        let rate = self.resolve_rate(choice)?;
        let overflow = || TipCalculationError::Overflow { amount, rate };
        let tip = self.tip(amount, rate).ok_or_else(overflow)?;
        let total = self.total(amount, tip).ok_or_else(overflow)?;

        Ok(TipBreakdown { tip, total })
    }

    /// Resolves the effective rate, rejecting negative values.
    fn resolve_rate(
        &self,
        choice: &PercentageChoice,
    ) -> Result<Decimal, TipCalculationError> {
        let rate = choice.rate();
        if rate < Decimal::ZERO {
            return Err(TipCalculationError::NegativeRate(rate));
        }
        Ok(rate)
    }

    /// Tip rounded to cents, or `None` on overflow.
    fn tip(
        &self,
        amount: Decimal,
        rate: Decimal,
    ) -> Option<Decimal> {
        amount
            .checked_mul(rate)?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(round_half_up)
    }

    /// Total rounded to cents, or `None` on overflow.
    fn total(
        &self,
        amount: Decimal,
        tip: Decimal,
    ) -> Option<Decimal> {
        amount.checked_add(tip).map(round_half_up)
    }
}
