use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::{TipBreakdown, common::format_money};

/// A committed calculation.
///
/// Records are built once at commit time and never change afterwards, so the
/// fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipRecord {
    amount: Decimal,
    percentage_label: String,
    tip: Decimal,
    total: Decimal,
}

impl TipRecord {
    pub(crate) fn new(
        amount: Decimal,
        percentage_label: String,
        breakdown: TipBreakdown,
    ) -> Self {
        Self {
            amount,
            percentage_label,
            tip: breakdown.tip,
            total: breakdown.total,
        }
    }

    /// The bill amount as entered.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The rate label used, e.g. `"15%"`.
    pub fn percentage_label(&self) -> &str {
        &self.percentage_label
    }

    pub fn tip(&self) -> Decimal {
        self.tip
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

impl fmt::Display for TipRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Amount:     {}", format_money(self.amount))?;
        writeln!(f, "Percentage: {}", self.percentage_label)?;
        writeln!(f, "Tip:        {}", format_money(self.tip))?;
        write!(f, "Total:      {}", format_money(self.total))
    }
}
