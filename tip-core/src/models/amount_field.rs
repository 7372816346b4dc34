use rust_decimal::Decimal;

use crate::sanitize::{parse_lenient_decimal, sanitize_numeric};

/// The bill amount as the user typed it, after sanitization.
///
/// The text is kept verbatim so the front end can echo it back; the numeric
/// value is derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountField {
    text: String,
}

impl AmountField {
    /// Creates an amount field from raw input, sanitizing it.
    pub fn new(raw: &str) -> Self {
        Self {
            text: sanitize_numeric(raw),
        }
    }

    /// Replaces the current text with the sanitized form of `raw`.
    pub fn set_text(
        &mut self,
        raw: &str,
    ) {
        self.text = sanitize_numeric(raw);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Numeric value of the field, or `None` when empty or unparseable.
    pub fn value(&self) -> Option<Decimal> {
        parse_lenient_decimal(&self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
