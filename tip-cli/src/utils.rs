use rust_decimal::Decimal;
use tip_core::calculations::common::format_money;

/// Formats a monetary value with the currency symbol, e.g. `"$15.00"`.
pub fn display_money(
    symbol: &str,
    value: Decimal,
) -> String {
    format!("{symbol}{}", format_money(value))
}

/// Formats possibly-empty input for display, using "—" when empty.
pub fn text_or_dash(text: &str) -> &str {
    if text.is_empty() { "—" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn display_money_prefixes_symbol() {
        assert_eq!(display_money("$", dec!(15)), "$15.00");
        assert_eq!(display_money("€", dec!(0.5)), "€0.50");
    }

    #[test]
    fn text_or_dash_handles_empty() {
        assert_eq!(text_or_dash(""), "—");
        assert_eq!(text_or_dash("12"), "12");
    }
}
