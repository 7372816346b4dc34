//! Input sanitization for numeric text fields.
//!
//! Both the bill amount and the custom percentage pass through
//! [`sanitize_numeric`] on every edit. Sanitized text may still be malformed
//! (`"1.2.3"`), so reading a number out of it goes through
//! [`parse_lenient_decimal`], which takes the longest numeric prefix.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Returns `true` for the characters a numeric field accepts.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Strips every character that is not an ASCII digit or a decimal point.
///
/// Multiple decimal points are kept; the parse step decides what they mean.
///
/// # Examples
///
/// ```
/// use tip_core::sanitize::sanitize_numeric;
///
/// assert_eq!(sanitize_numeric("12a.3.4b"), "12.3.4");
/// assert_eq!(sanitize_numeric("-$1,250.00"), "1250.00");
/// ```
pub fn sanitize_numeric(input: &str) -> String {
    input.chars().filter(|c| is_numeric_char(*c)).collect()
}

/// Length of the leading run of ASCII digits in `s`.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parses the longest leading `[+-]?digits[.digits]` prefix of `text`.
///
/// Anything after the prefix is ignored, so `"12.3.4"` reads as `12.3`.
/// Returns `None` when no digit is present before the first non-numeric
/// character (`""`, `"."`, `"abc"`) or when the value does not fit in a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::sanitize::parse_lenient_decimal;
///
/// assert_eq!(parse_lenient_decimal("12.3.4"), Some(dec!(12.3)));
/// assert_eq!(parse_lenient_decimal("7."), Some(dec!(7)));
/// assert_eq!(parse_lenient_decimal("."), None);
/// ```
pub fn parse_lenient_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let int_len = digit_run(unsigned);
    let int_part = &unsigned[..int_len];
    let frac_part = unsigned[int_len..]
        .strip_prefix('.')
        .map(|rest| &rest[..digit_run(rest)])
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let magnitude = if frac_part.is_empty() {
        Decimal::from_str(int_part)
    } else {
        Decimal::from_str(&format!("{int_part}.{frac_part}"))
    }
    .ok()?;

    Some(if negative { -magnitude } else { magnitude })
}
