//! Permissive decimal scanning.

/// Scan the leading decimal integer of `text`.
///
/// Skips leading ASCII whitespace, accepts an optional `+` or `-`, then
/// consumes digits until the first non-digit. Empty or non-numeric input
/// yields 0; a partial prefix yields its value. Out-of-range input
/// saturates at the `i64` extremes.
pub(crate) fn scan_decimal(text: &str) -> i64 {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest.as_bytes()[1..]),
        Some(b'+') => (false, &rest.as_bytes()[1..]),
        _ => (false, rest.as_bytes()),
    };

    let mut value: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
