//! Display formatting for derived numbers. Pure string builders; the web
//! crate decides where the strings land.

/// Scientific notation with two fractional digits, e.g. `4.01e13`.
pub fn format_exponential(value: f64) -> String {
    format!("{value:.2e}")
}

// Largest magnitude whose integer digits are still exact in an f64 (2^53).
// Past this, grouping would print garbage digits, so we switch notation.
const GROUPING_MAX: f64 = 9_007_199_254_740_992.0;

/// Comma-grouped rendition of a number, keeping up to three fractional
/// digits with trailing zeros trimmed. `156880.0` becomes `"156,880"`,
/// `4.24` stays `"4.24"`. Magnitudes too large to group exactly fall back
/// to scientific notation.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() || value.abs() >= GROUPING_MAX {
        return format_exponential(value);
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let frac = abs - int_part as f64;
    debug_assert!(frac < 1.0);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));

    // Three digits cover everything after the pre-rounding above.
    let frac_digits = format!("{frac:.3}");
    let frac_digits = frac_digits[2..].trim_end_matches('0');
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// Insert a comma every three digits: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
