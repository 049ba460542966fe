//! Coercion of free-form spreadsheet text into comparable values.
//!
//! Nothing here fails: garbage text becomes `0.0` so a bad cell can never
//! keep a comparison from rendering.

/// Parse a numeric cell such as `"1,250 USD"` or `"-3.5 t"`.
///
/// Every character other than a digit, `.` or `-` is removed, then the
/// longest leading `-?digits[.digits]` run is parsed. No digits, or a
/// non-finite result, yields `0.0`.
pub fn to_number(value: &str) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

/// Like [`to_number`], but `None` where no number could be read.
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    numeric_prefix(&cleaned)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn numeric_prefix(cleaned: &str) -> &str {
    let bytes = cleaned.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            digits += 1;
        }
        end = frac_end;
    }

    if digits == 0 {
        ""
    } else {
        &cleaned[..end]
    }
}

/// Round half up, the way `Math.round` does.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
