use crate::comparison::normalize::parse_number;

/// Whole US dollars with thousands separators, e.g. `"98400.5"` → `$98,401`.
/// Text without a number comes back unchanged.
pub fn format_currency(value: &str) -> String {
    let amount = match parse_number(value) {
        Some(n) => n.round(),
        None => return value.to_string(),
    };

    let digits = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Placeholder for blank display fields.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

/// Bucket value without a trailing `.0`.
pub fn format_bucket(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("1250"), "$1,250");
        assert_eq!(format_currency("USD 1,250,000"), "$1,250,000");
        assert_eq!(format_currency("98400.5"), "$98,401");
        assert_eq!(format_currency("999"), "$999");
        assert_eq!(format_currency("-4500"), "-$4,500");
    }

    #[test]
    fn test_format_currency_passthrough() {
        assert_eq!(format_currency("on request"), "on request");
        assert_eq!(format_currency(""), "");
    }

    #[test]
    fn test_format_bucket() {
        assert_eq!(format_bucket(400.0), "400");
        assert_eq!(format_bucket(12.5), "12.5");
    }
}
