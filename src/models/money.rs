/// Insert thousands separators into a non-negative integer: `4500` -> `"4,500"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a dollar amount in en-US style with cents: `4500.0` -> `"$4,500.00"`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Like [`format_usd`] but drops the cents for whole-dollar amounts:
/// `4500.0` -> `"$4,500"`, `44.1` -> `"$44.10"`.
pub fn format_usd_compact(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    if cents % 100 == 0 {
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{}${}", sign, group_thousands(cents / 100))
    } else {
        format_usd(amount)
    }
}

/// Parse a currency amount from user or file input.
///
/// Accepts an optional leading `$` and thousands separators: `"$1,234.50"`.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(4500), "4,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(44.1), "$44.10");
        assert_eq!(format_usd(4500.0), "$4,500.00");
        assert_eq!(format_usd(-251.0), "-$251.00");
    }

    #[test]
    fn test_format_usd_compact() {
        assert_eq!(format_usd_compact(4500.0), "$4,500");
        assert_eq!(format_usd_compact(44.1), "$44.10");
        assert_eq!(format_usd_compact(0.0), "$0");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("44.10"), Some(44.1));
        assert_eq!(parse_currency("$1,234.50"), Some(1234.5));
        assert_eq!(parse_currency(" 0 "), Some(0.0));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("abc"), None);
    }
}
