//! Display formatting for amounts stored in cents.

/// Format cents as US dollars, e.g. `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0), "$0.00");
    }

    #[test]
    fn formats_cents_only() {
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(99), "$0.99");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(15795), "$157.95");
        assert_eq!(format_currency(123_456), "$1,234.56");
        assert_eq!(format_currency(100_000_000), "$1,000,000.00");
    }

    #[test]
    fn formats_negative() {
        assert_eq!(format_currency(-1230), "-$12.30");
    }

    #[test]
    fn formats_extremes() {
        assert_eq!(format_currency(i64::MIN), "-$92,233,720,368,547,758.08");
    }
}
