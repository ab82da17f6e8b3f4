/// Formats an integer with comma-separated thousands
///
/// # Examples
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(-12500), "-12,500");
/// ```
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Rounds a ratio to a whole percentage, halves rounding up.
/// A zero denominator yields 0.
pub fn round_percent(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12500), "12,500");
        assert_eq!(format_number(1234567890), "1,234,567,890");
        assert_eq!(format_number(-1000), "-1,000");
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(5000, 17500), 29);
        assert_eq!(round_percent(1, 2), 50);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(7, 0), 0);
    }
}
