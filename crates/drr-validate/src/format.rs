/// Format a number with comma thousands grouping and at most three
/// fraction digits, e.g. `-500,000` or `1,234.568`.
///
/// Trailing fraction zeros are dropped. NaN renders as `NaN` and the
/// infinities as `∞` / `-∞`.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(75_000_000.0), "75,000,000");
        assert_eq!(format_grouped(-500_000.0), "-500,000");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_grouped(0.5), "0.5");
        assert_eq!(format_grouped(1234.5678), "1,234.568");
        assert_eq!(format_grouped(-1.25), "-1.25");
        assert_eq!(format_grouped(2.0001), "2");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
        assert_eq!(format_grouped(f64::NEG_INFINITY), "-∞");
    }
}
