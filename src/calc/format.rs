//! Rendering computed values back into display text.

/// Render a computed value as display text.
///
/// Uses the shortest decimal form that round-trips the value, never
/// exponent notation. Negative zero renders as `"0"`. Non-finite values
/// cannot be shown as a decimal literal and render as `"0"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        tracing::warn!(%value, "non-finite result, displaying 0");
        return "0".into();
    }
    if value == 0.0 {
        return "0".into();
    }
    format!("{}", value)
}

/// Check that `text` is a plain decimal literal: an optional leading `-`,
/// at least one digit, and at most one `.`.
pub fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_fractions_are_shortest_roundtrip() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_decimal_literal_check() {
        assert!(is_decimal_literal("0"));
        assert!(is_decimal_literal("0."));
        assert!(is_decimal_literal("-12.5"));
        assert!(!is_decimal_literal(""));
        assert!(!is_decimal_literal("-"));
        assert!(!is_decimal_literal("1.2.3"));
        assert!(!is_decimal_literal("1e5"));
    }
}
