//! Numeric text handling for metric inputs

/// Parse metric text the way the configurator's form fields read numbers:
/// surrounding whitespace is ignored, empty text counts as zero, anything
/// that isn't a finite decimal number is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    // `f64::from_str` also accepts "inf" and "NaN"
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Shortest round-trip form, written the way a browser prints numbers:
/// plain decimals in `[1e-6, 1e21)`, exponent notation outside it with an
/// explicit sign on positive exponents (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("800"), Some(800.0));
        assert_eq!(parse_number("  -200 "), Some(-200.0));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("--1"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(800.0), "800");
        assert_eq!(format_number(-200.0), "-200");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }
}
