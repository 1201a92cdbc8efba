/// Reads the leading decimal number from form text, the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped, the longest valid prefix (sign, digits, optional
/// fraction, optional exponent) is taken and anything after it is ignored.
/// `Infinity` (optionally signed, exact case) is accepted. Returns None when no
/// number starts the text, so "", "abc" and "-" are all None while "12abc" is 12.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[sign_len..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut end = sign_len;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Threshold text to a usable value. Unparseable or zero falls back to `default`.
pub fn resolve_threshold(text: &str, default: f64) -> f64 {
    match parse_leading_number(text) {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

/// Renders a number the way a browser prints it in text, so "Infinity" rather than
/// "inf", and exponent notation ("1e+21", "1e-7") outside [1e-6, 1e21).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    if value == 0.0 {
        // -0 prints as "0"
        return "0".to_string();
    }
    value.to_string()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_leading_number("15"), Some(15.0));
        assert_eq!(parse_leading_number("0.01"), Some(0.01));
        assert_eq!(parse_leading_number("-3.5"), Some(-3.5));
        assert_eq!(parse_leading_number("+7"), Some(7.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("1e2"), Some(100.0));
        assert_eq!(parse_leading_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn prefix_wins_and_tail_is_ignored() {
        assert_eq!(parse_leading_number("  12abc"), Some(12.0));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("3.2.1"), Some(3.2));
        assert_eq!(parse_leading_number("4e"), Some(4.0));
        assert_eq!(parse_leading_number("4e+"), Some(4.0));
        assert_eq!(parse_leading_number("8 %"), Some(8.0));
    }

    #[test]
    fn no_leading_number() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("   "), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("e5"), None);
        assert_eq!(parse_leading_number("NaN"), None);
        assert_eq!(parse_leading_number("inf"), None);
    }

    #[test]
    fn infinity_spelling_is_exact() {
        assert_eq!(parse_leading_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_number("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_leading_number("infinity"), None);
    }

    #[test]
    fn numbers_print_like_a_browser() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
    }

    #[test]
    fn thresholds_fall_back_on_falsy_values() {
        assert_eq!(resolve_threshold("", 10.0), 10.0);
        assert_eq!(resolve_threshold("abc", 10.0), 10.0);
        assert_eq!(resolve_threshold("0", 32.0), 32.0);
        assert_eq!(resolve_threshold("-0", 32.0), 32.0);
        assert_eq!(resolve_threshold("0.0", 32.0), 32.0);
        assert_eq!(resolve_threshold("12.5", 10.0), 12.5);
        // Negative values are truthy, so they stick.
        assert_eq!(resolve_threshold("-4", 10.0), -4.0);
    }
}
