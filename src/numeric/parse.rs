// ============================================================================
// Leading-Prefix Float Parsing
// Extracts the longest valid numeric prefix from user input
// ============================================================================

/// Parse the longest base-10 float prefix of `input`.
///
/// Leading whitespace is skipped and trailing non-numeric characters are
/// ignored, so `"12.5 EUR"` parses as `12.5`. Returns `None` when the input
/// carries no numeric prefix at all.
///
/// A malformed exponent suffix is not part of the prefix: `"1e"` and `"1e+x"`
/// both parse as `1.0`.
pub(crate) fn parse_leading_f64(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_len = digit_run(&bytes[end..]);
    end += int_len;

    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digit_run(&bytes[end + 1..]);
        // A bare "." (or sign + ".") is not a number; keep the dot only when
        // digits surround it on at least one side.
        if int_len > 0 || frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    if int_len == 0 && frac_len == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_len = digit_run(&bytes[cursor..]);
        if exp_len > 0 {
            end = cursor + exp_len;
        }
    }

    // The scanned prefix is pure ASCII, so the slice is on a char boundary.
    s[..end].parse().ok()
}

#[inline]
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_f64("42"), Some(42.0));
        assert_eq!(parse_leading_f64("12.5"), Some(12.5));
        assert_eq!(parse_leading_f64("-0.001"), Some(-0.001));
        assert_eq!(parse_leading_f64("+3.25"), Some(3.25));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("7."), Some(7.0));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_leading_f64("12.5 EUR"), Some(12.5));
        assert_eq!(parse_leading_f64("100abc"), Some(100.0));
        assert_eq!(parse_leading_f64("3.14.15"), Some(3.14));
        assert_eq!(parse_leading_f64("-9,99"), Some(-9.0));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_leading_f64("   19.425"), Some(19.425));
        assert_eq!(parse_leading_f64("\t-5"), Some(-5.0));
    }

    #[test]
    fn test_exponent_suffix() {
        assert_eq!(parse_leading_f64("1.5e3"), Some(1500.0));
        assert_eq!(parse_leading_f64("2E-2"), Some(0.02));
        assert_eq!(parse_leading_f64("300000e-6"), Some(0.3));
    }

    #[test]
    fn test_malformed_exponent_not_consumed() {
        assert_eq!(parse_leading_f64("1e"), Some(1.0));
        assert_eq!(parse_leading_f64("1e+"), Some(1.0));
        assert_eq!(parse_leading_f64("1e+x"), Some(1.0));
        assert_eq!(parse_leading_f64("2.5eur"), Some(2.5));
    }

    #[test]
    fn test_no_numeric_prefix() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("randomString"), None);
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("+."), None);
        assert_eq!(parse_leading_f64("."), None);
        assert_eq!(parse_leading_f64("e5"), None);
        assert_eq!(parse_leading_f64("EUR 12.5"), None);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(parse_leading_f64("１２３"), None);
        assert_eq!(parse_leading_f64("€5"), None);
    }

    #[test]
    fn test_overflowing_literal_parses_to_infinity() {
        // The finiteness invariant is enforced at Amount construction,
        // not here.
        assert_eq!(parse_leading_f64("1e999"), Some(f64::INFINITY));
    }
}
