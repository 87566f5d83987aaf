// ============================================================================
// Scaling Engine
// Exact decimal arithmetic via scaled-integer normalization
// ============================================================================
//
// Binary floats cannot represent most decimal fractions, so adding them
// accumulates representation error (0.1 + 0.2 == 0.30000000000000004). The
// engine converts each operand into an integer scaled by 10^SCALE_DIGITS,
// combines the integers (exact within the safe-integer range), then shifts
// the result back to a decimal value.
//
// The decimal shift itself goes through the value's decimal rendering: the
// numeral "{value}e{exponent}" is reparsed instead of multiplying by a power
// of ten. Reparsing yields the nearest double to the exactly-shifted decimal,
// while a float multiply would compound two already-imprecise doubles.

use super::errors::{AmountError, AmountResult};

/// Decimal digits of sub-unit precision retained during normalization.
pub const SCALE_DIGITS: i32 = 6;

/// Largest integer exactly representable in an `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest integer exactly representable in an `f64` (-(2^53 - 1)).
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Check that `n` lies strictly inside the safe integer range.
///
/// The boundary values themselves are treated as unsafe, and so are NaN and
/// the infinities produced by an overflowed decimal shift.
#[inline]
pub fn in_safe_integer_range(n: f64) -> bool {
    n > MIN_SAFE_INTEGER && n < MAX_SAFE_INTEGER
}

/// Shift `value` by `exponent` decimal places through its decimal rendering.
pub(crate) fn shift_decimal(value: f64, exponent: i32) -> f64 {
    debug_assert!(value.is_finite());
    // Display of a finite f64 never contains an exponent or a sign other
    // than a leading minus, so the concatenation is a valid float literal.
    format!("{value}e{exponent}")
        .parse()
        .expect("decimal rendering plus exponent suffix is a valid float literal")
}

/// Normalize a decimal value into its scaled-integer form:
/// `round(value * 10^SCALE_DIGITS)`, half away from zero.
pub(crate) fn normalize(value: f64) -> f64 {
    shift_decimal(value, SCALE_DIGITS).round()
}

/// Exact addition: combine scaled integers, rescale by `-SCALE_DIGITS`.
pub(crate) fn checked_add(lhs: f64, rhs: f64) -> AmountResult<f64> {
    combine(lhs, rhs, |a, b| a + b, SCALE_DIGITS)
}

/// Exact subtraction: combine scaled integers, rescale by `-SCALE_DIGITS`.
pub(crate) fn checked_sub(lhs: f64, rhs: f64) -> AmountResult<f64> {
    combine(lhs, rhs, |a, b| a - b, SCALE_DIGITS)
}

/// Exact multiplication. Both operands carry a factor of `10^SCALE_DIGITS`,
/// so the product is rescaled by `-2 * SCALE_DIGITS`.
pub(crate) fn checked_mul(lhs: f64, rhs: f64) -> AmountResult<f64> {
    combine(lhs, rhs, |a, b| a * b, 2 * SCALE_DIGITS)
}

fn combine(
    lhs: f64,
    rhs: f64,
    op: impl FnOnce(f64, f64) -> f64,
    rescale: i32,
) -> AmountResult<f64> {
    let combined = op(normalize(lhs), normalize(rhs));

    // Beyond the safe range, integer arithmetic in an f64 silently loses
    // precision. Refuse rather than rescale a corrupted result.
    if !in_safe_integer_range(combined) {
        tracing::debug!(combined, "scaled integer result outside the safe range");
        return Err(AmountError::Range);
    }

    Ok(shift_decimal(combined, -rescale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_decimal_up() {
        assert_eq!(shift_decimal(0.1, 6), 100_000.0);
        assert_eq!(shift_decimal(0.2, 6), 200_000.0);
        assert_eq!(shift_decimal(-6.475, 6), -6_475_000.0);
        assert_eq!(shift_decimal(0.0, 6), 0.0);
    }

    #[test]
    fn test_shift_decimal_down() {
        assert_eq!(shift_decimal(300_000.0, -6), 0.3);
        assert_eq!(shift_decimal(20_000_000_000.0, -12), 0.02);
    }

    #[test]
    fn test_shift_avoids_multiply_error() {
        // A plain float multiply reintroduces representation error for
        // some inputs; the string shift must not.
        assert_eq!(shift_decimal(1.005, 2), 100.5);
        assert_ne!(1.005_f64 * 100.0, 100.5);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0.1), 100_000.0);
        assert_eq!(normalize(25.9), 25_900_000.0);
        assert_eq!(normalize(-0.000001), -1.0);
        // Sub-scale digits are rounded away, half away from zero.
        assert_eq!(normalize(0.0000015), 2.0);
        assert_eq!(normalize(-0.0000015), -2.0);
        assert_eq!(normalize(0.0000004), 0.0);
    }

    #[test]
    fn test_safe_integer_range() {
        assert!(in_safe_integer_range(0.0));
        assert!(in_safe_integer_range(MAX_SAFE_INTEGER - 1.0));
        assert!(in_safe_integer_range(MIN_SAFE_INTEGER + 1.0));

        // Open interval: the bounds themselves are unsafe.
        assert!(!in_safe_integer_range(MAX_SAFE_INTEGER));
        assert!(!in_safe_integer_range(MIN_SAFE_INTEGER));
        assert!(!in_safe_integer_range(MAX_SAFE_INTEGER + 2.0));
        assert!(!in_safe_integer_range(f64::INFINITY));
        assert!(!in_safe_integer_range(f64::NEG_INFINITY));
        assert!(!in_safe_integer_range(f64::NAN));
    }

    #[test]
    fn test_checked_add_exact() {
        assert_eq!(checked_add(0.1, 0.2), Ok(0.3));
        assert_eq!(checked_add(1.005, 0.005), Ok(1.01));
        // The naive float sum is the classic failure case.
        assert_ne!(0.1_f64 + 0.2_f64, 0.3);
    }

    #[test]
    fn test_checked_sub_exact() {
        assert_eq!(checked_sub(25.9, 6.475), Ok(19.425));
        assert_eq!(checked_sub(0.3, 0.1), Ok(0.2));
    }

    #[test]
    fn test_checked_mul_exact() {
        assert_eq!(checked_mul(0.1, 0.2), Ok(0.02));
        assert_eq!(checked_mul(1.5, 1.5), Ok(2.25));
        assert_eq!(checked_mul(-0.5, 0.5), Ok(-0.25));
    }

    #[test]
    fn test_range_guard_rejects_large_sum() {
        // 9007199256 * 10^6 already exceeds 2^53 once combined.
        assert_eq!(checked_add(9_007_199_256.0, 1.0), Err(AmountError::Range));
        assert_eq!(checked_sub(-9_007_199_256.0, 1.0), Err(AmountError::Range));
    }

    #[test]
    fn test_range_guard_rejects_large_product() {
        // Each operand normalizes safely but the product does not.
        assert_eq!(checked_mul(100_000.0, 100_000.0), Err(AmountError::Range));
    }

    #[test]
    fn test_range_guard_rejects_overflowed_shift() {
        // Normalization of a huge value overflows to infinity, which must
        // fail the guard instead of reaching the rescale step.
        assert_eq!(checked_add(1.0e308, 1.0), Err(AmountError::Range));
    }

    #[test]
    fn test_combine_within_range_near_bound() {
        // Just inside the guard: 9007199254 * 10^6 + 10^6 < 2^53 - 1.
        let result = checked_add(9_007_199_253.0, 1.0);
        assert_eq!(result, Ok(9_007_199_254.0));
    }
}
