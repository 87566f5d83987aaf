// ============================================================================
// Math Utilities
// Pure helpers consumed by the Amount display and percentage operations
// ============================================================================

use crate::numeric::scaling::shift_decimal;

/// Round `value` to `precision` decimal digits, half away from zero.
///
/// The rounding goes through the same decimal-shift routine as the scaling
/// engine, so the tie is broken on the exact decimal rather than on an
/// already-imprecise float product: `round_to_digits(1.005, 2)` is `1.01`,
/// where `(1.005 * 100.0).round() / 100.0` would give `1.00`.
pub fn round_to_digits(value: f64, precision: u32) -> f64 {
    let shifted = shift_decimal(value, precision as i32);
    if !shifted.is_finite() {
        // The shift overflowed the double range; such magnitudes carry no
        // fractional digits to round.
        return value;
    }
    shift_decimal(shifted.round(), -(precision as i32))
}

/// `value * percent / 100`.
#[inline]
pub fn percent_of(value: f64, percent: f64) -> f64 {
    value * percent / 100.0
}
