// ============================================================================
// Amount
// Immutable monetary value with float-error-free arithmetic
// ============================================================================

mod coerce;

pub use coerce::IntoAmount;

use crate::math;
use crate::numeric::scaling;
use crate::numeric::{parse_leading_f64, AmountError, AmountResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// An immutable monetary amount backed by an `f64`.
///
/// Arithmetic goes through a scaled-integer engine so that decimal operands
/// combine exactly: `0.1 + 0.2` yields `0.3`, not `0.30000000000000004`.
/// Operations whose scaled-integer result would leave the safe integer range
/// fail with [`AmountError::Range`] instead of returning a corrupted value.
///
/// The stored value is always finite and kept at full precision; rounding is
/// applied only on demand for display. Every operation returns a new
/// `Amount`.
///
/// # Example
/// ```
/// use exact_money::Amount;
///
/// let subtotal = Amount::new(25.9)?;
/// let discounted = subtotal.checked_sub(6.475)?;
/// assert_eq!(discounted.value(), 19.425);
/// assert_eq!(discounted.rounded(), 19.43);
/// assert_eq!(discounted.to_string(), "19.43");
/// # Ok::<(), exact_money::AmountError>(())
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Amount(f64);

impl Amount {
    /// Decimal digits used by [`rounded`](Self::rounded) and the `Display`
    /// rendering.
    pub const DEFAULT_PRECISION: u32 = 2;

    /// Zero amount
    pub const ZERO: Self = Self(0.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an amount from a raw `f64`.
    ///
    /// # Errors
    /// Returns [`AmountError::Parse`] for NaN or infinite input.
    pub fn new(value: f64) -> AmountResult<Self> {
        if value.is_finite() {
            Ok(Self(fold_negative_zero(value)))
        } else {
            Err(AmountError::Parse)
        }
    }

    /// Convert a [`Decimal`] into an amount.
    ///
    /// This is intended for API boundaries (parsing request payloads and the
    /// like); the conversion takes the nearest double.
    ///
    /// # Errors
    /// Returns [`AmountError::Parse`] when the value has no double
    /// representation.
    pub fn from_decimal(value: Decimal) -> AmountResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        value.to_f64().ok_or(AmountError::Parse).and_then(Self::new)
    }

    // ========================================================================
    // Accessors & display
    // ========================================================================

    /// The full-precision stored value. Never rounded.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The value rounded to `precision` decimal digits, half away from zero.
    ///
    /// Pure: the stored value is unaffected and repeated calls with any
    /// precision return the same result.
    pub fn rounded_value(self, precision: u32) -> f64 {
        math::round_to_digits(self.0, precision)
    }

    /// The value rounded to [`DEFAULT_PRECISION`](Self::DEFAULT_PRECISION)
    /// decimal digits.
    #[inline]
    pub fn rounded(self) -> f64 {
        self.rounded_value(Self::DEFAULT_PRECISION)
    }

    /// Decimal-string rendering of [`rounded_value`](Self::rounded_value).
    ///
    /// Uses the shortest rendering of the rounded value, so
    /// `Amount::new(0.3)?.format(2)` is `"0.3"`, not `"0.30"`.
    pub fn format(self, precision: u32) -> String {
        self.rounded_value(precision).to_string()
    }

    /// Convert the rounded value into a [`Decimal`] for API boundaries.
    ///
    /// # Errors
    /// Returns [`AmountError::Range`] when the magnitude exceeds what
    /// `Decimal` can represent.
    pub fn to_decimal(self, precision: u32) -> AmountResult<Decimal> {
        self.format(precision).parse().map_err(|_| AmountError::Range)
    }

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition.
    ///
    /// # Errors
    /// - [`AmountError::Parse`] when `other` cannot be coerced into an amount
    /// - [`AmountError::Range`] when the scaled integer sum leaves the safe
    ///   integer range
    pub fn checked_add(self, other: impl IntoAmount) -> AmountResult<Self> {
        let rhs = other.into_amount()?;
        scaling::checked_add(self.0, rhs.0).and_then(Self::new)
    }

    /// Exact subtraction.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn checked_sub(self, other: impl IntoAmount) -> AmountResult<Self> {
        let rhs = other.into_amount()?;
        scaling::checked_sub(self.0, rhs.0).and_then(Self::new)
    }

    /// Exact multiplication.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn checked_mul(self, other: impl IntoAmount) -> AmountResult<Self> {
        let rhs = other.into_amount()?;
        scaling::checked_mul(self.0, rhs.0).and_then(Self::new)
    }

    // ========================================================================
    // Percentage Operations
    // ========================================================================

    /// Add `percent` percent of the current value.
    ///
    /// `Amount::new(20.0)?.checked_add_percent(50)?` is `30`.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn checked_add_percent(self, percent: impl IntoAmount) -> AmountResult<Self> {
        let pct = percent.into_amount()?;
        self.checked_add(math::percent_of(self.0, pct.0))
    }

    /// Subtract `percent` percent of the current value.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn checked_sub_percent(self, percent: impl IntoAmount) -> AmountResult<Self> {
        let pct = percent.into_amount()?;
        self.checked_sub(math::percent_of(self.0, pct.0))
    }
}

// Negative zero would split zero into two Eq/Ord/Hash identities.
fn fold_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Amount {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Amount {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

// NaN is ruled out by construction and negative zero is folded, so float
// equality is a proper equivalence and total_cmp agrees with it.
impl Eq for Amount {}

impl PartialOrd for Amount {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Amount {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(fold_negative_zero(-self.0))
    }
}

// Infallible operators for ergonomics (panic on error - use checked_* in
// production)
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Amount addition out of safe range")
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Amount subtraction out of safe range")
    }
}

impl Mul for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Amount multiplication out of safe range")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded_value(Self::DEFAULT_PRECISION))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse the leading float prefix of a string.
    ///
    /// Leading whitespace and trailing non-numeric characters are tolerated:
    /// `"12.5 EUR"` parses as `12.5`.
    ///
    /// # Errors
    /// Returns [`AmountError::Parse`] when the input has no numeric prefix or
    /// the prefix denotes a non-finite value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_leading_f64(s).ok_or(AmountError::Parse).and_then(Self::new)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    #[inline]
    fn from(amount: Amount) -> f64 {
        amount.0
    }
}

// ============================================================================
// Tests
// ============================================================================
