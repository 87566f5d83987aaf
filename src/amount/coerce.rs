// ============================================================================
// Amount Coercion
// Uniform conversion of raw numbers and strings into Amount
// ============================================================================

use super::Amount;
use crate::numeric::AmountResult;

/// Conversion into an [`Amount`], applied at the start of every binary
/// operation so that raw numbers and strings mix freely with existing
/// amounts.
///
/// # Example
/// ```
/// use exact_money::{Amount, IntoAmount};
///
/// let total = Amount::new(0.1)?.checked_add("0.2")?;
/// assert_eq!(total.value(), 0.3);
///
/// let from_str = "19.425".into_amount()?;
/// assert_eq!(from_str.value(), 19.425);
/// # Ok::<(), exact_money::AmountError>(())
/// ```
pub trait IntoAmount {
    /// Convert `self` into an [`Amount`].
    ///
    /// # Errors
    /// Returns [`AmountError::Parse`](crate::AmountError::Parse) when the
    /// input is not a finite number or carries no numeric prefix.
    fn into_amount(self) -> AmountResult<Amount>;
}

impl IntoAmount for Amount {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Ok(self)
    }
}

impl IntoAmount for &Amount {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Ok(*self)
    }
}

impl IntoAmount for f64 {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Amount::new(self)
    }
}

impl IntoAmount for f32 {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Amount::new(f64::from(self))
    }
}

impl IntoAmount for i64 {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Amount::new(self as f64)
    }
}

impl IntoAmount for i32 {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Amount::new(f64::from(self))
    }
}

impl IntoAmount for u32 {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        Amount::new(f64::from(self))
    }
}

impl IntoAmount for &str {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        self.parse()
    }
}

impl IntoAmount for String {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        self.as_str().parse()
    }
}

impl IntoAmount for &String {
    #[inline]
    fn into_amount(self) -> AmountResult<Amount> {
        self.as_str().parse()
    }
}
