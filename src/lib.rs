// ============================================================================
// Exact Money Library
// Monetary amount arithmetic without binary floating-point rounding error
// ============================================================================

//! # Exact Money
//!
//! A monetary [`Amount`] value type whose add, subtract and multiply do not
//! accumulate binary floating-point representation error.
//!
//! ## How it works
//!
//! Every arithmetic operation normalizes both operands into integers scaled
//! by `10^6` via their decimal renderings, combines them in integer space
//! (exact within the safe integer range of an `f64`), then rescales the
//! result back to a decimal value. Results whose scaled form would leave the
//! safe range fail with [`AmountError::Range`] instead of silently losing
//! precision.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: `0.1 + 0.2` is `0.3`
//! - **Implicit operand coercion** via [`IntoAmount`]: mix amounts, raw
//!   numbers and strings in one expression
//! - **Display-only rounding**: stored values keep full precision
//! - **Percentage helpers** built on the same engine
//! - **Result-based errors**: parse and range failures are visible in every
//!   signature
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! fn invoice() -> AmountResult<()> {
//!     let net: Amount = "249.99".parse()?;
//!     let gross = net.checked_add_percent(19)?;
//!
//!     assert_eq!(gross.rounded(), 297.49);
//!     assert_eq!(gross.to_string(), "297.49");
//!
//!     // The classic failure case, handled exactly:
//!     let sum = Amount::new(0.1)?.checked_add(0.2)?;
//!     assert_eq!(sum.value(), 0.3);
//!     Ok(())
//! }
//! # invoice().unwrap();
//! ```

pub mod amount;
pub mod math;
pub mod numeric;

pub use amount::{Amount, IntoAmount};
pub use numeric::{AmountError, AmountResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::amount::{Amount, IntoAmount};
    pub use crate::numeric::{
        in_safe_integer_range, AmountError, AmountResult, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
        SCALE_DIGITS,
    };
}
