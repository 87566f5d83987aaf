// ============================================================================
// Amount Errors
// Error types for exact monetary arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or combining amounts.
///
/// Both variants are terminal for the triggering call: there is no fallback
/// value and no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountError {
    /// Input could not be interpreted as a base-10 floating point number
    Parse,
    /// Scaled integer result fell outside the safe integer range
    Range,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Parse => {
                write!(f, "amount could not be parsed into a floating point number.")
            },
            AmountError::Range => write!(f, "numbers are too big to calculate safely"),
        }
    }
}

impl std::error::Error for AmountError {}

/// Result type alias for amount operations
pub type AmountResult<T> = Result<T, AmountError>;
