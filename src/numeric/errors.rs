// ============================================================================
// Numeric Errors
// Error types for raw/display amount conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while converting between raw and display amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Display string does not have the `digits[.digits]` shape
    InvalidFormat,
    /// Raw string contains something other than ASCII digits
    InvalidRaw,
    /// Conversion would drop fractional digits
    PrecisionLoss,
    /// Value does not fit the target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(f, "invalid format: expected digits with an optional decimal point")
            },
            NumericError::InvalidRaw => {
                write!(f, "invalid raw amount: expected ASCII digits only")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value has more fractional digits than allowed"
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
