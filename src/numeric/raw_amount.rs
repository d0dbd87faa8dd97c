// ============================================================================
// Raw Amount
// Validated arbitrary-precision integer amount in the smallest unit
// ============================================================================

use super::codec::{format_digits, is_digits, to_raw, ParsedAmount};
use super::compare::{compare, strip_leading_zeros};
use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-negative integer amount of unbounded size, stored as ASCII digits.
///
/// An empty amount means "no value" and compares equal to zero. Leading
/// zeros are kept as given but ignored by equality, ordering and hashing.
///
/// # Example
/// ```
/// use bignumber_input::numeric::RawAmount;
///
/// let wei: RawAmount = "1500000000000000000".parse().unwrap();
/// assert_eq!(wei.to_display(18), "1.500000000000000000");
/// assert!(wei > "999".parse().unwrap());
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RawAmount(String);

impl RawAmount {
    /// The empty amount
    pub const EMPTY: Self = Self(String::new());

    /// Validate and wrap a raw digit string.
    ///
    /// # Errors
    /// Returns `InvalidRaw` if `raw` contains anything but ASCII digits.
    pub fn parse(raw: &str) -> NumericResult<Self> {
        if is_digits(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(NumericError::InvalidRaw)
        }
    }

    /// Parse user-typed display text at the given scale.
    ///
    /// Returns `Ok(None)` for an incomplete prefix such as `"1."`.
    pub fn from_display(display: &str, decimals: u8) -> NumericResult<Option<Self>> {
        Ok(match to_raw(display, decimals)? {
            ParsedAmount::Complete(raw) => Some(Self(raw)),
            ParsedAmount::Incomplete => None,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for the empty amount as well as any all-zero string.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Same amount without leading zeros; the empty amount stays empty.
    pub fn normalized(&self) -> Self {
        if self.is_empty() {
            Self::EMPTY
        } else {
            Self(strip_leading_zeros(&self.0).to_string())
        }
    }

    /// Format for display with `decimals` fractional digits.
    #[inline]
    pub fn to_display(&self, decimals: u8) -> String {
        format_digits(&self.0, decimals)
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`, interpreting the amount at the
    /// given scale.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount does not fit Decimal's 96-bit
    /// mantissa or `decimals` exceeds its maximum scale of 28.
    pub fn to_decimal(&self, decimals: u8) -> NumericResult<Decimal> {
        let mantissa: i128 = strip_leading_zeros(&self.0)
            .parse()
            .map_err(|_| NumericError::Overflow)?;

        Decimal::try_from_i128_with_scale(mantissa, decimals as u32)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal` at the given scale.
    ///
    /// # Errors
    /// - `InvalidFormat` if the value is negative
    /// - `PrecisionLoss` if it has more significant fractional digits than
    ///   `decimals`
    pub fn from_decimal(d: Decimal, decimals: u8) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::InvalidFormat);
        }

        let d = d.abs().normalize();
        if d.scale() > decimals as u32 {
            return Err(NumericError::PrecisionLoss);
        }

        match to_raw(&d.to_string(), decimals)? {
            ParsedAmount::Complete(raw) => Ok(Self(raw)),
            ParsedAmount::Incomplete => Err(NumericError::InvalidFormat),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for RawAmount {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for RawAmount {}

impl PartialOrd for RawAmount {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RawAmount {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl Hash for RawAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        strip_leading_zeros(&self.0).hash(state);
    }
}

impl FromStr for RawAmount {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RawAmount {
    type Error = NumericError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if is_digits(&raw) {
            Ok(Self(raw))
        } else {
            Err(NumericError::InvalidRaw)
        }
    }
}

impl From<RawAmount> for String {
    fn from(amount: RawAmount) -> Self {
        amount.0
    }
}

impl AsRef<str> for RawAmount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawAmount({:?})", self.0)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
