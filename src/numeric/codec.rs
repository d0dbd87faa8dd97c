// ============================================================================
// Decimal Codec
// Lossless conversion between raw integer strings and display decimals
// ============================================================================

use super::compare::strip_leading_zeros;
use super::errors::{NumericError, NumericResult};

/// Result of parsing user-typed display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAmount {
    /// A complete value, expressed as a raw amount in the smallest unit.
    /// Empty when the input was empty.
    Complete(String),
    /// A well-formed prefix of a number such as `"1."` or `"."`.
    Incomplete,
}

impl ParsedAmount {
    /// The raw amount, if parsing produced a complete value.
    #[inline]
    pub fn raw(&self) -> Option<&str> {
        match self {
            ParsedAmount::Complete(raw) => Some(raw),
            ParsedAmount::Incomplete => None,
        }
    }

    #[inline]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParsedAmount::Incomplete)
    }
}

#[inline]
pub(crate) fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Format a raw amount for display with `decimals` fractional digits.
///
/// The raw string is left-padded with zeros so that at least one integer
/// digit remains, then a point is inserted `decimals` places from the right.
/// Redundant leading zeros of the integer part are dropped.
///
/// # Examples
/// - `("123", 2)` -> `"1.23"`
/// - `("5", 2)` -> `"0.05"`
/// - `("123", 0)` -> `"123"`
/// - `("", 2)` -> `""`
///
/// # Errors
/// Returns `InvalidRaw` if `raw` contains anything but ASCII digits.
pub fn to_display(raw: &str, decimals: u8) -> NumericResult<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }
    if !is_digits(raw) {
        return Err(NumericError::InvalidRaw);
    }
    Ok(format_digits(raw, decimals))
}

/// Formatting step of [`to_display`] for input already known to be digits.
pub(crate) fn format_digits(raw: &str, decimals: u8) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if decimals == 0 {
        return raw.to_string();
    }

    let width = decimals as usize;
    let padded = if raw.len() > width {
        raw.to_string()
    } else {
        format!("{:0>width$}", raw, width = width + 1)
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - width);
    format!("{}.{}", strip_leading_zeros(int_part), frac_part)
}

/// Parse user-typed display text into a raw amount.
///
/// Accepts `digits`, `digits.digits`, and `.digits`, with at most `decimals`
/// digits after the point. The fraction is right-padded to exactly
/// `decimals` digits and the result is stripped of leading zeros (zero is
/// `"0"`). Empty input parses to an empty raw amount.
///
/// A point with nothing after it (`"1."`, `"."`) is `Incomplete`.
///
/// # Errors
/// Returns `InvalidFormat` for signs, letters, whitespace, a second point,
/// too many fractional digits, or any point when `decimals == 0`.
pub fn to_raw(display: &str, decimals: u8) -> NumericResult<ParsedAmount> {
    if display.is_empty() {
        return Ok(ParsedAmount::Complete(String::new()));
    }

    let width = decimals as usize;
    let (int_part, frac_part) = match display.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (display, None),
    };

    if !is_digits(int_part) {
        return Err(NumericError::InvalidFormat);
    }

    let frac_part = match frac_part {
        None => "",
        Some(frac) => {
            // A second point lands in `frac` and fails the digit check
            if decimals == 0 || !is_digits(frac) || frac.len() > width {
                return Err(NumericError::InvalidFormat);
            }
            if frac.is_empty() {
                return Ok(ParsedAmount::Incomplete);
            }
            frac
        },
    };

    let mut digits = String::with_capacity(int_part.len() + width);
    digits.push_str(int_part);
    digits.push_str(frac_part);
    digits.extend(std::iter::repeat('0').take(width - frac_part.len()));

    Ok(ParsedAmount::Complete(strip_leading_zeros(&digits).to_string()))
}

/// Whether `display` is acceptable field content: a complete value, an
/// incomplete prefix, or empty.
#[inline]
pub fn is_valid_display(display: &str, decimals: u8) -> bool {
    to_raw(display, decimals).is_ok()
}
