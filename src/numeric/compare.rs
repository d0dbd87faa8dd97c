// ============================================================================
// Range Comparator
// Arbitrary-precision ordering of raw digit strings
// ============================================================================

use std::cmp::Ordering;

/// Strip leading zeros, treating an empty or all-zero string as `"0"`.
#[inline]
pub(crate) fn strip_leading_zeros(raw: &str) -> &str {
    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Compare two raw amounts as non-negative integers of unbounded size.
///
/// Both inputs are expected to be ASCII digit strings. Leading zeros are
/// ignored and an empty string compares equal to zero.
///
/// # Example
/// ```
/// use bignumber_input::numeric::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("99", "100"), Ordering::Less);
/// assert_eq!(compare("007", "7"), Ordering::Equal);
/// assert_eq!(compare("", "0"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);

    // Equal-length digit strings order lexicographically exactly as numbers do
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Check that `value` lies within the inclusive bounds.
///
/// An absent bound leaves that side unbounded.
#[inline]
pub fn in_range(value: &str, min: Option<&str>, max: Option<&str>) -> bool {
    let above_min = min.map_or(true, |min| compare(value, min) != Ordering::Less);
    let below_max = max.map_or(true, |max| compare(value, max) != Ordering::Greater);
    above_min && below_max
}
