// ============================================================================
// Edit Outcome
// What the controller did with one user edit
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an edit was swallowed without changing the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// Text cannot resolve to a number at this scale
    InvalidFormat,
    /// Numerically valid but outside min/max
    OutOfRange,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidFormat => write!(f, "invalid format"),
            RejectReason::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Result of delivering one edit to the controller.
///
/// Only `Cleared` and `Committed` notify the change handler.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOutcome {
    /// Field emptied; handler notified with `""`
    Cleared,

    /// New raw amount accepted; handler notified with `raw`
    Committed { raw: String },

    /// Well-formed prefix kept on screen, handler not notified
    Incomplete,

    /// Edit ignored, field unchanged
    Rejected { reason: RejectReason },
}

impl EditOutcome {
    /// Whether this outcome notified the change handler
    #[inline]
    pub fn notified(&self) -> bool {
        matches!(self, EditOutcome::Cleared | EditOutcome::Committed { .. })
    }

    /// The raw amount sent to the change handler, if any
    pub fn raw(&self) -> Option<&str> {
        match self {
            EditOutcome::Cleared => Some(""),
            EditOutcome::Committed { raw } => Some(raw),
            _ => None,
        }
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected { .. })
    }
}
