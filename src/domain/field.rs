// ============================================================================
// Field Domain Model
// Identity and render description of one input field
// ============================================================================

use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputId(Uuid);

impl InputId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InputId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the host's text-input primitive should render.
///
/// `value` is the controller's display text; `placeholder` and `disabled`
/// pass through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldView {
    pub value: String,
    pub placeholder: Option<String>,
    pub disabled: bool,
}

impl FieldView {
    /// Whether the placeholder is visible (field shows no text)
    #[inline]
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }
}
