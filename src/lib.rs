// ============================================================================
// Big Number Input Library
// Precision-safe decimal entry for arbitrary-precision integer amounts
// ============================================================================

//! # Big Number Input
//!
//! Controlled text-input logic for amounts that the application exchanges as
//! raw integer strings in the smallest unit (wei-like units) while the user
//! types them as decimals.
//!
//! ## Features
//!
//! - **Exact conversion** between raw digit strings and display decimals,
//!   with no floating point and no native integer limits
//! - **Arbitrary-precision bounds** checking against optional min/max
//! - **Controlled input state** that echoes keystrokes, swallows invalid or
//!   out-of-range edits and notifies the host once per accepted edit
//! - **UI-agnostic**: the host renders a [`FieldView`](domain::FieldView) and
//!   feeds change events back
//!
//! ## Example
//!
//! ```rust
//! use bignumber_input::prelude::*;
//! use std::sync::Arc;
//!
//! let recorder = Arc::new(RecordingChangeHandler::new());
//! let mut input = BigNumberInput::new(
//!     InputConfig::new(2).with_value("123").with_max("200"),
//!     recorder.clone(),
//! )
//! .unwrap();
//!
//! assert_eq!(input.display_text(), "1.23");
//!
//! // Accepted edit: notified once with the raw amount
//! input.handle_edit("1.5");
//! assert_eq!(recorder.last().as_deref(), Some("150"));
//!
//! // Above max: swallowed, field unchanged
//! input.handle_edit("3.5");
//! assert_eq!(input.display_text(), "1.5");
//! assert_eq!(recorder.call_count(), 1);
//! ```

pub mod domain;
pub mod input;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BoundKind, Bounds, ConfigError, EditOutcome, FieldView, InputConfig, InputId,
        RejectReason,
    };
    pub use crate::input::{create_from_config, BigNumberInput, BigNumberInputBuilder};
    pub use crate::interfaces::{
        ChangeHandler, LoggingChangeHandler, NoOpChangeHandler, RecordingChangeHandler,
    };
    pub use crate::numeric::{NumericError, ParsedAmount, RawAmount};
}
