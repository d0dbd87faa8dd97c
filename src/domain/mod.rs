// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod field;
pub mod outcome;

pub use config::{BoundKind, Bounds, ConfigError, InputConfig};
pub use field::{FieldView, InputId};
pub use outcome::{EditOutcome, RejectReason};
