// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod change_handler;

pub use change_handler::{
    ChangeHandler, LoggingChangeHandler, NoOpChangeHandler, RecordingChangeHandler,
};
