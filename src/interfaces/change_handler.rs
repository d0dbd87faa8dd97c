// ============================================================================
// Change Handler Interface
// Defines the contract for receiving accepted raw amounts
// ============================================================================

use parking_lot::Mutex;

/// Notification sink injected into a big number input.
///
/// `on_change` is called exactly once per accepted edit or clear, with the
/// raw amount in the smallest unit (`""` when cleared). It is never called
/// for rejected or incomplete edits, nor for host-driven prop updates.
pub trait ChangeHandler: Send + Sync {
    /// Handle a newly accepted raw amount
    fn on_change(&self, raw: &str);
}

impl<F> ChangeHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_change(&self, raw: &str) {
        self(raw)
    }
}

/// No-op change handler for read-only hosts
pub struct NoOpChangeHandler;

impl ChangeHandler for NoOpChangeHandler {
    fn on_change(&self, _raw: &str) {
        // Do nothing
    }
}

/// Logging change handler
pub struct LoggingChangeHandler;

impl ChangeHandler for LoggingChangeHandler {
    fn on_change(&self, raw: &str) {
        tracing::debug!("Big number input changed: {:?}", raw);
    }
}

/// Change handler that keeps every notification it receives
#[derive(Default)]
pub struct RecordingChangeHandler {
    values: Mutex<Vec<String>>,
}

impl RecordingChangeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notified raw amounts, oldest first
    pub fn values(&self) -> Vec<String> {
        self.values.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.values.lock().len()
    }

    pub fn last(&self) -> Option<String> {
        self.values.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.values.lock().clear();
    }
}

impl ChangeHandler for RecordingChangeHandler {
    fn on_change(&self, raw: &str) {
        self.values.lock().push(raw.to_string());
    }
}
