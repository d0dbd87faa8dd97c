// ============================================================================
// Big Number Input
// Controlled text-input state for arbitrary-precision amounts
// ============================================================================

use crate::domain::{
    Bounds, ConfigError, EditOutcome, FieldView, InputConfig, InputId, RejectReason,
};
use crate::interfaces::ChangeHandler;
use crate::numeric::RawAmount;
use std::sync::Arc;

/// Controlled input for raw amounts entered as decimals.
///
/// Holds two pieces of state: the raw amount last received from the host or
/// notified outward, and the free-form text currently shown in the field.
/// The text is re-derived from the raw amount only when the host supplies a
/// different value or scale.
pub struct BigNumberInput {
    /// Instance identifier used in log fields
    id: InputId,

    /// Fractional digits between raw and display form
    decimals: u8,

    /// Inclusive min/max applied to user edits
    bounds: Bounds,

    /// Last raw amount supplied by the host or accepted from the user
    committed_raw: RawAmount,

    /// Text shown in the field
    display_text: String,

    /// Passthrough presentation options
    placeholder: Option<String>,
    disabled: bool,

    /// Notification sink for accepted edits
    change_handler: Arc<dyn ChangeHandler>,
}

impl BigNumberInput {
    /// Create an input from host props.
    ///
    /// The field starts out showing the configured value in display form.
    /// No notification is sent.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn new(
        config: InputConfig,
        change_handler: Arc<dyn ChangeHandler>,
    ) -> Result<Self, ConfigError> {
        let (committed_raw, bounds) = config.validated_parts()?;
        let display_text = committed_raw.to_display(config.decimals);

        let input = Self {
            id: InputId::new(),
            decimals: config.decimals,
            bounds,
            committed_raw,
            display_text,
            placeholder: config.placeholder,
            disabled: config.disabled,
            change_handler,
        };

        tracing::debug!(
            input_id = %input.id,
            decimals = input.decimals,
            display = %input.display_text,
            "Big number input created"
        );

        Ok(input)
    }

    /// Apply new host props.
    ///
    /// The display text is recomputed when the raw value or the scale differs
    /// from what the input already holds; bounds and presentation options
    /// are replaced silently. Never notifies the change handler.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found in `config`; the input is left
    /// unchanged in that case.
    pub fn update(&mut self, config: InputConfig) -> Result<(), ConfigError> {
        let (raw, bounds) = match config.validated_parts() {
            Ok(parts) => parts,
            Err(err) => {
                tracing::warn!(input_id = %self.id, error = %err, "Rejected prop update");
                return Err(err);
            },
        };

        self.bounds = bounds;
        self.placeholder = config.placeholder;
        self.disabled = config.disabled;
        self.apply_value(raw, config.decimals);

        Ok(())
    }

    /// Apply a new host-owned raw value, keeping every other prop.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `value` is not a raw digit string.
    pub fn set_value(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let raw = RawAmount::parse(value.unwrap_or("")).map_err(|_| {
            tracing::warn!(input_id = %self.id, "Rejected non-digit raw value");
            ConfigError::InvalidValue
        })?;

        self.apply_value(raw, self.decimals);
        Ok(())
    }

    /// Deliver the field's new text after a user edit.
    ///
    /// - Empty text always clears and notifies `""`, regardless of bounds.
    /// - An incomplete prefix (`"1."`) is shown but not notified.
    /// - Malformed or out-of-range text is ignored; the field keeps its
    ///   previous text, which may itself be an incomplete prefix.
    /// - Anything else is shown verbatim and its raw amount notified once.
    pub fn handle_edit(&mut self, text: &str) -> EditOutcome {
        if text.is_empty() {
            self.display_text.clear();
            self.committed_raw = RawAmount::EMPTY;
            tracing::debug!(input_id = %self.id, "Big number input cleared");
            self.change_handler.on_change("");
            return EditOutcome::Cleared;
        }

        let raw = match RawAmount::from_display(text, self.decimals) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::trace!(input_id = %self.id, text, "Incomplete edit");
                self.display_text = text.to_string();
                return EditOutcome::Incomplete;
            },
            Err(err) => {
                tracing::trace!(input_id = %self.id, text, error = %err, "Rejected edit");
                return EditOutcome::Rejected {
                    reason: RejectReason::InvalidFormat,
                };
            },
        };

        if !self.bounds.contains(raw.as_str()) {
            tracing::trace!(input_id = %self.id, raw = %raw, "Edit out of range");
            return EditOutcome::Rejected {
                reason: RejectReason::OutOfRange,
            };
        }

        self.display_text = text.to_string();
        self.committed_raw = raw;
        tracing::debug!(
            input_id = %self.id,
            raw = %self.committed_raw,
            "Big number input changed"
        );
        self.change_handler.on_change(self.committed_raw.as_str());

        EditOutcome::Committed {
            raw: self.committed_raw.to_string(),
        }
    }

    /// Render description for the host's text-input primitive
    pub fn view(&self) -> FieldView {
        FieldView {
            value: self.display_text.clone(),
            placeholder: self.placeholder.clone(),
            disabled: self.disabled,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Text currently shown in the field
    #[inline]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Raw amount last received from the host or notified outward
    #[inline]
    pub fn committed_raw(&self) -> &str {
        self.committed_raw.as_str()
    }

    #[inline]
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn apply_value(&mut self, raw: RawAmount, decimals: u8) {
        // Same digits at the same scale is a re-render, not a change
        if raw.as_str() == self.committed_raw.as_str() && decimals == self.decimals {
            return;
        }

        self.display_text = raw.to_display(decimals);
        self.committed_raw = raw;
        self.decimals = decimals;

        tracing::debug!(
            input_id = %self.id,
            decimals = self.decimals,
            display = %self.display_text,
            "Big number input value replaced by host"
        );
    }
}

impl std::fmt::Debug for BigNumberInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigNumberInput")
            .field("id", &self.id)
            .field("decimals", &self.decimals)
            .field("bounds", &self.bounds)
            .field("committed_raw", &self.committed_raw)
            .field("display_text", &self.display_text)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundKind;
    use crate::interfaces::{NoOpChangeHandler, RecordingChangeHandler};

    fn default_config() -> InputConfig {
        InputConfig::new(2)
            .with_value("123")
            .with_placeholder("Value")
    }

    fn input_with(config: InputConfig) -> (BigNumberInput, Arc<RecordingChangeHandler>) {
        let recorder = Arc::new(RecordingChangeHandler::new());
        let input = BigNumberInput::new(config, recorder.clone()).unwrap();
        (input, recorder)
    }

    #[test]
    fn test_initialized_with_value() {
        let (input, recorder) = input_with(default_config());
        assert_eq!(input.display_text(), "1.23");
        assert_eq!(input.committed_raw(), "123");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_initialized_without_value() {
        let (input, recorder) = input_with(InputConfig::new(2));
        assert_eq!(input.display_text(), "");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = BigNumberInput::new(
            InputConfig::new(2).with_value("1.23"),
            Arc::new(NoOpChangeHandler),
        );
        assert_eq!(result.err(), Some(ConfigError::InvalidValue));
    }

    #[test]
    fn test_edit_notifies_raw_once() {
        let (mut input, recorder) = input_with(default_config());

        let outcome = input.handle_edit("2.30");

        assert_eq!(
            outcome,
            EditOutcome::Committed {
                raw: "230".to_string()
            }
        );
        assert_eq!(recorder.values(), vec!["230".to_string()]);
        assert_eq!(input.display_text(), "2.30");
        assert_eq!(input.committed_raw(), "230");
    }

    #[test]
    fn test_clear_always_notifies() {
        let (mut input, recorder) = input_with(default_config().with_min("100").with_max("200"));

        assert_eq!(input.handle_edit(""), EditOutcome::Cleared);
        assert_eq!(recorder.values(), vec![String::new()]);
        assert_eq!(input.display_text(), "");
        assert_eq!(input.committed_raw(), "");
    }

    #[test]
    fn test_min_rejects_edit() {
        let (mut input, recorder) = input_with(default_config().with_min("100"));

        let outcome = input.handle_edit("0.5");

        assert_eq!(
            outcome,
            EditOutcome::Rejected {
                reason: RejectReason::OutOfRange
            }
        );
        assert_eq!(recorder.call_count(), 0);
        assert_eq!(input.display_text(), "1.23");
        assert_eq!(input.committed_raw(), "123");
    }

    #[test]
    fn test_max_rejects_edit() {
        let (mut input, recorder) = input_with(default_config().with_max("200"));

        assert!(input.handle_edit("3.5").is_rejected());
        assert_eq!(recorder.call_count(), 0);
        assert_eq!(input.display_text(), "1.23");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let (mut input, recorder) = input_with(default_config().with_min("100").with_max("200"));

        assert!(input.handle_edit("1").notified());
        assert!(input.handle_edit("2.00").notified());
        assert_eq!(recorder.values(), vec!["100".to_string(), "200".to_string()]);
    }

    #[test]
    fn test_invalid_format_keeps_previous_text() {
        let (mut input, recorder) = input_with(default_config());

        for text in ["1.2a", "abc", "-1", "1.234", "1..2"] {
            assert_eq!(
                input.handle_edit(text),
                EditOutcome::Rejected {
                    reason: RejectReason::InvalidFormat
                },
                "{text}"
            );
        }

        assert_eq!(input.display_text(), "1.23");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_incomplete_edit_is_shown_not_notified() {
        let (mut input, recorder) = input_with(default_config());

        assert_eq!(input.handle_edit("4."), EditOutcome::Incomplete);
        assert_eq!(input.display_text(), "4.");
        assert_eq!(input.committed_raw(), "123");
        assert_eq!(recorder.call_count(), 0);

        assert!(input.handle_edit("4.5").notified());
        assert_eq!(recorder.values(), vec!["450".to_string()]);
    }

    #[test]
    fn test_out_of_range_after_incomplete_keeps_prefix() {
        let (mut input, recorder) = input_with(default_config().with_max("200"));

        assert_eq!(input.handle_edit("5."), EditOutcome::Incomplete);
        assert_eq!(
            input.handle_edit("5.5"),
            EditOutcome::Rejected {
                reason: RejectReason::OutOfRange
            }
        );

        assert_eq!(input.display_text(), "5.");
        assert_eq!(input.committed_raw(), "123");
        assert_eq!(recorder.call_count(), 0);

        // Backspacing to a value in range still commits
        assert_eq!(input.handle_edit("1."), EditOutcome::Incomplete);
        assert!(input.handle_edit("1.5").notified());
        assert_eq!(recorder.values(), vec!["150".to_string()]);
    }

    #[test]
    fn test_lone_point_is_incomplete() {
        let (mut input, recorder) = input_with(InputConfig::new(2));

        assert_eq!(input.handle_edit("."), EditOutcome::Incomplete);
        assert_eq!(input.display_text(), ".");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_accepted_edit_not_reformatted() {
        let (mut input, _recorder) = input_with(default_config());

        input.handle_edit("02.3");
        assert_eq!(input.display_text(), "02.3");
        assert_eq!(input.committed_raw(), "230");
    }

    #[test]
    fn test_external_value_change_reformats() {
        let (mut input, recorder) = input_with(default_config());
        assert_eq!(input.display_text(), "1.23");

        input.update(default_config().with_value("321")).unwrap();
        assert_eq!(input.display_text(), "3.21");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_external_value_overrides_edit_in_progress() {
        let (mut input, _recorder) = input_with(default_config());

        input.handle_edit("9.");
        input.set_value(Some("321")).unwrap();
        assert_eq!(input.display_text(), "3.21");
    }

    #[test]
    fn test_rerender_with_same_value_keeps_text() {
        let (mut input, _recorder) = input_with(default_config());

        input.handle_edit("7.");
        input.update(default_config()).unwrap();
        assert_eq!(input.display_text(), "7.");
    }

    #[test]
    fn test_host_echo_keeps_user_text() {
        let (mut input, recorder) = input_with(default_config());

        input.handle_edit("2.3");
        let echoed = recorder.last().unwrap();
        input.set_value(Some(&echoed)).unwrap();

        assert_eq!(input.display_text(), "2.3");
    }

    #[test]
    fn test_decimals_change_reformats() {
        let (mut input, _recorder) = input_with(default_config());

        let mut config = default_config();
        config.decimals = 1;
        input.update(config).unwrap();

        assert_eq!(input.decimals(), 1);
        assert_eq!(input.display_text(), "12.3");
    }

    #[test]
    fn test_bounds_change_does_not_reformat() {
        let (mut input, recorder) = input_with(default_config());

        input.handle_edit("1.5");
        input.update(default_config().with_value("150").with_max("100")).unwrap();

        assert_eq!(input.display_text(), "1.5");
        assert_eq!(input.bounds().max(), Some("100"));
        assert!(input.handle_edit("1.6").is_rejected());
        assert_eq!(recorder.call_count(), 1);
    }

    #[test]
    fn test_invalid_update_leaves_state() {
        let (mut input, _recorder) = input_with(default_config());

        let err = input
            .update(default_config().with_value("999").with_min("x"))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBound {
                bound: BoundKind::Min
            }
        );
        assert_eq!(input.display_text(), "1.23");
        assert!(input.bounds().is_unbounded());

        assert_eq!(input.set_value(Some("1e3")), Err(ConfigError::InvalidValue));
        assert_eq!(input.committed_raw(), "123");
    }

    #[test]
    fn test_set_value_none_clears_display() {
        let (mut input, recorder) = input_with(default_config());

        input.set_value(None).unwrap();
        assert_eq!(input.display_text(), "");
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_view_passthrough() {
        let (mut input, _recorder) = input_with(default_config().disabled(true));

        let view = input.view();
        assert_eq!(view.value, "1.23");
        assert_eq!(view.placeholder.as_deref(), Some("Value"));
        assert!(view.disabled);

        // Disabled is presentation only
        assert!(input.handle_edit("2").notified());
        assert_eq!(input.view().value, "2");
    }

    #[test]
    fn test_zero_decimals() {
        let (mut input, recorder) = input_with(InputConfig::new(0).with_value("42"));

        assert_eq!(input.display_text(), "42");
        assert!(input.handle_edit("4.").is_rejected());
        assert!(input.handle_edit("43").notified());
        assert_eq!(recorder.values(), vec!["43".to_string()]);
    }

    #[test]
    fn test_values_beyond_native_integers() {
        let (mut input, recorder) = input_with(
            InputConfig::wei().with_max("100000000000000000000000000000000000000000"),
        );

        assert!(input
            .handle_edit("99999999999999999999999.999999999999999999")
            .notified());
        assert_eq!(
            recorder.last().as_deref(),
            Some("99999999999999999999999999999999999999999")
        );

        assert!(input
            .handle_edit("100000000000000000000000.000000000000000001")
            .is_rejected());
        assert_eq!(recorder.call_count(), 1);
    }
}
