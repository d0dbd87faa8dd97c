// ============================================================================
// Big Number Input Factory
// Creates inputs from configuration
// ============================================================================

use crate::domain::{ConfigError, InputConfig};
use crate::input::BigNumberInput;
use crate::interfaces::ChangeHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a big number input from configuration
///
/// # Arguments
/// * `config` - Host props: value, decimals, bounds and presentation options
/// * `change_handler` - Sink notified with the raw amount of accepted edits
///
/// # Returns
/// * `Result<BigNumberInput, ConfigError>` - Configured input or the first config error
///
/// # Example
/// ```
/// use bignumber_input::prelude::*;
/// use bignumber_input::input::create_from_config;
/// use std::sync::Arc;
///
/// let config = InputConfig::new(2).with_value("123");
/// let input = create_from_config(config, Arc::new(NoOpChangeHandler)).unwrap();
/// assert_eq!(input.display_text(), "1.23");
/// ```
pub fn create_from_config(
    config: InputConfig,
    change_handler: Arc<dyn ChangeHandler>,
) -> Result<BigNumberInput, ConfigError> {
    BigNumberInput::new(config, change_handler)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating big number inputs with fluent API
///
/// # Example
/// ```
/// use bignumber_input::prelude::*;
/// use std::sync::Arc;
///
/// let input = BigNumberInputBuilder::new(18)
///     .value("1500000000000000000")
///     .min("1")
///     .placeholder("Amount")
///     .build(Arc::new(NoOpChangeHandler))
///     .unwrap();
///
/// assert_eq!(input.display_text(), "1.500000000000000000");
/// ```
pub struct BigNumberInputBuilder {
    config: InputConfig,
}

impl BigNumberInputBuilder {
    /// Create a new builder for the given number of decimals
    pub fn new(decimals: u8) -> Self {
        Self {
            config: InputConfig::new(decimals),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: InputConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Value and Range
    // ========================================================================

    /// Set the initial raw value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self
    }

    /// Set the inclusive lower bound
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.config.min = Some(min.into());
        self
    }

    /// Set the inclusive upper bound
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.config.max = Some(max.into());
        self
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Set disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply token amount configuration
    pub fn token_amount(decimals: u8) -> Self {
        Self::from_config(InputConfig::token_amount(decimals))
    }

    /// Apply wei configuration
    pub fn wei() -> Self {
        Self::from_config(InputConfig::wei())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the input
    pub fn build(
        self,
        change_handler: Arc<dyn ChangeHandler>,
    ) -> Result<BigNumberInput, ConfigError> {
        create_from_config(self.config, change_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &InputConfig {
        &self.config
    }
}
