// ============================================================================
// Input Configuration
// Host-supplied props for a big number input and their validation
// ============================================================================

use crate::numeric::{in_range, RawAmount};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Which side of the range a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundKind {
    Min,
    Max,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Min => write!(f, "min"),
            BoundKind::Max => write!(f, "max"),
        }
    }
}

/// Errors raised when host-supplied props are not usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// `value` is not a raw digit string
    InvalidValue,
    /// A bound is not a raw digit string
    InvalidBound { bound: BoundKind },
    /// `min` is greater than `max`
    InvertedBounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue => {
                write!(f, "invalid value: expected a raw amount of ASCII digits")
            },
            ConfigError::InvalidBound { bound } => {
                write!(f, "invalid {} bound: expected a raw amount of ASCII digits", bound)
            },
            ConfigError::InvertedBounds => write!(f, "min bound is greater than max bound"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Bounds
// ============================================================================

/// Inclusive, optional min/max range over raw amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    min: Option<RawAmount>,
    max: Option<RawAmount>,
}

impl Bounds {
    /// Range with no limit on either side
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Build a range from raw bound strings.
    ///
    /// An absent or empty bound leaves that side unbounded.
    ///
    /// # Errors
    /// - `InvalidBound` if a bound contains anything but ASCII digits
    /// - `InvertedBounds` if `min > max`
    pub fn new(min: Option<&str>, max: Option<&str>) -> Result<Self, ConfigError> {
        let min = parse_bound(min, BoundKind::Min)?;
        let max = parse_bound(max, BoundKind::Max)?;

        if let (Some(min), Some(max)) = (&min, &max) {
            if min > max {
                return Err(ConfigError::InvertedBounds);
            }
        }

        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Option<&str> {
        self.min.as_ref().map(RawAmount::as_str)
    }

    #[inline]
    pub fn max(&self) -> Option<&str> {
        self.max.as_ref().map(RawAmount::as_str)
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `raw` lies within the range. Empty `raw` counts as zero.
    #[inline]
    pub fn contains(&self, raw: &str) -> bool {
        in_range(raw, self.min(), self.max())
    }
}

fn parse_bound(bound: Option<&str>, kind: BoundKind) -> Result<Option<RawAmount>, ConfigError> {
    match bound {
        None | Some("") => Ok(None),
        Some(raw) => RawAmount::parse(raw)
            .map(Some)
            .map_err(|_| ConfigError::InvalidBound { bound: kind }),
    }
}

// ============================================================================
// Input Configuration
// ============================================================================

/// Props supplied by the host for one big number input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Current raw amount owned by the host. `None` and `""` both mean unset.
    pub value: Option<String>,

    /// Number of fractional digits between raw and display form
    pub decimals: u8,

    /// Optional inclusive lower bound, as a raw amount
    pub min: Option<String>,

    /// Optional inclusive upper bound, as a raw amount
    pub max: Option<String>,

    /// Placeholder text passed through to the rendered field
    pub placeholder: Option<String>,

    /// Disabled flag passed through to the rendered field
    pub disabled: bool,
}

impl InputConfig {
    /// Create a configuration with no value and no bounds
    pub fn new(decimals: u8) -> Self {
        Self {
            value: None,
            decimals,
            min: None,
            max: None,
            placeholder: None,
            disabled: false,
        }
    }

    /// Builder method: Set the raw value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder method: Set the lower bound
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Builder method: Set the upper bound
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Builder method: Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Builder method: Mark the field disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The raw value, with unset mapped to `""`
    #[inline]
    pub fn raw_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Validated bounds for this configuration
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Bounds::new(self.min.as_deref(), self.max.as_deref())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_parts().map(|_| ())
    }

    /// Parsed raw value and bounds, or the first config error
    pub(crate) fn validated_parts(&self) -> Result<(RawAmount, Bounds), ConfigError> {
        let raw = RawAmount::parse(self.raw_value()).map_err(|_| ConfigError::InvalidValue)?;
        let bounds = self.bounds()?;
        Ok((raw, bounds))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl InputConfig {
    /// Generic token amount field
    /// - `0.0` placeholder
    /// - No bounds
    pub fn token_amount(decimals: u8) -> Self {
        Self::new(decimals).with_placeholder("0.0")
    }

    /// Ether-style amount entered in whole units, exchanged in wei
    /// - 18 decimals
    pub fn wei() -> Self {
        Self::token_amount(18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = InputConfig::new(2).with_value("123");

        assert_eq!(config.decimals, 2);
        assert_eq!(config.raw_value(), "123");
        assert!(config.placeholder.is_none());
        assert!(!config.disabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = InputConfig::new(2)
            .with_min("100")
            .with_max("200")
            .with_placeholder("Value")
            .disabled(true);

        assert_eq!(config.min.as_deref(), Some("100"));
        assert_eq!(config.max.as_deref(), Some("200"));
        assert_eq!(config.placeholder.as_deref(), Some("Value"));
        assert!(config.disabled);
    }

    #[test]
    fn test_unset_value() {
        assert_eq!(InputConfig::new(2).raw_value(), "");
        assert!(InputConfig::new(2).with_value("").validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let bad_value = InputConfig::new(2).with_value("1.23");
        assert_eq!(bad_value.validate(), Err(ConfigError::InvalidValue));

        let bad_min = InputConfig::new(2).with_min("-1");
        assert_eq!(
            bad_min.validate(),
            Err(ConfigError::InvalidBound {
                bound: BoundKind::Min
            })
        );

        let bad_max = InputConfig::new(2).with_max("ten");
        assert_eq!(
            bad_max.validate(),
            Err(ConfigError::InvalidBound {
                bound: BoundKind::Max
            })
        );

        let inverted = InputConfig::new(2).with_min("300").with_max("200");
        assert_eq!(inverted.validate(), Err(ConfigError::InvertedBounds));
    }

    #[test]
    fn test_validated_parts_match_validate() {
        let config = InputConfig::new(2).with_value("0123").with_min("100").with_max("");
        let (raw, bounds) = config.validated_parts().unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(raw.as_str(), "0123");
        assert_eq!(bounds.min(), Some("100"));
        assert_eq!(bounds.max(), None);

        for bad in [
            InputConfig::new(2).with_value("x"),
            InputConfig::new(2).with_max("1.5"),
            InputConfig::new(2).with_min("9").with_max("1"),
        ] {
            assert_eq!(bad.validate(), bad.validated_parts().map(|_| ()));
            assert!(bad.validate().is_err());
        }
    }

    #[test]
    fn test_preset_configs() {
        let token = InputConfig::token_amount(6);
        assert_eq!(token.decimals, 6);
        assert_eq!(token.placeholder.as_deref(), Some("0.0"));

        let wei = InputConfig::wei();
        assert_eq!(wei.decimals, 18);
        assert!(wei.bounds().unwrap().is_unbounded());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(Some("100"), Some("200")).unwrap();
        assert!(bounds.contains("100"));
        assert!(bounds.contains("0150"));
        assert!(bounds.contains("200"));
        assert!(!bounds.contains("99"));
        assert!(!bounds.contains("201"));
        assert!(!bounds.contains(""));
    }

    #[test]
    fn test_bounds_empty_is_unbounded() {
        let bounds = Bounds::new(Some(""), None).unwrap();
        assert!(bounds.is_unbounded());
        assert_eq!(bounds, Bounds::UNBOUNDED);
        assert!(bounds.contains("123456789012345678901234567890"));
    }

    #[test]
    fn test_bounds_equal_min_max() {
        let bounds = Bounds::new(Some("5"), Some("005")).unwrap();
        assert!(bounds.contains("5"));
        assert!(!bounds.contains("4"));
        assert!(!bounds.contains("6"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = InputConfig::new(2).with_value("123").with_min("100");
        let json = serde_json::to_string(&config).unwrap();
        let back: InputConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::InvalidBound {
                bound: BoundKind::Max
            }
            .to_string(),
            "invalid max bound: expected a raw amount of ASCII digits"
        );
        assert_eq!(
            ConfigError::InvertedBounds.to_string(),
            "min bound is greater than max bound"
        );
    }
}
