//! Stack sizing configuration and validation
//!
//! # Example
//!
//! ```
//! use bounded_stack::domain::StackConfigBuilder;
//!
//! let config = StackConfigBuilder::new()
//!     .capacity(64)
//!     .max_capacity(1024)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.capacity, 64);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default capacity for stacks built from configuration.
pub const DEFAULT_CAPACITY: usize = 16;

/// Default upper bound accepted by validation (1 Mi elements).
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 20;

/// Stack configuration
///
/// A capacity of 0 is valid: such a stack is permanently empty and full.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Number of elements the stack can hold
    pub capacity: usize,
    /// Largest capacity this configuration may request
    pub max_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, max_capacity: usize) -> Result<Self, ConfigError> {
        let config = Self {
            capacity,
            max_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity == 0 {
            return Err(ConfigError::InvalidMaxCapacity);
        }

        if self.capacity > self.max_capacity {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: self.max_capacity,
            });
        }

        Ok(())
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set the capacity ceiling
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

/// Builder for StackConfig with validation
#[derive(Default)]
pub struct StackConfigBuilder {
    capacity: Option<usize>,
    max_capacity: Option<usize>,
}

impl StackConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stack capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the capacity ceiling
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Build the StackConfig, validating all parameters
    pub fn build(self) -> Result<StackConfig, ConfigError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> StackConfig {
        let defaults = StackConfig::default();

        StackConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            max_capacity: self.max_capacity.unwrap_or(defaults.max_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StackConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        assert!(StackConfig::new(0, 10).is_ok());
    }

    #[test]
    fn test_config_validation_rejects_capacity_over_max() {
        let config = StackConfig {
            capacity: 11,
            max_capacity: 10,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::CapacityTooLarge {
                capacity: 11,
                max: 10
            })
        );
    }

    #[test]
    fn test_config_validation_rejects_zero_max() {
        let config = StackConfig::default().with_capacity(0).with_max_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxCapacity));
    }

    #[test]
    fn test_builder_creates_valid_config() {
        let config = StackConfigBuilder::new()
            .capacity(32)
            .max_capacity(64)
            .build()
            .expect("Should create valid config");

        assert_eq!(config.capacity, 32);
        assert_eq!(config.max_capacity, 64);
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = StackConfigBuilder::new()
            .capacity(4)
            .build()
            .expect("Should use defaults for other fields");

        assert_eq!(config.max_capacity, DEFAULT_MAX_CAPACITY);
    }

    #[test]
    fn test_builder_rejects_invalid_capacity() {
        let result = StackConfigBuilder::new().capacity(5).max_capacity(4).build();
        assert!(matches!(result, Err(ConfigError::CapacityTooLarge { .. })));

        // Unchecked build keeps the bad values for the caller to inspect
        let config = StackConfigBuilder::new()
            .capacity(5)
            .max_capacity(4)
            .build_unchecked();
        assert_eq!(config.capacity, 5);
    }

    #[test]
    fn test_config_from_json_fills_missing_fields() {
        let config: StackConfig = serde_json::from_str(r#"{ "capacity": 3 }"#).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.max_capacity, DEFAULT_MAX_CAPACITY);

        let json = serde_json::to_string(&config).unwrap();
        let restored: StackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
