//! # Console Configuration
//!
//! Loaded once at startup from environment variables with fallback to
//! defaults.
//!
//! ## Environment Variables
//! - `SHOPFRONT_STORE_NAME`: store name logged at startup
//! - `SHOPFRONT_RULE_WIDTH`: width of the `*` rules framing each section
//! - `SHOPFRONT_LOG`: tracing filter used when `RUST_LOG` is unset

use std::env;
use std::ops::RangeInclusive;

/// Default rule width, matching the 50-column receipt layout.
pub const DEFAULT_RULE_WIDTH: usize = 50;

/// Accepted rule widths. The receipt columns alone need 20.
pub const RULE_WIDTH_RANGE: RangeInclusive<usize> = 20..=200;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "warn,shopfront=info";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Store name (logged, not printed in the console protocol)
    pub store_name: String,

    /// Width of the `*` and `-` rules
    pub rule_width: usize,

    /// Fallback tracing filter directive
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Shopfront Demo Store".to_string(),
            rule_width: DEFAULT_RULE_WIDTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(store_name) = lookup("SHOPFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(width) = lookup("SHOPFRONT_RULE_WIDTH") {
            config.rule_width = width
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_RULE_WIDTH".to_string()))?;
        }

        if let Some(filter) = lookup("SHOPFRONT_LOG") {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env), but a bad variable falls back to
    /// the defaults. The error is handed back so it can be logged once
    /// tracing is up.
    pub fn from_env_or_default() -> (Self, Option<ConfigError>) {
        Self::from_vars_or_default(|key| env::var(key).ok())
    }

    pub fn from_vars_or_default<F>(lookup: F) -> (Self, Option<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_vars(lookup) {
            Ok(config) => (config, None),
            Err(err) => (ShopConfig::default(), Some(err)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !RULE_WIDTH_RANGE.contains(&self.rule_width) {
            return Err(ConfigError::OutOfRange {
                var: "SHOPFRONT_RULE_WIDTH".to_string(),
                min: *RULE_WIDTH_RANGE.start(),
                max: *RULE_WIDTH_RANGE.end(),
            });
        }

        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SHOPFRONT_STORE_NAME".to_string()));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{var} must be between {min} and {max}")]
    OutOfRange { var: String, min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ShopConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShopConfig::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.rule_width, 50);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOPFRONT_STORE_NAME", "Corner Shop"),
            ("SHOPFRONT_RULE_WIDTH", " 60 "),
            ("SHOPFRONT_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.rule_width, 60);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_width() {
        assert_eq!(
            load(&[("SHOPFRONT_RULE_WIDTH", "wide")]).unwrap_err(),
            ConfigError::InvalidValue("SHOPFRONT_RULE_WIDTH".to_string())
        );
        assert!(matches!(
            load(&[("SHOPFRONT_RULE_WIDTH", "5")]).unwrap_err(),
            ConfigError::OutOfRange { min: 20, max: 200, .. }
        ));
    }

    #[test]
    fn test_bad_value_falls_back_to_defaults() {
        let map: HashMap<&str, &str> =
            [("SHOPFRONT_RULE_WIDTH", "wide"), ("SHOPFRONT_STORE_NAME", "Corner Shop")].into();
        let (config, err) =
            ShopConfig::from_vars_or_default(|key| map.get(key).map(|v| v.to_string()));

        assert_eq!(config, ShopConfig::default());
        assert_eq!(
            err,
            Some(ConfigError::InvalidValue("SHOPFRONT_RULE_WIDTH".to_string()))
        );

        let (config, err) = ShopConfig::from_vars_or_default(|_| None);
        assert_eq!(config, ShopConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_blank_store_name() {
        assert!(load(&[("SHOPFRONT_STORE_NAME", "  ")]).is_err());
    }
}
