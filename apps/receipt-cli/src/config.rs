//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Command line flags take precedence over everything loaded here.

use std::env;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::args::OutputFormat;

/// Default tracing filter; stdout carries the receipt, logs go to stderr.
const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive (`RECEIPT_LOG`)
    pub log_filter: String,

    /// Output format (`RECEIPT_FORMAT`)
    pub format: OutputFormat,

    /// Header printed before the receipt (`RECEIPT_HEADER`)
    pub header: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Text,
            header: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RECEIPT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_LOG".to_string()))?;

        let format = match lookup("RECEIPT_FORMAT") {
            Some(value) => OutputFormat::from_str(value.trim(), true)
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_FORMAT".to_string()))?,
            None => OutputFormat::Text,
        };

        let header = lookup("RECEIPT_HEADER").filter(|h| !h.is_empty());

        Ok(CliConfig {
            log_filter,
            format,
            header,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = load(&[
            ("RECEIPT_LOG", "receipt_core=debug"),
            ("RECEIPT_FORMAT", "JSON"),
            ("RECEIPT_HEADER", "Output 1:"),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "receipt_core=debug");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.header.as_deref(), Some("Output 1:"));
    }

    #[test]
    fn test_empty_header_is_ignored() {
        assert_eq!(load(&[("RECEIPT_HEADER", "")]).unwrap().header, None);
    }

    #[test]
    fn test_invalid_format() {
        let err = load(&[("RECEIPT_FORMAT", "xml")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_FORMAT");
    }

    #[test]
    fn test_invalid_log_filter() {
        let err = load(&[("RECEIPT_LOG", "receipt_core=verbose")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_LOG");
    }
}
