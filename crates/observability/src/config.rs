//! Logging configuration, read from the environment.

use core::str::FromStr;
use thiserror::Error;

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";
/// Environment variable selecting the log format.
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";
/// Environment variable holding the filter directive.
pub const FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?} (expected \"compact\" or \"json\")")]
    UnknownLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = present(FILTER_VAR).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match present(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            (FILTER_VAR, "gilded_rose=debug"),
            (LOG_FORMAT_VAR, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "gilded_rose=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ObservabilityConfig::from_lookup(lookup(&[(FILTER_VAR, " "), (LOG_FORMAT_VAR, "")]))
                .unwrap();
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err =
            ObservabilityConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "yaml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownLogFormat("yaml".to_string()));
    }
}
