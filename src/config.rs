//! Configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `STOCK_CRITICAL_BELOW` - Units below which stock is critical (default: 10)
//! - `STOCK_LOW_BELOW` - Units below which stock is low (default: 50)
//! - `LEDGER_CAPACITY` - Facility slots to pre-allocate (default: 64)

use std::env;

use anyhow::{bail, Context, Result};

use crate::types::StockThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("LOG_FORMAT must be `text` or `json`, got {other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub stock_thresholds: StockThresholds,
    pub ledger_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            stock_thresholds: StockThresholds::default(),
            ledger_capacity: 64,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed, or if the
    /// critical threshold exceeds the low threshold.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value)?,
            None => defaults.log_format,
        };

        let thresholds = defaults.stock_thresholds;
        let critical_below = parse_or(&lookup, "STOCK_CRITICAL_BELOW", thresholds.critical_below)?;
        let low_below = parse_or(&lookup, "STOCK_LOW_BELOW", thresholds.low_below)?;
        if critical_below > low_below {
            bail!(
                "STOCK_CRITICAL_BELOW ({critical_below}) must not exceed \
                 STOCK_LOW_BELOW ({low_below})"
            );
        }

        let ledger_capacity = parse_or(&lookup, "LEDGER_CAPACITY", defaults.ledger_capacity)?;

        Ok(Self {
            log_level,
            log_format,
            stock_thresholds: StockThresholds {
                critical_below,
                low_below,
            },
            ledger_capacity,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got {value:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stock_thresholds.critical_below, 10);
        assert_eq!(config.stock_thresholds.low_below, 50);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("RUST_LOG", "blood_match=debug"),
            ("LOG_FORMAT", "JSON"),
            ("STOCK_CRITICAL_BELOW", "5"),
            ("STOCK_LOW_BELOW", " 20 "),
            ("LEDGER_CAPACITY", "8"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "blood_match=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.stock_thresholds, StockThresholds { critical_below: 5, low_below: 20 });
        assert_eq!(config.ledger_capacity, 8);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = config_from(&[("STOCK_CRITICAL_BELOW", "60")]).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(config_from(&[("LEDGER_CAPACITY", "-1")]).is_err());
        assert!(config_from(&[("STOCK_LOW_BELOW", "many")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
