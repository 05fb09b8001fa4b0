//! Simulation configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command-line flags override whatever the environment set.
//!
//! ## Sources (Priority Order)
//! 1. Command-line flags (`--days`, `--inventory`)
//! 2. Environment variables (`GILDED_*`)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Days simulated when nothing else is configured.
pub const DEFAULT_DAYS: u32 = 2;

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of day blocks to print (day 0 through `days - 1`)
    pub days: u32,

    /// JSON inventory file. The standard fixture is used when absent.
    pub inventory_path: Option<PathBuf>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(SimConfig),
    Help,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            days: DEFAULT_DAYS,
            inventory_path: None,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a configuration from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let days = match lookup("GILDED_DAYS") {
            Some(raw) => parse_days("GILDED_DAYS", &raw)?,
            None => DEFAULT_DAYS,
        };

        let inventory_path = lookup("GILDED_INVENTORY")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(SimConfig {
            days,
            inventory_path,
        })
    }

    /// Applies command-line flags on top of this configuration.
    ///
    /// `args` excludes the program name. Unknown flags are ignored.
    pub fn with_args<I>(mut self, args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--days" | "-d" => {
                    let raw = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    self.days = parse_days("--days", &raw)?;
                }
                "--inventory" | "-i" => {
                    let raw = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    self.inventory_path = Some(PathBuf::from(raw));
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => {}
            }
        }

        Ok(Invocation::Run(self))
    }
}

fn parse_days(name: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

pub const USAGE: &str = "\
Gilded Rose inventory simulation

Usage: gilded-sim [OPTIONS]

Options:
  -d, --days <N>          Number of days to print (default: 2, env: GILDED_DAYS)
  -i, --inventory <PATH>  JSON inventory file (env: GILDED_INVENTORY)
  -h, --help              Show this help message";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value for {0}")]
    MissingValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.days, 2);
    }

    #[test]
    fn test_env_values() {
        let config = SimConfig::from_vars(vars(&[
            ("GILDED_DAYS", "30"),
            ("GILDED_INVENTORY", "stock.json"),
        ]))
        .unwrap();
        assert_eq!(config.days, 30);
        assert_eq!(config.inventory_path, Some(PathBuf::from("stock.json")));
    }

    #[test]
    fn test_invalid_env_days() {
        let err = SimConfig::from_vars(vars(&[("GILDED_DAYS", "-1")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GILDED_DAYS");
    }

    #[test]
    fn test_args_override_env() {
        let config = SimConfig::from_vars(vars(&[("GILDED_DAYS", "30")])).unwrap();
        let invocation = config
            .with_args(args(&["-d", "5", "--inventory", "other.json", "--verbose"]))
            .unwrap();
        assert_eq!(
            invocation,
            Invocation::Run(SimConfig {
                days: 5,
                inventory_path: Some(PathBuf::from("other.json")),
            })
        );
    }

    #[test]
    fn test_help_flag() {
        let invocation = SimConfig::default().with_args(args(&["--help"])).unwrap();
        assert_eq!(invocation, Invocation::Help);
    }

    #[test]
    fn test_missing_flag_value() {
        let err = SimConfig::default().with_args(args(&["--days"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue(_)));
    }
}
