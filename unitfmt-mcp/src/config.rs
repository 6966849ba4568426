//! Server configuration from the environment

use std::env;

use unitfmt_core::FormatError;
use unitfmt_registry::RegistryConfig;

pub const SCALABLE_VAR: &str = "UNITFMT_SCALABLE";
pub const TIME_ZONE_VAR: &str = "UNITFMT_TIME_ZONE";
pub const SHOW_MS_VAR: &str = "UNITFMT_SHOW_MS";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub registry: RegistryConfig,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, FormatError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup` so tests need not touch the process
    /// environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FormatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut registry = RegistryConfig::default();

        if let Some(raw) = lookup(SCALABLE_VAR) {
            registry = registry.with_scalable(parse_flag(SCALABLE_VAR, &raw)?);
        }
        if let Some(raw) = lookup(SHOW_MS_VAR) {
            registry = registry.with_show_ms(parse_flag(SHOW_MS_VAR, &raw)?);
        }
        if let Some(zone) = lookup(TIME_ZONE_VAR) {
            registry = registry.with_time_zone(zone);
        }
        registry.zone()?;

        let log_filter = lookup(LOG_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { registry, log_filter })
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(FormatError::InvalidConfig(format!(
            "{} must be true or false, got '{}'",
            var, other
        ))),
    }
}
