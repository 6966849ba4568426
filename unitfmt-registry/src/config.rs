//! Registry configuration

use serde::{Deserialize, Serialize};
use unitfmt_core::FormatError;
use unitfmt_formats::{Zone, LOCAL_PATTERN, LOCAL_TIME_PATTERN};

/// Settings baked into the catalog when it is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// SI formatters pick a prefix per value; `false` pins each unit's tier
    pub scalable: bool,
    /// `utc`, `browser` or an IANA zone name
    pub time_zone: String,
    /// Strftime pattern for "Datetime local"
    pub local_format: String,
    /// Pattern used by "Datetime local (No date if today)" for today's values
    pub local_time_format: String,
    /// "Datetime default" includes milliseconds
    pub show_ms: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            scalable: true,
            time_zone: "utc".to_string(),
            local_format: LOCAL_PATTERN.to_string(),
            local_time_format: LOCAL_TIME_PATTERN.to_string(),
            show_ms: false,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalable(mut self, scalable: bool) -> Self {
        self.scalable = scalable;
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    pub fn with_local_format(mut self, full: impl Into<String>, time_only: impl Into<String>) -> Self {
        self.local_format = full.into();
        self.local_time_format = time_only.into();
        self
    }

    pub fn with_show_ms(mut self, show_ms: bool) -> Self {
        self.show_ms = show_ms;
        self
    }

    /// Parsed display zone
    pub fn zone(&self) -> Result<Zone, FormatError> {
        self.time_zone.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert!(config.scalable);
        assert!(!config.show_ms);
        assert_eq!(config.zone().unwrap(), Zone::Utc);
    }

    #[test]
    fn test_builders() {
        let config = RegistryConfig::new()
            .with_scalable(false)
            .with_time_zone("Asia/Tokyo")
            .with_local_format("%d.%m.%Y %H:%M", "%H:%M")
            .with_show_ms(true);
        assert!(!config.scalable);
        assert!(config.show_ms);
        assert_eq!(config.local_time_format, "%H:%M");
        assert!(matches!(config.zone().unwrap(), Zone::Named(tz) if tz.name() == "Asia/Tokyo"));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: RegistryConfig = serde_json::from_str(r#"{"scalable": false}"#).unwrap();
        assert!(!config.scalable);
        assert_eq!(config.time_zone, "utc");
        assert_eq!(config.local_format, LOCAL_PATTERN);
    }

    #[test]
    fn test_invalid_zone() {
        let config = RegistryConfig::new().with_time_zone("Nowhere/Special");
        let err = config.zone().unwrap_err();
        assert_eq!(err.code(), unitfmt_core::codes::INVALID_TIME_ZONE);
    }
}
