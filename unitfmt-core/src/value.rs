//! Formatter output

use std::fmt;
use serde::{Deserialize, Serialize};

/// Result of applying a formatter to a raw number.
///
/// Hosts usually render `prefix + text + suffix`, but axis and legend code
/// lays the parts out separately, so they stay split here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedValue {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prefix: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suffix: Option<String>,
}

impl FormattedValue {
    pub fn text(text: impl Into<String>) -> Self {
        FormattedValue { prefix: None, text: text.into(), suffix: None }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_suffix(text: impl Into<String>, suffix: impl Into<String>) -> Self {
        FormattedValue { prefix: None, text: text.into(), suffix: Some(suffix.into()) }
    }

    pub fn with_prefix(prefix: impl Into<String>, text: impl Into<String>) -> Self {
        FormattedValue { prefix: Some(prefix.into()), text: text.into(), suffix: None }
    }

    /// The suffix, or `""` when there is none
    pub fn suffix_str(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    /// The prefix, or `""` when there is none
    pub fn prefix_str(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    /// Append to the suffix, creating it if absent
    pub fn push_suffix(&mut self, more: &str) {
        match &mut self.suffix {
            Some(s) => s.push_str(more),
            None => self.suffix = Some(more.to_string()),
        }
    }
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix_str(), self.text, self.suffix_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_parts() {
        let v = FormattedValue {
            prefix: Some("$".to_string()),
            text: "1.5".to_string(),
            suffix: Some("K".to_string()),
        };
        assert_eq!(v.to_string(), "$1.5K");
        assert_eq!(FormattedValue::text("42").to_string(), "42");
    }

    #[test]
    fn test_push_suffix() {
        let mut v = FormattedValue::text("3");
        v.push_suffix(" ago");
        assert_eq!(v.suffix_str(), " ago");
        v.push_suffix("!");
        assert_eq!(v.to_string(), "3 ago!");
    }

    #[test]
    fn test_serialize_skips_missing_parts() {
        let json = serde_json::to_string(&FormattedValue::with_suffix("1", " kB")).unwrap();
        assert_eq!(json, r#"{"text":"1","suffix":" kB"}"#);
    }
}
