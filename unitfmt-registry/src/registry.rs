//! Format registry and id lookup

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use unitfmt_core::{DecimalCount, FormatError, FormattedValue};
use unitfmt_formats::{fixed_unit, ChronoAdapter, DateTimeAdapter, Formatter};

use crate::categories::{build_categories_with, FormatCategory, FormatEntry};
use crate::custom::parse_custom;
use crate::RegistryConfig;

/// Id of the plain "Number" format used when an id cannot be resolved
pub const FALLBACK_ID: &str = "none";

const MAX_SUGGESTIONS: usize = 5;

/// Process-wide registry with the default configuration
pub static REGISTRY: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::default);

/// Immutable catalog plus a flat `id -> entry` index
pub struct FormatRegistry {
    categories: Vec<FormatCategory>,
    index: HashMap<String, (usize, usize)>,
    adapter: Arc<dyn DateTimeAdapter>,
    fallback: Arc<Formatter>,
}

impl FormatRegistry {
    /// Build the catalog for `config`, rendering dates in its time zone
    pub fn new(config: &RegistryConfig) -> Result<Self, FormatError> {
        let zone = config.zone()?;
        Ok(Self::with_adapter(config, Arc::new(ChronoAdapter::new(zone))))
    }

    /// Build the catalog with a caller-supplied date/time adapter
    pub fn with_adapter(config: &RegistryConfig, adapter: Arc<dyn DateTimeAdapter>) -> Self {
        let categories = build_categories_with(config, adapter.clone());

        let mut index = HashMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for (ei, entry) in category.formats.iter().enumerate() {
                if index.contains_key(&entry.id) {
                    tracing::warn!(id = %entry.id, category = %category.name, "duplicate format id ignored");
                    continue;
                }
                index.insert(entry.id.clone(), (ci, ei));
            }
        }

        let fallback = index
            .get(FALLBACK_ID)
            .map(|&(ci, ei)| categories[ci].formats[ei].formatter.clone())
            .unwrap_or_else(|| Arc::new(fixed_unit("", false)));

        tracing::debug!(categories = categories.len(), formats = index.len(), "format registry built");

        Self { categories, index, adapter, fallback }
    }

    pub fn categories(&self) -> &[FormatCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&FormatCategory> {
        self.categories.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Catalog entry for `id`, custom ids excluded
    pub fn get(&self, id: &str) -> Option<&FormatEntry> {
        self.index.get(id).map(|&(ci, ei)| &self.categories[ci].formats[ei])
    }

    /// Name of the category holding catalog entry `id`
    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&(ci, _)| self.categories[ci].name.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Formatter applied to ids that do not resolve
    pub fn fallback(&self) -> &Arc<Formatter> {
        &self.fallback
    }

    /// Formatter for a catalog id or a `key:sub` custom id
    pub fn resolve(&self, id: &str) -> Result<Arc<Formatter>, FormatError> {
        if let Some(entry) = self.get(id) {
            return Ok(entry.formatter.clone());
        }
        if let Some(formatter) = parse_custom(id, &self.adapter) {
            return Ok(Arc::new(formatter));
        }
        Err(FormatError::not_found(id).with_suggestions(self.find_similar(id)))
    }

    /// Resolve and apply, failing on unknown ids
    pub fn try_format(
        &self,
        id: &str,
        value: f64,
        decimals: DecimalCount,
        scaled_decimals: DecimalCount,
    ) -> Result<FormattedValue, FormatError> {
        Ok(self.resolve(id)?.format(value, decimals, scaled_decimals))
    }

    /// Resolve and apply; unknown ids fall back to the Number format
    pub fn format(
        &self,
        id: &str,
        value: f64,
        decimals: DecimalCount,
        scaled_decimals: DecimalCount,
    ) -> FormattedValue {
        match self.resolve(id) {
            Ok(formatter) => formatter.format(value, decimals, scaled_decimals),
            Err(err) => {
                tracing::debug!(id, error = %err, "unknown format id, using Number");
                self.fallback.format(value, decimals, scaled_decimals)
            }
        }
    }

    /// Catalog ids similar to `id`, best first
    fn find_similar(&self, id: &str) -> Vec<String> {
        let query = id.to_lowercase();
        let mut matches: Vec<(&str, usize)> = self
            .index
            .keys()
            .filter_map(|candidate| {
                let score = similarity_score(&query, &candidate.to_lowercase());
                (score > 0).then_some((candidate.as_str(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().take(MAX_SUGGESTIONS).map(|(id, _)| id.to_string()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_adapter(&RegistryConfig::default(), Arc::new(ChronoAdapter::default()))
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("categories", &self.categories.len())
            .field("formats", &self.index.len())
            .finish()
    }
}

/// Prefix and containment matches first, then shared characters, with a
/// bonus for similar lengths
fn similarity_score(query: &str, candidate: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    let mut score = 0;

    if candidate.starts_with(query) {
        score += 100;
    } else if candidate.contains(query) {
        score += 50;
    } else if query.contains(candidate) {
        score += 30;
    }

    let query_chars: HashSet<char> = query.chars().collect();
    let candidate_chars: HashSet<char> = candidate.chars().collect();
    score += query_chars.intersection(&candidate_chars).count() * 2;

    let len_diff = query.chars().count().abs_diff(candidate.chars().count());
    if len_diff < 5 && score > 0 {
        score += 5 - len_diff;
    }
    score
}

/// Ordered categories of the process-wide registry
pub fn list_categories() -> &'static [FormatCategory] {
    REGISTRY.categories()
}

pub fn resolve_formatter(id: &str) -> Result<Arc<Formatter>, FormatError> {
    REGISTRY.resolve(id)
}

/// Format with the process-wide registry, falling back to Number
pub fn format(id: &str, value: f64, decimals: DecimalCount, scaled_decimals: DecimalCount) -> FormattedValue {
    REGISTRY.format(id, value, decimals, scaled_decimals)
}

/// Whether `id` names one of the boolean formats (or a `bool:` custom id)
pub fn is_boolean_unit(id: &str) -> bool {
    id.starts_with("bool")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_catalog_id() {
        let registry = FormatRegistry::default();
        let f = registry.resolve("decbytes").unwrap();
        assert_eq!(f.format(1500.0, Some(2), None).to_string(), "1.50 kB");
        assert_eq!(registry.category_of("decbytes"), Some("Data"));
        assert_eq!(registry.get("decbytes").unwrap().name, "bytes(SI)");
        assert_eq!(registry.len(), 268);
    }

    #[test]
    fn test_resolve_shares_formatter() {
        let registry = FormatRegistry::default();
        let a = registry.resolve("bytes").unwrap();
        let b = registry.resolve("bytes").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unknown_id_not_found() {
        let registry = FormatRegistry::default();
        let err = registry.resolve("not-a-real-id").unwrap_err();
        assert!(err.is_not_found());
        assert!(registry.get("not-a-real-id").is_none());
    }

    #[test]
    fn test_suggestions() {
        let registry = FormatRegistry::default();
        let err = registry.resolve("byte").unwrap_err();
        let suggestions = err.suggestions();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "bytes");
    }

    #[test]
    fn test_custom_ids_resolve() {
        let registry = FormatRegistry::default();
        let f = registry.resolve("suffix:apples").unwrap();
        assert_eq!(f.format(2.0, None, None).to_string(), "2 apples");
        assert!(registry.get("suffix:apples").is_none());
        assert!(registry.resolve("nope:x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_format_falls_back_to_number() {
        let registry = FormatRegistry::default();
        let v = registry.format("not-a-real-id", 3.14159, Some(2), None);
        assert_eq!(v.to_string(), "3.14");
        assert!(v.suffix.is_none());
        assert!(registry.try_format("not-a-real-id", 1.0, None, None).is_err());
    }

    #[test]
    fn test_fallback_is_number_entry() {
        let registry = FormatRegistry::default();
        let number = registry.resolve(FALLBACK_ID).unwrap();
        assert!(Arc::ptr_eq(registry.fallback(), &number));
    }

    #[test]
    fn test_invalid_time_zone_rejected() {
        let config = RegistryConfig::default().with_time_zone("Atlantis/Capital");
        let err = FormatRegistry::new(&config).unwrap_err();
        assert_eq!(err, FormatError::InvalidTimeZone("Atlantis/Capital".to_string()));
    }

    #[test]
    fn test_not_scalable_registry() {
        let registry = FormatRegistry::new(&RegistryConfig::default().with_scalable(false)).unwrap();
        assert_eq!(registry.format("decgbytes", 2048.0, Some(0), None).to_string(), "2048 GB");
    }

    #[test]
    fn test_category_lookup() {
        let registry = FormatRegistry::default();
        let time = registry.category("time").unwrap();
        assert_eq!(time.name, "Time");
        assert_eq!(time.formats.len(), 15);
    }

    #[test]
    fn test_global_registry() {
        assert_eq!(list_categories().len(), 25);
        assert!(resolve_formatter("percent").is_ok());
        assert_eq!(format("percentunit", 0.5, Some(0), None).to_string(), "50%");
        assert_eq!(format("unknown", 7.0, None, None).to_string(), "7");
    }

    #[test]
    fn test_global_registry_from_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || format("bytes", 1024.0 * (i + 1) as f64, None, None).to_string()))
            .collect();
        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(rendered, vec!["1 KiB", "2 KiB", "3 KiB", "4 KiB"]);
    }

    #[test]
    fn test_is_boolean_unit() {
        assert!(is_boolean_unit("bool"));
        assert!(is_boolean_unit("bool_on_off"));
        assert!(is_boolean_unit("bool:up/down"));
        assert!(!is_boolean_unit("bytes"));
    }

    #[test]
    fn test_similarity_score() {
        assert!(similarity_score("byte", "bytes") > similarity_score("byte", "decbytes"));
        assert!(similarity_score("byte", "decbytes") > similarity_score("byte", "volt"));
        assert_eq!(similarity_score("", "bytes"), 0);
    }
}
