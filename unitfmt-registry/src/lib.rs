//! unitfmt Registry - Value format catalog and lookup
//!
//! Builds the ordered catalog of format categories, indexes it by id and
//! resolves ids (including `key:sub` custom ids) to formatters.
//!
//! ```
//! let v = unitfmt_registry::format("decbytes", 1500.0, Some(2), None);
//! assert_eq!(v.to_string(), "1.50 kB");
//! ```

mod categories;
mod config;
mod custom;
mod registry;

pub use categories::{build_categories, build_categories_with, FormatCategory, FormatEntry};
pub use config::RegistryConfig;
pub use custom::parse_custom;
pub use registry::{
    format, is_boolean_unit, list_categories, resolve_formatter, FormatRegistry, FALLBACK_ID, REGISTRY,
};

pub use unitfmt_core::{DecimalCount, FormatError, FormattedValue};
pub use unitfmt_formats::Formatter;
