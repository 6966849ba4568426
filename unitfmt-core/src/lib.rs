//! unitfmt Core - Fundamental types
//!
//! This crate provides the core types used throughout unitfmt:
//! - `FormattedValue`: the `prefix`/`text`/`suffix` triple every formatter produces
//! - `DecimalCount`: optional decimal-place hint
//! - `FormatError`: lookup and configuration errors
//! - number rendering helpers shared by all formatters

mod number;
mod value;
mod error;

pub use number::{
    to_fixed, to_fixed_scaled, decimals_for_value, js_number_string, js_round, round_digits_half_up,
    scientific_digits, DecimalCount, EXACT_DIGITS,
};
pub use value::FormattedValue;
pub use error::{FormatError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{FormattedValue, FormatError, DecimalCount};
    pub use crate::{to_fixed, to_fixed_scaled};
    pub use crate::error::codes;
}
