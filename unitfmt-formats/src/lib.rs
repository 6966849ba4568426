//! unitfmt Formats - Value formatter families
//!
//! Leaf formatters for every unit family in the catalog:
//! - Scaled units (arbitrary base and label ladder)
//! - SI and IEC prefixes, currency
//! - Fixed units, counts, booleans, locale and raw strings
//! - Percent, hexadecimal, scientific notation
//! - Durations, clocks and date/time (through a swappable adapter)
//!
//! Each family is wrapped in the [`Formatter`] strategy enum.

mod arithmetic;
mod basic;
mod datetime;
mod formatter;
mod scaled;
mod symbol;
mod time;

pub use arithmetic::{hex, hex0x, percent, percent_unit, sci, to_hex_string};
pub use basic::{locale, string, BooleanLabels, FixedUnit, SimpleCount};
pub use datetime::{
    relative_time, ChronoAdapter, Clock, DateTimeAdapter, DateTimeFormatter, DateTimeKind, Zone,
    ISO_PATTERN, ISO_TIME_PATTERN, LOCAL_PATTERN, LOCAL_TIME_PATTERN, SYSTEM_MS_PATTERN,
    SYSTEM_PATTERN, US_PATTERN, US_TIME_PATTERN,
};
pub use formatter::{boolean, fixed_unit, simple_count, Formatter};
pub use scaled::{scaled_units, tier_index, ScaledUnits};
pub use symbol::{
    binary_prefix, currency, si_offset_for_prefix, si_prefix, Currency, PinnedTier, BIN_PREFIXES,
    SI_BASE_INDEX, SI_PREFIXES,
};
pub use time::{
    clock, duration_dhms, duration_hms, time_ticks, to_duration, ClockInput, Interval, TimeUnit,
};
