//! The formatter strategy object

use serde::Serialize;
use unitfmt_core::{DecimalCount, FormattedValue};

use crate::arithmetic;
use crate::basic::{self, BooleanLabels, FixedUnit, SimpleCount};
use crate::datetime::DateTimeFormatter;
use crate::scaled::ScaledUnits;
use crate::symbol::{Currency, PinnedTier};
use crate::time::{self, ClockInput, Interval, TimeUnit};

/// A display formatter with its construction parameters baked in.
///
/// Formatters are immutable once built and never fail: unusable input
/// renders empty or best-effort text.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Formatter {
    Fixed(FixedUnit),
    Scaled(ScaledUnits),
    Pinned(PinnedTier),
    Count(SimpleCount),
    Currency(Currency),
    Boolean(BooleanLabels),
    Percent,
    PercentUnit,
    Hex,
    Hex0x,
    Sci,
    Locale,
    Text,
    Time(TimeUnit),
    Duration(Interval),
    DurationHms,
    DurationDhms,
    TimeTicks,
    Clock(ClockInput),
    DateTime(DateTimeFormatter),
}

impl Formatter {
    /// Render `value`. `scaled_decimals` is accepted for call compatibility
    /// with axis renderers; no current formatter reads it.
    pub fn format(
        &self,
        value: f64,
        decimals: DecimalCount,
        _scaled_decimals: DecimalCount,
    ) -> FormattedValue {
        match self {
            Formatter::Fixed(f) => f.format(value, decimals),
            Formatter::Scaled(f) => f.format(value, decimals),
            Formatter::Pinned(f) => f.format(value, decimals),
            Formatter::Count(f) => f.format(value, decimals),
            Formatter::Currency(f) => f.format(value, decimals),
            Formatter::Boolean(f) => f.format(value),
            Formatter::Percent => arithmetic::percent(value, decimals),
            Formatter::PercentUnit => arithmetic::percent_unit(value, decimals),
            Formatter::Hex => arithmetic::hex(value, decimals),
            Formatter::Hex0x => arithmetic::hex0x(value, decimals),
            Formatter::Sci => arithmetic::sci(value, decimals),
            Formatter::Locale => basic::locale(value, decimals),
            Formatter::Text => basic::string(value),
            Formatter::Time(unit) => unit.format(value, decimals),
            Formatter::Duration(scale) => time::to_duration(value, decimals, *scale),
            Formatter::DurationHms => time::duration_hms(value),
            Formatter::DurationDhms => time::duration_dhms(value),
            Formatter::TimeTicks => time::time_ticks(value, decimals),
            Formatter::Clock(input) => time::clock(value, decimals, *input),
            Formatter::DateTime(f) => f.format(value),
        }
    }
}

/// Literal unit after the number (`as_prefix` puts it before)
pub fn fixed_unit(unit: &str, as_prefix: bool) -> Formatter {
    if as_prefix {
        Formatter::Fixed(FixedUnit::prefix(unit))
    } else {
        Formatter::Fixed(FixedUnit::suffix(unit))
    }
}

pub fn simple_count(symbol: &str) -> Formatter {
    Formatter::Count(SimpleCount::new(symbol))
}

pub fn boolean(true_label: &str, false_label: &str) -> Formatter {
    Formatter::Boolean(BooleanLabels::new(true_label, false_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(fixed_unit("ppm", false).format(3.0, None, None).to_string(), "3 ppm");
        assert_eq!(fixed_unit("$", true).format(3.0, None, None).to_string(), "$3");
        assert_eq!(Formatter::Percent.format(12.5, Some(1), None).to_string(), "12.5%");
        assert_eq!(Formatter::Hex0x.format(255.0, None, None).to_string(), "0xFF");
        assert_eq!(Formatter::Text.format(0.25, Some(0), None).to_string(), "0.25");
        assert_eq!(Formatter::DurationHms.format(61.0, None, None).to_string(), "00:01:01");
        assert_eq!(simple_count("ops/s").format(2000.0, Some(0), None).to_string(), "2K ops/s");
    }

    #[test]
    fn test_scaled_decimals_ignored() {
        let f = Formatter::Time(TimeUnit::Seconds);
        assert_eq!(f.format(1.5, Some(1), Some(5)), f.format(1.5, Some(1), None));
    }

    #[test]
    fn test_boolean_never_uses_decimals() {
        let f = boolean("On", "Off");
        assert_eq!(f.format(0.0, Some(3), None).to_string(), "Off");
        assert_eq!(f.format(0.2, Some(0), None).to_string(), "On");
    }

    #[test]
    fn test_descriptor_json() {
        let json = |f: &Formatter| serde_json::to_value(f).unwrap();

        assert_eq!(
            json(&fixed_unit("ppm", false)),
            serde_json::json!({"kind": "fixed", "params": {"unit": "ppm", "as_prefix": false}})
        );
        assert_eq!(json(&Formatter::PercentUnit), serde_json::json!({"kind": "percent_unit"}));
        assert_eq!(json(&Formatter::Time(TimeUnit::Seconds)), serde_json::json!({"kind": "time", "params": "seconds"}));
        assert_eq!(
            json(&boolean("Yes", "No")),
            serde_json::json!({"kind": "boolean", "params": {"true_label": "Yes", "false_label": "No"}})
        );
        // scaler tables stay out of the descriptor
        assert_eq!(
            json(&simple_count("req/s")),
            serde_json::json!({"kind": "count", "params": {"symbol": "req/s"}})
        );
    }
}
