//! Duration formatters: unit ladders, human lists, `hh:mm:ss` and clocks

use chrono::{DateTime, Utc};
use serde::Serialize;
use unitfmt_core::{to_fixed_scaled, DecimalCount, FormattedValue};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// One rung of a unit ladder: values below `below` are divided by
/// `divisor` and labelled `label`.
#[derive(Debug, Clone, Copy)]
struct Step {
    below: f64,
    divisor: f64,
    label: &'static str,
}

const fn step(below: f64, divisor: f64, label: &'static str) -> Step {
    Step { below, divisor, label }
}

const NANOSECOND_LADDER: &[Step] = &[
    step(1e3, 1.0, " ns"),
    step(1e6, 1e3, " µs"),
    step(1e9, 1e6, " ms"),
    step(6e10, 1e9, " s"),
    step(3.6e12, 6e10, " min"),
    step(8.64e13, 3.6e12, " hour"),
    step(f64::INFINITY, 8.64e13, " day"),
];

const MICROSECOND_LADDER: &[Step] = &[
    step(1e3, 1.0, " µs"),
    step(1e6, 1e3, " ms"),
    step(f64::INFINITY, 1e6, " s"),
];

const MILLISECOND_LADDER: &[Step] = &[
    step(1e3, 1.0, " ms"),
    step(6e4, 1e3, " s"),
    step(3.6e6, 6e4, " min"),
    step(8.64e7, 3.6e6, " hour"),
    step(3.1536e10, 8.64e7, " day"),
    step(f64::INFINITY, 3.1536e10, " year"),
];

const SECOND_LADDER: &[Step] = &[
    step(60.0, 1.0, " s"),
    step(3600.0, 60.0, " min"),
    step(86_400.0, 3600.0, " hour"),
    step(604_800.0, 86_400.0, " day"),
    step(31_536_000.0, 604_800.0, " week"),
    step(f64::INFINITY, 3.15569e7, " year"),
];

const MINUTE_LADDER: &[Step] = &[
    step(60.0, 1.0, " min"),
    step(1440.0, 60.0, " hour"),
    step(10_080.0, 1440.0, " day"),
    step(604_800.0, 10_080.0, " week"),
    step(f64::INFINITY, 5.25948e5, " year"),
];

const HOUR_LADDER: &[Step] = &[
    step(24.0, 1.0, " hour"),
    step(168.0, 24.0, " day"),
    step(8760.0, 168.0, " week"),
    step(f64::INFINITY, 8760.0, " year"),
];

const DAY_LADDER: &[Step] = &[
    step(7.0, 1.0, " day"),
    step(365.0, 7.0, " week"),
    step(f64::INFINITY, 365.0, " year"),
];

fn climb(value: f64, decimals: DecimalCount, ladder: &[Step]) -> FormattedValue {
    let abs = value.abs();
    let rung = ladder
        .iter()
        .find(|s| abs < s.below)
        .or_else(|| ladder.last())
        .copied()
        .unwrap_or(step(f64::INFINITY, 1.0, ""));
    to_fixed_scaled(value / rung.divisor, decimals, rung.label)
}

/// Input unit of a duration ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        match self {
            TimeUnit::Nanoseconds => climb(value, decimals, NANOSECOND_LADDER),
            TimeUnit::Microseconds => climb(value, decimals, MICROSECOND_LADDER),
            TimeUnit::Milliseconds => climb(value, decimals, MILLISECOND_LADDER),
            TimeUnit::Seconds => seconds(value, decimals),
            TimeUnit::Minutes => climb(value, decimals, MINUTE_LADDER),
            TimeUnit::Hours => climb(value, decimals, HOUR_LADDER),
            TimeUnit::Days => climb(value, decimals, DAY_LADDER),
        }
    }
}

/// Seconds also step down to ms/µs/ns below one second
fn seconds(value: f64, decimals: DecimalCount) -> FormattedValue {
    if value == 0.0 {
        return FormattedValue::with_suffix("0", " s");
    }
    let abs = value.abs();
    if abs < 1e-6 {
        to_fixed_scaled(value * 1e9, decimals, " ns")
    } else if abs < 1e-3 {
        to_fixed_scaled(value * 1e6, decimals, " µs")
    } else if abs < 1.0 {
        to_fixed_scaled(value * 1e3, decimals, " ms")
    } else {
        climb(value, decimals, SECOND_LADDER)
    }
}

/// Hundredths of a second
pub fn time_ticks(value: f64, decimals: DecimalCount) -> FormattedValue {
    seconds(value / 100.0, decimals)
}

/// Calendar-ish interval used by the human duration lists.
/// Months are 30 days and years 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Interval {
    const ALL: [Interval; 8] = [
        Interval::Year,
        Interval::Month,
        Interval::Week,
        Interval::Day,
        Interval::Hour,
        Interval::Minute,
        Interval::Second,
        Interval::Millisecond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Interval::Year => "year",
            Interval::Month => "month",
            Interval::Week => "week",
            Interval::Day => "day",
            Interval::Hour => "hour",
            Interval::Minute => "minute",
            Interval::Second => "second",
            Interval::Millisecond => "millisecond",
        }
    }

    pub fn seconds(&self) -> f64 {
        match self {
            Interval::Year => 31_536_000.0,
            Interval::Month => 2_592_000.0,
            Interval::Week => 604_800.0,
            Interval::Day => SECONDS_PER_DAY,
            Interval::Hour => SECONDS_PER_HOUR,
            Interval::Minute => SECONDS_PER_MINUTE,
            Interval::Second => 1.0,
            Interval::Millisecond => 0.001,
        }
    }
}

fn push_ago(mut v: FormattedValue) -> FormattedValue {
    v.push_suffix(" ago");
    v
}

/// `"1 hour, 2 minutes"`. `decimals` is the number of further units shown
/// after the first non-zero one.
pub fn to_duration(value: f64, decimals: DecimalCount, scale: Interval) -> FormattedValue {
    if !value.is_finite() {
        return FormattedValue::empty();
    }
    if value == 0.0 {
        return FormattedValue::with_suffix("0", format!(" {}s", scale.name()));
    }
    if value < 0.0 {
        return push_ago(to_duration(-value, decimals, scale));
    }

    let mut remaining = value * scale.seconds() * 1000.0;
    let mut budget = decimals.unwrap_or(0);
    let mut started = false;
    let mut parts = Vec::new();

    for interval in Interval::ALL {
        if budget < 0 {
            break;
        }
        let millis = interval.seconds() * 1000.0;
        let count = remaining / millis;
        if count >= 1.0 || started {
            started = true;
            let whole = count.floor();
            let plural = if whole == 1.0 { "" } else { "s" };
            parts.push(format!("{} {}{}", whole, interval.name(), plural));
            remaining %= millis;
            budget -= 1;
        }
    }
    FormattedValue::text(parts.join(", "))
}

/// `hh:mm:ss` from seconds
pub fn duration_hms(value: f64) -> FormattedValue {
    if !value.is_finite() {
        return FormattedValue::empty();
    }
    if value < 0.0 {
        return push_ago(duration_hms(-value));
    }
    let hours = (value / SECONDS_PER_HOUR).floor();
    let minutes = ((value % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor();
    let secs = (value % SECONDS_PER_HOUR % SECONDS_PER_MINUTE).floor();
    FormattedValue::text(format!("{:02}:{:02}:{:02}", hours as i64, minutes as i64, secs as i64))
}

/// `N d hh:mm:ss` from seconds; the day part is left out below one day
pub fn duration_dhms(value: f64) -> FormattedValue {
    if !value.is_finite() {
        return FormattedValue::empty();
    }
    if value < 0.0 {
        return push_ago(duration_dhms(-value));
    }
    let days = (value / SECONDS_PER_DAY).floor();
    let hms = duration_hms(value - days * SECONDS_PER_DAY).text;
    if days > 0.0 {
        FormattedValue::text(format!("{} d {}", days as i64, hms))
    } else {
        FormattedValue::text(hms)
    }
}

/// Unit of the raw value handed to the clock formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockInput {
    Milliseconds,
    Seconds,
}

/// Stopwatch rendering (`02m:05s:123ms`). `decimals` 0, 1 or 2 cuts the
/// finer fields once the value spans minutes or hours.
pub fn clock(value: f64, decimals: DecimalCount, input: ClockInput) -> FormattedValue {
    let millis = match input {
        ClockInput::Milliseconds => value,
        ClockInput::Seconds => value * 1000.0,
    };
    if !millis.is_finite() {
        return FormattedValue::empty();
    }
    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis.floor() as i64) else {
        return FormattedValue::empty();
    };
    let render = |pattern: &str| instant.format(pattern).to_string();

    if millis < 1000.0 {
        return FormattedValue::text(render("%3fms"));
    }
    if millis < 60_000.0 {
        let pattern = if decimals == Some(0) { "%Ss" } else { "%Ss:%3fms" };
        return FormattedValue::text(render(pattern));
    }
    if millis < 3_600_000.0 {
        let pattern = match decimals {
            Some(0) => "%Mm",
            Some(1) => "%Mm:%Ss",
            _ => "%Mm:%Ss:%3fms",
        };
        return FormattedValue::text(render(pattern));
    }

    let hours = format!("{:02}h", (millis / 3_600_000.0).floor() as i64);
    let pattern = match decimals {
        Some(0) => None,
        Some(1) => Some("%Mm"),
        Some(2) => Some("%Mm:%Ss"),
        _ => Some("%Mm:%Ss:%3fms"),
    };
    match pattern {
        Some(p) => FormattedValue::text(format!("{}:{}", hours, render(p))),
        None => FormattedValue::text(hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanosecond_ladder() {
        assert_eq!(TimeUnit::Nanoseconds.format(500.0, None).to_string(), "500 ns");
        assert_eq!(TimeUnit::Nanoseconds.format(1500.0, Some(1)).to_string(), "1.5 µs");
        assert_eq!(TimeUnit::Nanoseconds.format(2.5e9, Some(1)).to_string(), "2.5 s");
        assert_eq!(TimeUnit::Nanoseconds.format(1.728e14, Some(0)).to_string(), "2 day");
    }

    #[test]
    fn test_millisecond_ladder() {
        assert_eq!(TimeUnit::Milliseconds.format(999.0, None).to_string(), "999 ms");
        assert_eq!(TimeUnit::Milliseconds.format(1000.0, None).to_string(), "1 s");
        assert_eq!(TimeUnit::Milliseconds.format(90_000.0, Some(1)).to_string(), "1.5 min");
        assert_eq!(TimeUnit::Milliseconds.format(-7_200_000.0, None).to_string(), "-2 hour");
        assert_eq!(TimeUnit::Milliseconds.format(6.3072e10, Some(0)).to_string(), "2 year");
    }

    #[test]
    fn test_seconds_steps_down() {
        assert_eq!(TimeUnit::Seconds.format(0.0, Some(2)).to_string(), "0 s");
        assert_eq!(TimeUnit::Seconds.format(0.0025, Some(1)).to_string(), "2.5 ms");
        assert_eq!(TimeUnit::Seconds.format(0.00004, Some(0)).to_string(), "40 µs");
        assert_eq!(TimeUnit::Seconds.format(5e-8, Some(0)).to_string(), "50 ns");
        assert_eq!(TimeUnit::Seconds.format(30.0, None).to_string(), "30 s");
        assert_eq!(TimeUnit::Seconds.format(7200.0, None).to_string(), "2 hour");
        assert_eq!(TimeUnit::Seconds.format(1_209_600.0, None).to_string(), "2 week");
    }

    #[test]
    fn test_coarse_ladders() {
        assert_eq!(TimeUnit::Minutes.format(90.0, Some(1)).to_string(), "1.5 hour");
        assert_eq!(TimeUnit::Hours.format(48.0, None).to_string(), "2 day");
        assert_eq!(TimeUnit::Days.format(14.0, None).to_string(), "2 week");
        assert_eq!(TimeUnit::Days.format(730.0, None).to_string(), "2 year");
        assert_eq!(TimeUnit::Microseconds.format(2_000_000.0, None).to_string(), "2 s");
    }

    #[test]
    fn test_time_ticks() {
        assert_eq!(time_ticks(500.0, None).to_string(), "5 s");
        assert_eq!(time_ticks(50.0, Some(0)).to_string(), "500 ms");
    }

    #[test]
    fn test_duration_lists() {
        assert_eq!(to_duration(3723.0, Some(1), Interval::Second).text, "1 hour, 2 minutes");
        assert_eq!(to_duration(3723.0, None, Interval::Second).text, "1 hour");
        assert_eq!(to_duration(3600.0, Some(1), Interval::Second).text, "1 hour, 0 minutes");
        assert_eq!(to_duration(1500.0, Some(1), Interval::Millisecond).text, "1 second, 500 milliseconds");
    }

    #[test]
    fn test_duration_zero_and_negative() {
        let v = to_duration(0.0, None, Interval::Millisecond);
        assert_eq!(v.to_string(), "0 milliseconds");

        let v = to_duration(-60.0, None, Interval::Second);
        assert_eq!(v.text, "1 minute");
        assert_eq!(v.suffix_str(), " ago");
    }

    #[test]
    fn test_hms_and_dhms() {
        assert_eq!(duration_hms(3723.0).text, "01:02:03");
        assert_eq!(duration_hms(360_000.0).text, "100:00:00");
        assert_eq!(duration_dhms(218_096.0).text, "2 d 12:34:56");
        assert_eq!(duration_dhms(59.0).text, "00:00:59");

        let v = duration_hms(-5.0);
        assert_eq!(v.to_string(), "00:00:05 ago");
    }

    #[test]
    fn test_clock_granularity() {
        let ms = ClockInput::Milliseconds;
        assert_eq!(clock(512.0, None, ms).text, "512ms");
        assert_eq!(clock(5123.0, None, ms).text, "05s:123ms");
        assert_eq!(clock(5123.0, Some(0), ms).text, "05s");
        assert_eq!(clock(125_123.0, None, ms).text, "02m:05s:123ms");
        assert_eq!(clock(125_123.0, Some(1), ms).text, "02m:05s");
        assert_eq!(clock(3_723_000.0, None, ms).text, "01h:02m:03s:000ms");
        assert_eq!(clock(3_723_000.0, Some(0), ms).text, "01h");
        assert_eq!(clock(3_723_000.0, Some(2), ms).text, "01h:02m:03s");
    }

    #[test]
    fn test_clock_seconds_input() {
        assert_eq!(clock(61.0, None, ClockInput::Seconds).text, "01m:01s:000ms");
        assert_eq!(clock(f64::NAN, None, ClockInput::Seconds).text, "");
    }
}
