//! Date and time formatters
//!
//! Calendar math is delegated to a [`DateTimeAdapter`]. The default
//! [`ChronoAdapter`] renders strftime patterns through `chrono` in UTC, the
//! host's local zone, or any IANA zone from `chrono-tz`. Its clock can be
//! pinned to a fixed instant so that "today" and "from now" are
//! reproducible.

use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use unitfmt_core::{js_round, FormatError, FormattedValue};

pub const ISO_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const ISO_TIME_PATTERN: &str = "%H:%M:%S";
pub const US_PATTERN: &str = "%m/%d/%Y %-I:%M:%S %P";
pub const US_TIME_PATTERN: &str = "%-I:%M:%S %P";
pub const LOCAL_PATTERN: &str = "%m/%d/%Y, %I:%M:%S %p";
pub const LOCAL_TIME_PATTERN: &str = "%I:%M:%S %p";
pub const SYSTEM_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const SYSTEM_MS_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Calendar backend used by the date/time formatters
pub trait DateTimeAdapter: fmt::Debug + Send + Sync {
    /// Render an epoch-millisecond timestamp; `None` when the instant is
    /// not representable or the pattern is invalid
    fn format(&self, epoch_ms: f64, pattern: &str) -> Option<String>;

    /// Whether the timestamp falls on the current calendar day
    fn is_today(&self, epoch_ms: f64) -> bool;

    /// Relative description such as `in 3 hours` or `2 years ago`
    fn from_now(&self, epoch_ms: f64) -> Option<String>;
}

/// Display time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    /// Host time zone (`browser` in dashboard settings)
    Local,
    Named(Tz),
}

impl FromStr for Zone {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "utc" => Ok(Zone::Utc),
            "" | "browser" | "local" => Ok(Zone::Local),
            _ => trimmed
                .parse::<Tz>()
                .map(Zone::Named)
                .map_err(|_| FormatError::InvalidTimeZone(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => write!(f, "utc"),
            Zone::Local => write!(f, "browser"),
            Zone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Source of "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChronoAdapter {
    zone: Zone,
    clock: Clock,
}

impl ChronoAdapter {
    pub fn new(zone: Zone) -> Self {
        ChronoAdapter { zone, clock: Clock::System }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.zone {
            Zone::Utc => instant.date_naive(),
            Zone::Local => instant.with_timezone(&Local).date_naive(),
            Zone::Named(tz) => instant.with_timezone(&tz).date_naive(),
        }
    }
}

impl Default for ChronoAdapter {
    fn default() -> Self {
        ChronoAdapter::new(Zone::Utc)
    }
}

fn instant(epoch_ms: f64) -> Option<DateTime<Utc>> {
    if !epoch_ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(epoch_ms.floor() as i64)
}

fn render<Z: TimeZone>(at: DateTime<Z>, pattern: &str) -> Option<String>
where
    Z::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(pattern)).ok()?;
    Some(out)
}

impl DateTimeAdapter for ChronoAdapter {
    fn format(&self, epoch_ms: f64, pattern: &str) -> Option<String> {
        let at = instant(epoch_ms)?;
        match self.zone {
            Zone::Utc => render(at, pattern),
            Zone::Local => render(at.with_timezone(&Local), pattern),
            Zone::Named(tz) => render(at.with_timezone(&tz), pattern),
        }
    }

    fn is_today(&self, epoch_ms: f64) -> bool {
        match instant(epoch_ms) {
            Some(at) => self.local_date(at) == self.local_date(self.clock.now()),
            None => false,
        }
    }

    fn from_now(&self, epoch_ms: f64) -> Option<String> {
        if !epoch_ms.is_finite() {
            return None;
        }
        let now = self.clock.now().timestamp_millis() as f64;
        Some(relative_time(epoch_ms - now))
    }
}

/// Humanized offset from now in milliseconds, positive meaning the future
pub fn relative_time(delta_ms: f64) -> String {
    let abs = delta_ms.abs();
    let seconds = js_round(abs / 1000.0);
    let minutes = js_round(abs / 60_000.0);
    let hours = js_round(abs / 3_600_000.0);
    let days = js_round(abs / 86_400_000.0);
    let months = js_round(abs / 86_400_000.0 / 30.436875);
    let years = js_round(abs / 86_400_000.0 / 365.2425);

    let phrase = if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    };

    if delta_ms > 0.0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeKind {
    /// Strftime pattern, with an optional shorter pattern for today
    Pattern { pattern: String, today_pattern: Option<String> },
    FromNow,
}

/// Formats epoch-millisecond values through an adapter
#[derive(Debug, Clone, Serialize)]
pub struct DateTimeFormatter {
    pub kind: DateTimeKind,
    #[serde(skip)]
    adapter: Arc<dyn DateTimeAdapter>,
}

impl DateTimeFormatter {
    pub fn new(kind: DateTimeKind, adapter: Arc<dyn DateTimeAdapter>) -> Self {
        DateTimeFormatter { kind, adapter }
    }

    pub fn pattern(pattern: &str, adapter: Arc<dyn DateTimeAdapter>) -> Self {
        Self::new(DateTimeKind::Pattern { pattern: pattern.to_string(), today_pattern: None }, adapter)
    }

    pub fn pattern_or_today(pattern: &str, today: &str, adapter: Arc<dyn DateTimeAdapter>) -> Self {
        Self::new(
            DateTimeKind::Pattern {
                pattern: pattern.to_string(),
                today_pattern: Some(today.to_string()),
            },
            adapter,
        )
    }

    pub fn from_now(adapter: Arc<dyn DateTimeAdapter>) -> Self {
        Self::new(DateTimeKind::FromNow, adapter)
    }

    pub fn format(&self, epoch_ms: f64) -> FormattedValue {
        let rendered = match &self.kind {
            DateTimeKind::Pattern { pattern, today_pattern } => {
                let pattern = match today_pattern {
                    Some(today) if self.adapter.is_today(epoch_ms) => today,
                    _ => pattern,
                };
                self.adapter.format(epoch_ms, pattern)
            }
            DateTimeKind::FromNow => self.adapter.from_now(epoch_ms),
        };
        rendered.map(FormattedValue::text).unwrap_or_default()
    }
}
