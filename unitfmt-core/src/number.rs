//! Number rendering shared by every formatter
//!
//! Display strings must match what dashboards have always shown, so the
//! rounding and shortest-digit rules follow ECMAScript number semantics
//! rather than Rust's `{:.N}` formatting (which rounds half to even on the
//! binary value and never switches to exponent notation).

use crate::FormattedValue;

/// Decimal-place hint. `None` lets the formatter pick from the magnitude.
pub type DecimalCount = Option<i32>;

/// Largest number of places `to_fixed` will pad to
const MAX_PLACES: i32 = 100;

/// Digits after the first that hold the full decimal expansion of any double
pub const EXACT_DIGITS: usize = 800;

/// Round half toward positive infinity (`Math.round`).
pub fn js_round(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= 4_503_599_627_370_496.0 {
        // 2^52 and above are already integers
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Shortest round-trip rendering of a number, switching to exponent
/// notation below `1e-6` and at or above `1e21`.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", value);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", value)
}

/// Decimal places used when the caller gives none: three significant
/// digits, integers get none.
pub fn decimals_for_value(value: f64) -> i32 {
    if !value.is_finite() || value.fract() == 0.0 {
        return 0;
    }
    let magnitude = value.abs().log10().floor() as i32;
    (2 - magnitude).max(0)
}

/// Render `value` with `decimals` places (auto-selected when `None`).
///
/// Zeros are padded up to the requested precision; values whose shortest
/// form needs exponent notation are returned as-is.
pub fn to_fixed(value: f64, decimals: DecimalCount) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let decimals = decimals.unwrap_or_else(|| decimals_for_value(value));
    let places = decimals.clamp(0, MAX_PLACES);

    if value == 0.0 {
        return format!("{:.*}", places as usize, 0.0);
    }

    let factor = 10f64.powi(places);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() { js_round(scaled) / factor } else { value };
    let mut formatted = js_number_string(rounded);

    if formatted.contains('e') {
        return formatted;
    }

    let precision = formatted
        .find('.')
        .map(|pos| formatted.len() - pos - 1)
        .unwrap_or(0) as i32;

    if precision < places {
        if precision == 0 {
            formatted.push('.');
        }
        for _ in precision..places {
            formatted.push('0');
        }
    }
    formatted
}

/// Decimal digits (ASCII) and base-10 exponent of `|value|`, so that
/// `d0.d1d2... * 10^exp` is the magnitude.
///
/// `None` gives the shortest round-trip digits; `Some(n)` gives `n` digits
/// after the first, correctly rounded from the binary value. Every finite
/// double expands exactly within `EXACT_DIGITS`.
pub fn scientific_digits(value: f64, places: Option<usize>) -> (Vec<u8>, i32) {
    let abs = value.abs();
    let raw = match places {
        Some(n) => format!("{:.*e}", n, abs),
        None => format!("{:e}", abs),
    };
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Cut `digits` to `keep` digits, rounding half away from zero on the first
/// dropped digit. Returns `true` when a carry added a leading digit, in
/// which case `digits` holds `keep + 1` digits.
pub fn round_digits_half_up(digits: &mut Vec<u8>, keep: usize) -> bool {
    if digits.len() <= keep {
        return false;
    }
    let round_up = digits[keep] >= b'5';
    digits.truncate(keep);
    if !round_up {
        return false;
    }
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// `to_fixed` text with a literal suffix
pub fn to_fixed_scaled(value: f64, decimals: DecimalCount, suffix: &str) -> FormattedValue {
    FormattedValue::with_suffix(to_fixed(value, decimals), suffix)
}
