//! Literal-unit, count, boolean and plain-number formatters

use unitfmt_core::{
    js_number_string, round_digits_half_up, scientific_digits, to_fixed, DecimalCount, FormattedValue,
};
use serde::Serialize;
use crate::scaled::ScaledUnits;

/// Default fraction digits for `locale` when no decimals are given
const LOCALE_DEFAULT_FRACTION: i32 = 3;
const LOCALE_MAX_FRACTION: i32 = 20;

/// A literal unit string placed after (`" " + unit`) or before the number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedUnit {
    pub unit: String,
    pub as_prefix: bool,
}

impl FixedUnit {
    pub fn suffix(unit: &str) -> Self {
        FixedUnit { unit: unit.to_string(), as_prefix: false }
    }

    pub fn prefix(unit: &str) -> Self {
        FixedUnit { unit: unit.to_string(), as_prefix: true }
    }

    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        let text = to_fixed(value, decimals);
        if self.unit.is_empty() {
            FormattedValue::text(text)
        } else if self.as_prefix {
            FormattedValue::with_prefix(self.unit.as_str(), text)
        } else {
            FormattedValue::with_suffix(text, format!(" {}", self.unit))
        }
    }
}

/// Count per time unit: K/M/B/T magnitude words, then the symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleCount {
    pub symbol: String,
    #[serde(skip)]
    scaler: ScaledUnits,
}

impl SimpleCount {
    pub fn new(symbol: &str) -> Self {
        SimpleCount {
            symbol: symbol.to_string(),
            scaler: ScaledUnits::new(1000.0, &["", "K", "M", "B", "T"], 0),
        }
    }

    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        let mut out = self.scaler.format(value, decimals);
        out.push_suffix(&format!(" {}", self.symbol));
        out
    }
}

/// Maps a number to one of two labels.
///
/// `0`, `-0` and `NaN` are false; every other value (infinities included)
/// is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanLabels {
    pub true_label: String,
    pub false_label: String,
}

impl BooleanLabels {
    pub fn new(true_label: &str, false_label: &str) -> Self {
        BooleanLabels { true_label: true_label.to_string(), false_label: false_label.to_string() }
    }

    pub fn format(&self, value: f64) -> FormattedValue {
        let truthy = !(value == 0.0 || value.is_nan());
        let label = if truthy { &self.true_label } else { &self.false_label };
        FormattedValue::text(label.as_str())
    }
}

/// Grouped rendering (`1,234,567.891`) with at most `decimals` fraction
/// digits and no trailing zeros.
///
/// Rounds the shortest decimal form half away from zero and never uses
/// exponent notation, like `toLocaleString`.
pub fn locale(value: f64, decimals: DecimalCount) -> FormattedValue {
    if !value.is_finite() {
        return FormattedValue::text(to_fixed(value, None));
    }
    let places = decimals.unwrap_or(LOCALE_DEFAULT_FRACTION).clamp(0, LOCALE_MAX_FRACTION);

    let (mut digits, exp) = scientific_digits(value, None);
    // digits before the decimal point
    let mut point = exp + 1;
    if point < 1 {
        let mut padded = vec![b'0'; (1 - point) as usize];
        padded.extend_from_slice(&digits);
        digits = padded;
        point = 1;
    }
    let mut int_len = point as usize;
    if digits.len() < int_len {
        digits.resize(int_len, b'0');
    }
    if round_digits_half_up(&mut digits, int_len + places as usize) {
        int_len += 1;
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let int_part = std::str::from_utf8(int_digits).unwrap_or("0").trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = std::str::from_utf8(frac_digits).unwrap_or("").trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part == "0" && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    FormattedValue::text(out)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The raw number as a string, no rounding
pub fn string(value: f64) -> FormattedValue {
    FormattedValue::text(js_number_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_unit_suffix() {
        let f = FixedUnit::suffix("ppm");
        assert_eq!(f.format(12.345, Some(1)).to_string(), "12.3 ppm");
        assert_eq!(f.format(10.0, None).suffix_str(), " ppm");
    }

    #[test]
    fn test_fixed_unit_prefix_and_empty() {
        let f = FixedUnit::prefix("~");
        let v = f.format(3.0, None);
        assert_eq!(v.prefix_str(), "~");
        assert_eq!(v.to_string(), "~3");

        let f = FixedUnit::suffix("");
        let v = f.format(3.0, None);
        assert_eq!(v.suffix, None);
        assert_eq!(v.prefix, None);
    }

    #[test]
    fn test_simple_count() {
        let f = SimpleCount::new("req/s");
        assert_eq!(f.format(12.0, None).to_string(), "12 req/s");
        assert_eq!(f.format(1500.0, Some(1)).to_string(), "1.5K req/s");
        assert_eq!(f.format(3_000_000.0, Some(0)).to_string(), "3M req/s");
    }

    #[test]
    fn test_boolean_truthiness() {
        let f = BooleanLabels::new("Yes", "No");
        assert_eq!(f.format(0.0).text, "No");
        assert_eq!(f.format(-0.0).text, "No");
        assert_eq!(f.format(f64::NAN).text, "No");
        assert_eq!(f.format(1.0).text, "Yes");
        assert_eq!(f.format(-3.5).text, "Yes");
        assert_eq!(f.format(f64::INFINITY).text, "Yes");
    }

    #[test]
    fn test_locale_grouping() {
        assert_eq!(locale(1234567.891, None).text, "1,234,567.891");
        assert_eq!(locale(1234567.891, Some(1)).text, "1,234,567.9");
        assert_eq!(locale(-1234.5, Some(2)).text, "-1,234.5");
        assert_eq!(locale(999.0, None).text, "999");
        assert_eq!(locale(-0.0001, Some(2)).text, "0");
    }

    #[test]
    fn test_locale_rounds_decimal_form() {
        assert_eq!(locale(1.005, Some(2)).text, "1.01");
        assert_eq!(locale(0.0005, Some(3)).text, "0.001");
        assert_eq!(locale(9.9996, Some(3)).text, "10");
        assert_eq!(locale(999_999.5, Some(0)).text, "1,000,000");
        assert_eq!(locale(0.0, None).text, "0");
    }

    #[test]
    fn test_locale_never_uses_exponent() {
        assert_eq!(locale(1e21, None).text, "1,000,000,000,000,000,000,000");
        assert_eq!(locale(-2.5e22, Some(0)).text, "-25,000,000,000,000,000,000,000");
        assert_eq!(locale(1.5e-7, Some(2)).text, "0");
        assert_eq!(locale(1.5e-7, Some(7)).text, "0.0000002");
    }

    #[test]
    fn test_string_passthrough() {
        assert_eq!(string(0.1).text, "0.1");
        assert_eq!(string(1e21).text, "1e+21");
    }
}
