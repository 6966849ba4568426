//! Prefix-based unit formatters: SI, IEC binary, currency

use serde::Serialize;
use unitfmt_core::{to_fixed, DecimalCount, FormattedValue};
use crate::scaled::{rescale, with_label, ScaledUnits};
use crate::Formatter;

/// SI prefixes from femto to yotta
pub const SI_PREFIXES: [&str; 14] = ["f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Index of the unprefixed tier in `SI_PREFIXES`
pub const SI_BASE_INDEX: i32 = 5;

/// IEC binary prefixes
pub const BIN_PREFIXES: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

const MAGNITUDE_WORDS: [&str; 5] = ["", "K", "M", "B", "T"];

fn prefixed_labels(prefixes: &[&str], unit: &str) -> Vec<String> {
    prefixes.iter().map(|p| format!(" {}{}", p, unit)).collect()
}

/// SI-prefixed unit.
///
/// `offset` is the tier of the raw input (1 = the input is already kilo).
/// When `scalable` is false the value is never rescaled and always carries
/// the label of that tier.
pub fn si_prefix(unit: &str, offset: i32, scalable: bool) -> Formatter {
    let labels = prefixed_labels(&SI_PREFIXES, unit);
    let base = SI_BASE_INDEX + offset;
    if scalable {
        Formatter::Scaled(ScaledUnits::new(1000.0, &labels, base))
    } else {
        let idx = base.clamp(0, labels.len() as i32 - 1) as usize;
        Formatter::Fixed(crate::FixedUnit::suffix(labels[idx].trim_start()))
    }
}

/// IEC-prefixed unit. `None` picks the tier per value; `Some(e)` pins the
/// display to tier `e` (3 = always gibi).
pub fn binary_prefix(unit: &str, exponent: Option<i32>) -> Formatter {
    let labels = prefixed_labels(&BIN_PREFIXES, unit);
    match exponent {
        None => Formatter::Scaled(ScaledUnits::new(1024.0, &labels, 0)),
        Some(e) => {
            let e = e.clamp(0, labels.len() as i32 - 1);
            Formatter::Pinned(PinnedTier {
                base: 1024.0,
                exponent: e,
                label: labels[e as usize].clone(),
            })
        }
    }
}

/// Tier offset for a leading SI prefix character, 0 when it is not one.
/// Micro sign and Greek mu are treated as the same prefix.
pub fn si_offset_for_prefix(c: char) -> i32 {
    let c = if c == 'μ' { 'µ' } else { c };
    SI_PREFIXES
        .iter()
        .position(|p| p.chars().next() == Some(c))
        .map(|idx| idx as i32 - SI_BASE_INDEX)
        .unwrap_or(0)
}

/// A fixed display tier: the value is divided by `base^exponent` and always
/// labelled with that tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinnedTier {
    pub base: f64,
    pub exponent: i32,
    pub label: String,
}

impl PinnedTier {
    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        if !value.is_finite() {
            return FormattedValue::text(to_fixed(value, decimals));
        }
        let text = to_fixed(rescale(value, self.base, self.exponent), decimals);
        with_label(text, &self.label)
    }
}

/// Currency: magnitude words (K, M, B, T) plus a symbol before or after
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    pub symbol: String,
    pub after_value: bool,
    #[serde(skip)]
    scaler: ScaledUnits,
}

impl Currency {
    pub fn new(symbol: &str, after_value: bool) -> Self {
        Currency {
            symbol: symbol.to_string(),
            after_value,
            scaler: ScaledUnits::new(1000.0, &MAGNITUDE_WORDS, 0),
        }
    }

    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        let negative = value < 0.0;
        let mut out = self.scaler.format(value.abs(), decimals);

        if self.after_value {
            out.push_suffix(&self.symbol);
        } else {
            out.prefix = Some(self.symbol.clone());
        }
        if negative {
            out.prefix = Some(format!("-{}", out.prefix_str()));
        }
        out
    }
}

pub fn currency(symbol: &str, after_value: bool) -> Formatter {
    Formatter::Currency(Currency::new(symbol, after_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_prefix_kilo() {
        let f = si_prefix("B", 0, true);
        let v = f.format(1500.0, Some(2), None);
        assert_eq!(v.text, "1.50");
        assert_eq!(v.suffix_str(), " kB");
        assert_eq!(v.to_string(), "1.50 kB");
    }

    #[test]
    fn test_si_prefix_zero_has_no_prefix() {
        let f = si_prefix("W", 0, true);
        assert_eq!(f.format(0.0, None, None).to_string(), "0 W");
    }

    #[test]
    fn test_si_prefix_sub_unit() {
        let f = si_prefix("s", 0, true);
        assert_eq!(f.format(0.0025, Some(1), None).to_string(), "2.5 ms");
        assert_eq!(f.format(0.000002, Some(0), None).to_string(), "2 µs");
    }

    #[test]
    fn test_si_prefix_negative() {
        let f = si_prefix("V", 0, true);
        assert_eq!(f.format(-2500.0, Some(1), None).to_string(), "-2.5 kV");
    }

    #[test]
    fn test_si_prefix_offset_means_input_tier() {
        // Input already in kilowatts
        let f = si_prefix("W", 1, true);
        assert_eq!(f.format(5.0, None, None).to_string(), "5 kW");
        assert_eq!(f.format(1500.0, Some(1), None).to_string(), "1.5 MW");
        assert_eq!(f.format(0.5, Some(0), None).to_string(), "500 W");

        // Input in milliamps
        let f = si_prefix("A", -1, true);
        assert_eq!(f.format(250.0, None, None).to_string(), "250 mA");
    }

    #[test]
    fn test_si_prefix_clamps_to_extremes() {
        let f = si_prefix("B", 0, true);
        let v = f.format(1e30, Some(0), None);
        assert_eq!(v.suffix_str(), " YB");
        assert_eq!(v.text, "1000000");

        let v = f.format(1e-20, Some(0), None);
        assert_eq!(v.suffix_str(), " fB");
        assert_eq!(v.text, "0");
    }

    #[test]
    fn test_si_prefix_not_scalable_pins_tier() {
        let f = si_prefix("B", 2, false);
        assert_eq!(f.format(123456.0, Some(0), None).to_string(), "123456 MB");
        assert_eq!(f.format(0.5, Some(1), None).to_string(), "0.5 MB");
    }

    #[test]
    fn test_binary_prefix_boundary() {
        let f = binary_prefix("B", None);
        let v = f.format(1024.0, None, None);
        assert_eq!(v.text, "1");
        assert_eq!(v.suffix_str(), " KiB");

        // 1000 stays below the first binary tier
        assert_eq!(f.format(1000.0, None, None).to_string(), "1000 B");
        assert_eq!(f.format(1536.0, Some(1), None).to_string(), "1.5 KiB");
    }

    #[test]
    fn test_binary_prefix_pinned() {
        let f = binary_prefix("B", Some(3));
        let v = f.format(1073741824.0, None, None);
        assert_eq!(v.text, "1");
        assert_eq!(v.suffix_str(), " GiB");

        // No auto-tiering away from the pinned tier
        let v = f.format(1099511627776.0, None, None);
        assert_eq!(v.to_string(), "1024 GiB");
    }

    #[test]
    fn test_binary_prefix_pinned_out_of_range_clamps() {
        let f = binary_prefix("b", Some(42));
        assert_eq!(f.format(0.0, None, None).suffix_str(), " Yib");
    }

    #[test]
    fn test_si_offset_for_prefix() {
        assert_eq!(si_offset_for_prefix('k'), 1);
        assert_eq!(si_offset_for_prefix('M'), 2);
        assert_eq!(si_offset_for_prefix('m'), -1);
        assert_eq!(si_offset_for_prefix('µ'), -2);
        assert_eq!(si_offset_for_prefix('μ'), -2);
        assert_eq!(si_offset_for_prefix('x'), 0);
    }

    #[test]
    fn test_currency_prefix_symbol() {
        let f = currency("$", false);
        assert_eq!(f.format(1500.0, Some(1), None).to_string(), "$1.5K");
        assert_eq!(f.format(12.0, None, None).to_string(), "$12");
        assert_eq!(f.format(-2_000_000.0, Some(0), None).to_string(), "-$2M");
    }

    #[test]
    fn test_currency_suffix_symbol() {
        let f = currency("kr", true);
        assert_eq!(f.format(250.0, None, None).to_string(), "250kr");
        assert_eq!(f.format(3000.0, Some(0), None).to_string(), "3Kkr");
        let v = f.format(-5.0, None, None);
        assert_eq!(v.prefix_str(), "-");
        assert_eq!(v.to_string(), "-5kr");
    }
}
