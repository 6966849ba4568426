//! Power-of-base scaling with an explicit label ladder

use serde::Serialize;
use unitfmt_core::{to_fixed, DecimalCount, FormattedValue};

/// Scales a value by powers of `factor` and picks the matching label.
///
/// `labels[offset]` is the label for an unscaled value; the ladder is
/// clamped at both ends so out-of-range magnitudes keep the extreme label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledUnits {
    pub factor: f64,
    pub labels: Vec<String>,
    pub offset: i32,
}

impl ScaledUnits {
    pub fn new<S: AsRef<str>>(factor: f64, labels: &[S], offset: i32) -> Self {
        let mut labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        if labels.is_empty() {
            labels.push(String::new());
        }
        ScaledUnits { factor, labels, offset }
    }

    fn len(&self) -> i32 {
        self.labels.len() as i32
    }

    /// Label for an absolute tier (already offset), clamped into the ladder
    pub fn label(&self, tier: i32) -> &str {
        let idx = tier.clamp(0, self.len() - 1) as usize;
        &self.labels[idx]
    }

    pub fn format(&self, value: f64, decimals: DecimalCount) -> FormattedValue {
        if !value.is_finite() {
            return FormattedValue::text(to_fixed(value, decimals));
        }

        let tier = if value == 0.0 { 0 } else { tier_index(value.abs(), self.factor) };
        let label = self.label(self.offset + tier);

        // offset + exponent is the same clamped tier the label came from
        let exponent = tier.clamp(-self.offset, self.len() - self.offset - 1);
        let text = to_fixed(rescale(value, self.factor, exponent), decimals);
        with_label(text, label)
    }
}

pub(crate) fn with_label(text: String, label: &str) -> FormattedValue {
    if label.is_empty() {
        FormattedValue::text(text)
    } else {
        FormattedValue::with_suffix(text, label)
    }
}

/// `value / factor^exponent`, multiplying for negative exponents so that
/// sub-unit tiers do not pick up reciprocal rounding error
pub(crate) fn rescale(value: f64, factor: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value / factor.powi(exponent)
    } else {
        value * factor.powi(-exponent)
    }
}

/// `floor(log_factor(abs))`, corrected so exact powers land in the upper tier
pub fn tier_index(abs: f64, factor: f64) -> i32 {
    if !(factor > 1.0) || !(abs > 0.0) || !abs.is_finite() {
        return 0;
    }
    let mut tier = (abs.log10() / factor.log10()).floor() as i32;
    while factor.powi(tier + 1) <= abs {
        tier += 1;
    }
    while tier > i32::MIN + 1 && factor.powi(tier) > abs {
        tier -= 1;
    }
    tier
}

/// Scaled-units formatter for an arbitrary base and label list
pub fn scaled_units<S: AsRef<str>>(factor: f64, labels: &[S], offset: i32) -> ScaledUnits {
    ScaledUnits::new(factor, labels, offset)
}
