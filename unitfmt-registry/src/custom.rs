//! `key:sub` ids that build a formatter on the fly

use std::sync::Arc;

use unitfmt_formats::{
    boolean, currency, fixed_unit, si_offset_for_prefix, si_prefix, simple_count, DateTimeAdapter,
    DateTimeFormatter, Formatter,
};

/// Label used for false values when `bool:` gives only a true label
const DEFAULT_FALSE_LABEL: &str = "-";

/// Build the formatter for a custom id, `None` when `id` is not of a known
/// `key:sub` form.
///
/// | key        | formatter                                                   |
/// |------------|-------------------------------------------------------------|
/// | `prefix`   | `sub` before the number                                     |
/// | `suffix`   | `sub` after the number                                      |
/// | `si`       | SI-scaled `sub`; a leading SI prefix character is the input tier |
/// | `count`    | count per unit (`K`/`M`/`B`/`T`) followed by `sub`          |
/// | `currency` | currency symbol `sub` before the number                     |
/// | `time`     | strftime pattern `sub`                                      |
/// | `bool`     | `true/false` labels, or `true` alone                         |
pub fn parse_custom(id: &str, adapter: &Arc<dyn DateTimeAdapter>) -> Option<Formatter> {
    let (key, sub) = id.split_once(':')?;
    if key.is_empty() {
        return None;
    }

    let formatter = match key {
        "prefix" => fixed_unit(sub, true),
        "suffix" => fixed_unit(sub, false),
        "si" => {
            let mut chars = sub.chars();
            let offset = chars.next().map(si_offset_for_prefix).unwrap_or(0);
            let unit = if offset == 0 { sub } else { chars.as_str() };
            si_prefix(unit, offset, true)
        }
        "count" => simple_count(sub),
        "currency" => currency(sub, false),
        "time" => Formatter::DateTime(DateTimeFormatter::pattern(sub, adapter.clone())),
        "bool" => match sub.split_once('/') {
            Some((t, f)) => boolean(t, f),
            None => boolean(sub, DEFAULT_FALSE_LABEL),
        },
        _ => return None,
    };
    Some(formatter)
}
