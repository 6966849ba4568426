//! Percent, hexadecimal and scientific notation

use unitfmt_core::{
    js_number_string, round_digits_half_up, scientific_digits, to_fixed, DecimalCount, FormattedValue,
    EXACT_DIGITS,
};

const MAX_EXPONENT_DIGITS: i32 = 100;

/// Value already in 0-100
pub fn percent(value: f64, decimals: DecimalCount) -> FormattedValue {
    FormattedValue::with_suffix(to_fixed(value, decimals), "%")
}

/// Value in 0.0-1.0
pub fn percent_unit(value: f64, decimals: DecimalCount) -> FormattedValue {
    FormattedValue::with_suffix(to_fixed(100.0 * value, decimals), "%")
}

/// Upper-case base-16 rendering of the rounded value
pub fn hex(value: f64, decimals: DecimalCount) -> FormattedValue {
    let rounded = to_fixed(value, decimals);
    match rounded.parse::<f64>() {
        Ok(v) if v.is_finite() => FormattedValue::text(to_hex_string(v).to_uppercase()),
        _ => FormattedValue::text(rounded),
    }
}

/// `hex` with a `0x` marker after the sign
pub fn hex0x(value: f64, decimals: DecimalCount) -> FormattedValue {
    let digits = hex(value, decimals).text;
    match digits.strip_prefix('-') {
        Some(rest) => FormattedValue::text(format!("-0x{}", rest)),
        None => FormattedValue::text(format!("0x{}", digits)),
    }
}

/// Exponent notation, `1.50e+3` style.
///
/// With explicit decimals the exact binary value is rounded half away from
/// zero, as `Number.prototype.toExponential` does.
pub fn sci(value: f64, decimals: DecimalCount) -> FormattedValue {
    if !value.is_finite() {
        return FormattedValue::text(js_number_string(value));
    }
    let places = decimals.map(|d| d.clamp(0, MAX_EXPONENT_DIGITS) as usize);
    if value == 0.0 {
        let zeros = places.map(|p| "0".repeat(p)).unwrap_or_default();
        let point = if zeros.is_empty() { "" } else { "." };
        return FormattedValue::text(format!("0{}{}e+0", point, zeros));
    }

    let (digits, exp) = match places {
        Some(p) => {
            let (mut digits, exp) = scientific_digits(value, Some(EXACT_DIGITS));
            let carried = round_digits_half_up(&mut digits, p + 1);
            if carried {
                digits.truncate(p + 1);
            }
            (digits, exp + i32::from(carried))
        }
        None => scientific_digits(value, None),
    };

    let mut text = String::new();
    if value < 0.0 {
        text.push('-');
    }
    text.push(char::from(digits[0]));
    if digits.len() > 1 {
        text.push('.');
        text.extend(digits[1..].iter().map(|&d| char::from(d)));
    }
    let sign = if exp < 0 { '-' } else { '+' };
    text.push_str(&format!("e{}{}", sign, exp.abs()));
    FormattedValue::text(text)
}

/// Exact base-16 digits of a finite double, lower case, fraction included.
///
/// Every finite double is `mantissa * 2^exp`, so the hex expansion always
/// terminates; it is produced straight from the bits.
pub fn to_hex_string(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return js_number_string(value);
    }

    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    if exp >= 0 {
        let head = (mantissa as u128) << (exp % 4);
        out.push_str(&format!("{:x}", head));
        out.push_str(&"0".repeat((exp / 4) as usize));
        return out;
    }

    let frac_bits = (-exp) as u32;
    let int_part = if frac_bits >= 64 { 0 } else { mantissa >> frac_bits };
    let frac_mask = if frac_bits >= 64 { u64::MAX } else { (1u64 << frac_bits) - 1 };
    let pad = (4 - frac_bits % 4) % 4;
    let frac_value = ((mantissa & frac_mask) as u128) << pad;
    let width = ((frac_bits + pad) / 4) as usize;

    out.push_str(&format!("{:x}", int_part));
    if frac_value != 0 {
        let digits = format!("{:0width$x}", frac_value, width = width);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(42.123, Some(1)).to_string(), "42.1%");
        assert_eq!(percent_unit(0.4213, Some(1)).to_string(), "42.1%");
        assert_eq!(percent_unit(1.0, None).to_string(), "100%");
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(to_hex_string(255.0), "ff");
        assert_eq!(to_hex_string(4096.0), "1000");
        assert_eq!(to_hex_string(-16.0), "-10");
        assert_eq!(to_hex_string(0.5), "0.8");
        assert_eq!(to_hex_string(10.25), "a.4");
        assert_eq!(to_hex_string(0.1), "0.1999999999999a");
        assert_eq!(to_hex_string(2f64.powi(60)), "1000000000000000");
    }

    #[test]
    fn test_hex_rounds_first() {
        assert_eq!(hex(255.4, Some(0)).text, "FF");
        assert_eq!(hex(10.25, Some(2)).text, "A.4");
        assert_eq!(hex0x(255.0, None).text, "0xFF");
        assert_eq!(hex0x(-255.0, None).text, "-0xFF");
    }

    #[test]
    fn test_sci() {
        assert_eq!(sci(1500.0, Some(2)).text, "1.50e+3");
        assert_eq!(sci(1500.0, None).text, "1.5e+3");
        assert_eq!(sci(0.00012, Some(1)).text, "1.2e-4");
        assert_eq!(sci(0.0, None).text, "0e+0");
        assert_eq!(sci(0.0, Some(2)).text, "0.00e+0");
        assert_eq!(sci(-1500.0, Some(1)).text, "-1.5e+3");
    }

    #[test]
    fn test_sci_rounds_ties_up() {
        assert_eq!(sci(2.5, Some(0)).text, "3e+0");
        assert_eq!(sci(1.25, Some(1)).text, "1.3e+0");
        assert_eq!(sci(-2.5, Some(0)).text, "-3e+0");
        assert_eq!(sci(9.5, Some(0)).text, "1e+1");
        // stored below the tie
        assert_eq!(sci(1.005, Some(2)).text, "1.00e+0");
    }

    #[test]
    fn test_sci_negative_zero() {
        assert_eq!(sci(-0.0, None).text, "0e+0");
        assert_eq!(sci(-0.0, Some(1)).text, "0.0e+0");
    }
}
