//! # Number Formatting
//!
//! Three renderings are used throughout the calculator:
//!
//! - [`format_number`] - shortest round-trip text (`8`, `2.5`, `0.30000000000000004`),
//!   used for operands in the stream and for history entries
//! - [`format_fixed`] - fixed decimal places, used for quadratic roots
//! - [`format_grouped`] / [`format_display_text`] - locale-style grouping with a
//!   bounded number of fraction digits, used for the big display
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_fixed, format_grouped, format_number, NumberLocale};
//!
//! assert_eq!(format_number(8.0), "8");
//! assert_eq!(format_fixed(2.0, 4), "2.0000");
//! assert_eq!(format_grouped(1234567.123456789, 8, &NumberLocale::default()), "1,234,567.12345679");
//! ```

use serde::{Deserialize, Serialize};

/// Separators used when grouping a number for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Thousands separator; `None` disables grouping
    pub group_separator: Option<char>,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
}

impl Default for NumberLocale {
    /// English conventions: `1,234.5`
    fn default() -> Self {
        NumberLocale {
            group_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

/// Magnitudes from here up are printed in exponent form
const EXPONENT_FROM: f64 = 1e21;
/// Non-zero magnitudes below this are printed in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest text that parses back to the same value.
///
/// Negative zero prints as `0` and non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`. Magnitudes of `1e21` and up, or below `1e-6`,
/// use exponent form with an explicit sign (`1e+21`, `2.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if needs_exponent(value) {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    value.to_string()
}

/// Fixed number of decimal places (`-0` is printed without its sign).
///
/// Values that [`format_number`] would print in exponent form, and
/// non-finite values, are delegated to it.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_FROM {
        return format_number(value);
    }
    // -0.0 + 0.0 == +0.0
    format!("{:.*}", decimals, value + 0.0)
}

fn needs_exponent(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= EXPONENT_FROM || magnitude < EXPONENT_BELOW
}

/// Round to at most `max_fraction_digits`, drop trailing zeros and group the
/// integer part.
pub fn format_grouped(value: f64, max_fraction_digits: usize, locale: &NumberLocale) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_FROM {
        return format_number(value);
    }

    let rounded = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut out = String::with_capacity(rounded.len() + 8);
    out.push_str(sign);
    out.push_str(&group_digits(int_part, locale.group_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Format the raw display text of the keypad.
///
/// An operand still being typed keeps its exact digits (including a trailing
/// decimal point or trailing zeros) as long as it fits in
/// `max_fraction_digits`; everything else goes through [`format_grouped`].
/// Text that is not a number at all is returned unchanged.
pub fn format_display_text(raw: &str, max_fraction_digits: usize, locale: &NumberLocale) -> String {
    let Ok(value) = raw.parse::<f64>() else {
        return raw.to_string();
    };

    if let Some((negative, int_part, frac_part)) = split_typed_operand(raw) {
        if frac_part.map_or(true, |f| f.len() <= max_fraction_digits) {
            let mut out = String::new();
            if negative {
                out.push('-');
            }
            out.push_str(&group_digits(int_part, locale.group_separator));
            if let Some(frac) = frac_part {
                out.push(locale.decimal_separator);
                out.push_str(frac);
            }
            return out;
        }
    }

    format_grouped(value, max_fraction_digits, locale)
}

/// Split `-?digits(.digits*)?` into its pieces, or `None` for any other shape.
fn split_typed_operand(raw: &str) -> Option<(bool, &str, Option<&str>)> {
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }
    Some((negative, int_part, frac_part))
}

fn group_digits(int_part: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return int_part.to_string();
    };

    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e200), "1e+200");
        assert_eq!(format_number(-1.5e21), "-1.5e+21");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_fixed(1e200, 4), "1e+200");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 4), "-Infinity");
        assert_eq!(format_grouped(1e25, 8, &NumberLocale::default()), "1e+25");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(-1.0, 4), "-1.0000");
        assert_eq!(format_fixed(-0.0, 4), "0.0000");
        assert_eq!(format_fixed(1.0 / 3.0, 4), "0.3333");
    }

    #[test]
    fn test_format_grouped() {
        let en = NumberLocale::default();
        assert_eq!(format_grouped(0.0, 8, &en), "0");
        assert_eq!(format_grouped(1000.0, 8, &en), "1,000");
        assert_eq!(format_grouped(-1234.5, 8, &en), "-1,234.5");
        assert_eq!(format_grouped(0.1 + 0.2, 8, &en), "0.3");
        assert_eq!(format_grouped(-0.000000001, 8, &en), "0");
        assert_eq!(format_grouped(999.0, 8, &en), "999");
    }

    #[test]
    fn test_format_grouped_custom_locale() {
        let de = NumberLocale {
            group_separator: Some('.'),
            decimal_separator: ',',
        };
        assert_eq!(format_grouped(1234567.25, 8, &de), "1.234.567,25");

        let plain = NumberLocale {
            group_separator: None,
            decimal_separator: '.',
        };
        assert_eq!(format_grouped(1234567.25, 8, &plain), "1234567.25");
    }

    #[test]
    fn test_format_display_text_keeps_typing_state() {
        let en = NumberLocale::default();
        assert_eq!(format_display_text("0.", 8, &en), "0.");
        assert_eq!(format_display_text("1200.50", 8, &en), "1,200.50");
        assert_eq!(format_display_text("-12345", 8, &en), "-12,345");
        assert_eq!(format_display_text("0.30000000000000004", 8, &en), "0.3");
        assert_eq!(format_display_text("Error", 8, &en), "Error");
    }
}
