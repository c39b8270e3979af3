//! Number formatting and pixel-unit helpers.

use crate::value::StyleValue;

/// Formats a number the way JavaScript converts numbers to strings.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes of at least `1e21` or below `1e-6` use exponent notation
/// with an explicit exponent sign (`1e+21`, `1e-7`).
///
/// # Example
///
/// ```rust
/// use stylebridge::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(2.5e-8), "2.5e-8");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else {
        n.to_string()
    }
}

fn exponent_form(n: f64) -> String {
    let text = format!("{:e}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Returns `true` for finite numbers and for strings that parse fully to a
/// finite number (surrounding whitespace allowed).
pub fn is_numeric(value: &StyleValue) -> bool {
    match value {
        StyleValue::Number(n) => n.is_finite(),
        StyleValue::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Appends `px` to numeric values; everything else passes through unchanged.
///
/// Numeric strings keep their original text, so `"8"` becomes `"8px"`.
///
/// # Example
///
/// ```rust
/// use stylebridge::{to_px, StyleValue};
///
/// assert_eq!(to_px(&StyleValue::from(12)), StyleValue::from("12px"));
/// assert_eq!(to_px(&StyleValue::from("1.5")), StyleValue::from("1.5px"));
/// assert_eq!(to_px(&StyleValue::from("auto")), StyleValue::from("auto"));
/// ```
pub fn to_px(value: &StyleValue) -> StyleValue {
    if !is_numeric(value) {
        return value.clone();
    }
    match value {
        StyleValue::Number(n) => StyleValue::String(format!("{}px", format_number(*n))),
        StyleValue::String(s) => StyleValue::String(format!("{}px", s)),
        _ => value.clone(),
    }
}
