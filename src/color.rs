//! Color rules: color-array fallback and 8-digit hex expansion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::value::{StyleFragment, StyleValue};

/// Singular color keys paired with their color-array counterparts.
pub const COLOR_ARRAY_PAIRS: &[(&str, &str)] = &[
    ("color", "colors"),
    ("borderColor", "borderColors"),
    ("borderTopColor", "borderTopColors"),
    ("borderBottomColor", "borderBottomColors"),
    ("borderLeftColor", "borderLeftColors"),
    ("borderRightColor", "borderRightColors"),
    ("backgroundColor", "backgroundColors"),
];

/// Keys whose `#RRGGBBAA` values are expanded to an rgba function.
pub const HEX_COLOR_KEYS: &[&str] = &[
    "backgroundColor",
    "color",
    "borderColor",
    "borderTopColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderRightColor",
];

/// Function name emitted for expanded 8-digit hex colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RgbaNotation {
    /// `rgba(r,g,b,a)`
    #[default]
    Standard,
    /// `rbga(r,g,b,a)`, byte-compatible with older renderers that emitted it.
    Legacy,
}

impl RgbaNotation {
    fn function_name(self) -> &'static str {
        match self {
            RgbaNotation::Standard => "rgba",
            RgbaNotation::Legacy => "rbga",
        }
    }
}

/// Fills an absent or falsy color from the first entry of its color array.
///
/// Only non-empty lists are considered; any other shape of the plural key is
/// ignored.
pub fn apply_color_arrays(mut style: StyleFragment) -> StyleFragment {
    for (color, colors) in COLOR_ARRAY_PAIRS {
        if style.is_set(color) {
            continue;
        }
        let first = style
            .get(colors)
            .and_then(StyleValue::as_list)
            .and_then(<[StyleValue]>::first)
            .cloned();
        if let Some(first) = first {
            style.insert(color, first);
        }
    }
    style
}

/// Returns `true` for `#` followed by eight more characters.
pub fn is_8_digit_hex_color(value: &str) -> bool {
    value.len() == 9 && value.starts_with('#')
}

/// Splits a packed `0xRRGGBBAA` value into its channels.
pub fn unpack_rgba(color: u32) -> (u8, u8, u8, u8) {
    let red = ((color & 0xff00_0000) >> 24) as u8;
    let green = ((color & 0x00ff_0000) >> 16) as u8;
    let blue = ((color & 0x0000_ff00) >> 8) as u8;
    let alpha = (color & 0x0000_00ff) as u8;
    (red, green, blue, alpha)
}

/// Converts `#RRGGBBAA` to an rgba function string.
///
/// Returns `None` if the text is not 8-digit hex. The alpha channel is
/// emitted as its raw byte value.
///
/// # Example
///
/// ```rust
/// use stylebridge::{hex_to_rgba, RgbaNotation};
///
/// assert_eq!(
///     hex_to_rgba("#11223344", RgbaNotation::Standard).as_deref(),
///     Some("rgba(17,34,51,68)")
/// );
/// assert_eq!(hex_to_rgba("#123", RgbaNotation::Standard), None);
/// ```
pub fn hex_to_rgba(value: &str, notation: RgbaNotation) -> Option<String> {
    if !is_8_digit_hex_color(value) {
        return None;
    }
    let digits = &value[1..];
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let packed = u32::from_str_radix(digits, 16).ok()?;
    let (red, green, blue, alpha) = unpack_rgba(packed);
    Some(format!(
        "{}({},{},{},{})",
        notation.function_name(),
        red,
        green,
        blue,
        alpha
    ))
}

/// Rewrites every 8-digit hex color under [`HEX_COLOR_KEYS`].
pub fn expand_hex_colors(mut style: StyleFragment, notation: RgbaNotation) -> StyleFragment {
    for key in HEX_COLOR_KEYS {
        let expanded = match style.get(key).and_then(StyleValue::as_str) {
            Some(hex) => hex_to_rgba(hex, notation),
            None => None,
        };
        if let Some(rgba) = expanded {
            debug!(property = *key, value = %rgba, "expanded 8-digit hex color");
            style.insert(key, rgba);
        }
    }
    style
}
