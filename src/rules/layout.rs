//! Layout defaults that mirror native rendering on the web.

use crate::units::to_px;
use crate::value::{StyleFragment, StyleValue};

/// Native views are flex containers laid out in a column by default.
///
/// When no truthy `display` is set, `display` becomes `display_value` and
/// `flexDirection` defaults to `"column"`.
pub fn apply_layout_defaults(mut style: StyleFragment, display_value: &str) -> StyleFragment {
    if !style.is_set("display") {
        style.insert("display", display_value);
        if !style.is_set("flexDirection") {
            style.insert("flexDirection", "column");
        }
    }
    style
}

/// Pixel-formats a present `lineHeight`.
pub fn format_line_height(mut style: StyleFragment) -> StyleFragment {
    if let Some(value) = style.get("lineHeight").map(to_px) {
        style.insert("lineHeight", value);
    }
    style
}

/// Defaults `position` to `relative` and always uses border-box sizing.
pub fn apply_position_defaults(mut style: StyleFragment) -> StyleFragment {
    if !style.is_set("position") {
        style.insert("position", "relative");
    }
    style.insert("boxSizing", "border-box");
    style
}

/// A `0.5` height is a hairline; render it as a single device pixel.
pub fn fix_hairline(mut style: StyleFragment) -> StyleFragment {
    if style.get("height") == Some(&StyleValue::Number(0.5)) {
        style.insert("height", "1px");
    }
    style
}
