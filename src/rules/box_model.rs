//! Border and spacing shorthands.

use crate::units::to_px;
use crate::value::{StyleFragment, StyleValue};

/// Axis shorthands and the two directional keys each one expands to.
pub const AXIS_SHORTHANDS: &[(&str, [&str; 2])] = &[
    ("marginHorizontal", ["marginLeft", "marginRight"]),
    ("marginVertical", ["marginTop", "marginBottom"]),
    ("paddingHorizontal", ["paddingLeft", "paddingRight"]),
    ("paddingVertical", ["paddingTop", "paddingBottom"]),
];

/// Edge-specific border width keys and the style key each one enables.
pub const EDGE_BORDERS: &[(&str, &str)] = &[
    ("borderTopWidth", "borderTopStyle"),
    ("borderBottomWidth", "borderBottomStyle"),
    ("borderLeftWidth", "borderLeftStyle"),
    ("borderRightWidth", "borderRightStyle"),
];

const BORDER_WIDTH: &str = "borderWidth";
const BORDER_STYLE: &str = "borderStyle";
const SOLID: &str = "solid";

/// Turns on solid per-edge border styles for every edge width present.
///
/// The generic `borderStyle` is cleared to `null` so it does not override
/// the per-edge styles on the web side.
pub fn apply_edge_borders(mut style: StyleFragment) -> StyleFragment {
    for (width, edge_style) in EDGE_BORDERS {
        if style.contains_key(width) {
            style.insert(BORDER_STYLE, StyleValue::Null);
            style.insert(edge_style, SOLID);
        }
    }
    style
}

/// Applies the generic border style and expands axis shorthands.
///
/// - `borderWidth` present: `borderStyle` becomes `"solid"`
/// - `marginHorizontal` etc. present: both directional keys get the
///   pixel-formatted shorthand value
///
/// Presence is checked by key, so a shorthand of `0` still expands.
pub fn apply_box_shorthands(mut style: StyleFragment) -> StyleFragment {
    if style.contains_key(BORDER_WIDTH) {
        style.insert(BORDER_STYLE, SOLID);
    }

    for (shorthand, [first, second]) in AXIS_SHORTHANDS {
        let Some(value) = style.get(shorthand).map(to_px) else {
            continue;
        };
        style.insert(first, value.clone());
        style.insert(second, value);
    }
    style
}
