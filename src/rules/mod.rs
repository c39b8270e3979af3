//! Per-fragment normalization rules.
//!
//! Each rule is a pure function that takes the working style by value and
//! returns the rewritten style. The adapter threads the style through them
//! in a fixed order, since later rules read fields earlier rules wrote:
//!
//! 1. [`apply_layout_defaults`]: `display`, `flexDirection`
//! 2. [`format_line_height`]
//! 3. [`apply_position_defaults`]: `position`, `boxSizing`
//! 4. [`apply_edge_borders`]
//! 5. [`apply_box_shorthands`]: generic border style and axis shorthands
//! 6. [`fix_hairline`]
//! 7. color-array fallback and hex expansion (see [`crate::color`])
//! 8. [`bind_animations`]
//! 9. transform resolution (see [`crate::transform`])
//!
//! Every rule is idempotent on the map, so running the sequence twice over
//! the same fragment yields the same result.

mod animated;
mod box_model;
mod layout;

pub use animated::bind_animations;
pub use box_model::{apply_box_shorthands, apply_edge_borders, AXIS_SHORTHANDS, EDGE_BORDERS};
pub use layout::{
    apply_layout_defaults, apply_position_defaults, fix_hairline, format_line_height,
};
