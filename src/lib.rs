//! # Stylebridge - Native Style Declarations for the Web
//!
//! `stylebridge` converts component styles written against a mobile UI
//! framework's style properties into plain CSS-in-JS maps that a web
//! renderer can apply directly to an element's inline style, so the same
//! declarations render consistently on both sides.
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebridge::{resolve_style, StyleFragment, StyleInput};
//!
//! let card = StyleFragment::new()
//!     .with("paddingHorizontal", 16)
//!     .with("borderWidth", 1)
//!     .with("backgroundColor", "#ff000080");
//! let highlighted = StyleFragment::new().with("flexDirection", "row");
//!
//! let style = resolve_style(&StyleInput::List(vec![card, highlighted]));
//!
//! assert_eq!(style.get("paddingLeft"), Some(&"16px".into()));
//! assert_eq!(style.get("borderStyle"), Some(&"solid".into()));
//! assert_eq!(style.get("backgroundColor"), Some(&"rgba(255,0,0,128)".into()));
//! assert_eq!(style.get("flexDirection"), Some(&"row".into()));
//! ```
//!
//! ## What Gets Translated
//!
//! | Native declaration | Web result |
//! |--------------------|------------|
//! | `marginHorizontal` / `marginVertical` | `marginLeft`+`marginRight` / `marginTop`+`marginBottom` in `px` |
//! | `paddingHorizontal` / `paddingVertical` | the padding equivalents |
//! | no `display` | `display: flex` (or `-webkit-flex`), `flexDirection: column` |
//! | no `position` | `position: relative` |
//! | anything | `boxSizing: border-box` |
//! | `borderWidth` | `borderStyle: solid` |
//! | `borderTopWidth` etc. | `borderTopStyle: solid` etc. |
//! | `lineHeight: 20` | `lineHeight: "20px"` |
//! | `height: 0.5` | `height: "1px"` |
//! | `colors: [..]` without `color` | `color` = first entry (also for border/background colors) |
//! | `#RRGGBBAA` colors | `rgba(r,g,b,a)` |
//! | `transform: [{..}, ..]` | CSS transform string |
//! | animation references | start value, with the property bound on the animation |
//!
//! ## Animations
//!
//! Style values may hold references to externally owned [`Animation`]s or
//! [`AnimationSet`]s. The adapter renders their start value and calls the
//! registration method with the property (or transform function) name, so
//! the animation engine knows what to drive.
//!
//! ## Configuration
//!
//! [`AdapterOptions`] pins the flexbox keyword and the rgba notation. Without
//! a pinned keyword the process-wide detector set with [`set_flex_detector`]
//! decides. Options and style input can be loaded from JSON or YAML.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` per pass, `debug` for rewrites,
//! `warn` for malformed transforms). Install a subscriber to see them.

pub mod animation;
pub mod color;
pub mod env;
pub mod rules;
pub mod transform;

mod adapter;
mod error;
mod normalize;
mod options;
mod units;
mod value;

pub use adapter::{resolve_style, StyleAdapter};
pub use animation::{
    Animation, AnimationRef, AnimationSet, AnimationSetChild, AnimationSetRef, Binding,
    StaticAnimation, StaticAnimationSet,
};
pub use color::{hex_to_rgba, RgbaNotation};
pub use env::{detect_flex_support, set_flex_detector, FlexSupport};
pub use error::StyleError;
pub use normalize::{IdentityNormalizer, ValueNormalizer};
pub use options::AdapterOptions;
pub use transform::{resolve_transform, ResolvedTransform};
pub use units::{format_number, is_numeric, to_px};
pub use value::{ResolvedStyle, StyleFragment, StyleInput, StyleValue};
