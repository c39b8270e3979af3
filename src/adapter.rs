//! The style adapter.

use tracing::trace;

use crate::color::{apply_color_arrays, expand_hex_colors};
use crate::normalize::{IdentityNormalizer, ValueNormalizer};
use crate::options::AdapterOptions;
use crate::rules::{
    apply_box_shorthands, apply_edge_borders, apply_layout_defaults, apply_position_defaults,
    bind_animations, fix_hairline, format_line_height,
};
use crate::transform::apply_transform;
use crate::value::{ResolvedStyle, StyleFragment, StyleInput};

/// Converts native-style declarations into web-ready style maps.
///
/// The adapter never mutates its input. Each call to [`StyleAdapter::resolve`]
/// starts from an empty working map, merges every fragment in order and
/// runs the full normalization pass after each merge, so later fragments can
/// re-trigger defaults earlier ones already filled in.
///
/// # Example
///
/// ```rust
/// use stylebridge::{StyleAdapter, StyleFragment, StyleInput, StyleValue};
///
/// let adapter = StyleAdapter::new();
/// let input = StyleInput::List(vec![
///     StyleFragment::new().with("marginHorizontal", 12).with("height", 0.5),
///     StyleFragment::new().with("display", "none"),
/// ]);
///
/// let style = adapter.resolve(&input);
/// assert_eq!(style.get("marginLeft"), Some(&"12px".into()));
/// assert_eq!(style.get("height"), Some(&"1px".into()));
/// assert_eq!(style.get("display"), Some(&"none".into()));
/// assert_eq!(style.get("boxSizing"), Some(&"border-box".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleAdapter<N = IdentityNormalizer> {
    options: AdapterOptions,
    normalizer: N,
}

impl StyleAdapter {
    /// Creates an adapter with default options and an identity normalizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: ValueNormalizer> StyleAdapter<N> {
    /// Creates an adapter that normalizes transform values with `normalizer`.
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            options: AdapterOptions::default(),
            normalizer,
        }
    }

    /// Replaces the adapter options, returning the updated adapter for chaining.
    pub fn options(mut self, options: AdapterOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options this adapter resolves with.
    pub fn current_options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Merges the input fragments and produces the web-ready style.
    pub fn resolve(&self, input: &StyleInput) -> ResolvedStyle {
        let fragments = input.fragments();
        trace!(fragments = fragments.len(), "resolving style");

        let style = fragments
            .iter()
            .fold(StyleFragment::new(), |mut style, fragment| {
                style.merge(fragment);
                self.normalize(style)
            });
        ResolvedStyle::new(style)
    }

    /// Runs one full normalization pass over a merged style.
    pub fn normalize(&self, style: StyleFragment) -> StyleFragment {
        trace!(properties = style.len(), "normalizing style");

        let style = apply_layout_defaults(style, self.options.display_value());
        let style = format_line_height(style);
        let style = apply_position_defaults(style);
        let style = apply_edge_borders(style);
        let style = apply_box_shorthands(style);
        let style = fix_hairline(style);
        let style = apply_color_arrays(style);
        let style = expand_hex_colors(style, self.options.rgba_notation);
        let style = bind_animations(style);
        apply_transform(style, &self.normalizer)
    }
}

/// Resolves a style with a default [`StyleAdapter`].
///
/// # Example
///
/// ```rust
/// use stylebridge::{resolve_style, StyleFragment};
///
/// let style = resolve_style(&StyleFragment::new().with("lineHeight", 18).into());
/// assert_eq!(style.get("lineHeight"), Some(&"18px".into()));
/// assert_eq!(style.get("position"), Some(&"relative".into()));
/// ```
pub fn resolve_style(input: &StyleInput) -> ResolvedStyle {
    StyleAdapter::new().resolve(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Binding, StaticAnimation};
    use crate::color::RgbaNotation;
    use crate::env::FlexSupport;
    use crate::value::StyleValue;

    fn native() -> AdapterOptions {
        AdapterOptions::new().flex_support(FlexSupport::Native)
    }

    #[test]
    fn test_empty_input_gets_defaults() {
        let adapter = StyleAdapter::new().options(native());
        let style = adapter.resolve(&StyleFragment::new().into());

        let keys: Vec<&str> = style.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["display", "flexDirection", "position", "boxSizing"]
        );
        assert_eq!(style.get("display"), Some(&"flex".into()));
    }

    #[test]
    fn test_options_are_reported() {
        let options = native().rgba_notation(RgbaNotation::Legacy);
        let adapter = StyleAdapter::new().options(options);
        assert_eq!(adapter.current_options(), &options);
        assert_eq!(StyleAdapter::new().current_options(), &AdapterOptions::default());
    }

    #[test]
    fn test_empty_list_resolves_to_empty_style() {
        let style = StyleAdapter::new().resolve(&StyleInput::List(vec![]));
        assert!(style.is_empty());
    }

    #[test]
    fn test_prefixed_flex_option() {
        let adapter =
            StyleAdapter::new().options(AdapterOptions::new().flex_support(FlexSupport::Prefixed));
        let style = adapter.resolve(&StyleFragment::new().into());
        assert_eq!(style.get("display"), Some(&"-webkit-flex".into()));
    }

    #[test]
    fn test_later_fragment_overrides_display() {
        let adapter = StyleAdapter::new().options(native());
        let input = StyleInput::List(vec![
            StyleFragment::new().with("width", 10),
            StyleFragment::new().with("display", "none"),
        ]);

        let style = adapter.resolve(&input);
        assert_eq!(style.get("display"), Some(&"none".into()));
        // flexDirection was defaulted by the first pass and survives
        assert_eq!(style.get("flexDirection"), Some(&"column".into()));
    }

    #[test]
    fn test_later_fragment_retriggers_shorthand() {
        let adapter = StyleAdapter::new().options(native());
        let input = StyleInput::List(vec![
            StyleFragment::new().with("marginHorizontal", 4),
            StyleFragment::new().with("marginLeft", 1),
        ]);

        // The shorthand is still present after the second merge and wins again
        let style = adapter.resolve(&input);
        assert_eq!(style.get("marginLeft"), Some(&"4px".into()));
    }

    #[test]
    fn test_color_array_then_hex_expansion() {
        let adapter = StyleAdapter::new().options(native());
        let style = adapter.resolve(
            &StyleFragment::new()
                .with("backgroundColors", vec!["#11223344", "#ffffffff"])
                .into(),
        );
        assert_eq!(
            style.get("backgroundColor"),
            Some(&"rgba(17,34,51,68)".into())
        );
    }

    #[test]
    fn test_legacy_rgba_notation() {
        let adapter =
            StyleAdapter::new().options(native().rgba_notation(RgbaNotation::Legacy));
        let style =
            adapter.resolve(&StyleFragment::new().with("backgroundColor", "#11223344").into());
        assert_eq!(
            style.get("backgroundColor"),
            Some(&"rbga(17,34,51,68)".into())
        );
    }

    #[test]
    fn test_normalizer_applies_to_transforms_only() {
        let px = |_: &str, value: &StyleValue| crate::units::to_px(value);
        let adapter = StyleAdapter::with_normalizer(px).options(native());
        let style = adapter.resolve(
            &StyleFragment::new()
                .with("width", 10)
                .with(
                    "transform",
                    vec![StyleFragment::new().with("translateX", 10)],
                )
                .into(),
        );

        assert_eq!(style.get("width"), Some(&10.into()));
        assert_eq!(style.get("transform"), Some(&"translateX(10px)".into()));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let animation = StaticAnimation::new(0);
        let fragment = StyleFragment::new()
            .with("opacity", StyleValue::animation(animation.clone()))
            .with("height", 0.5);
        let input = StyleInput::from(fragment.clone());

        let _ = StyleAdapter::new().resolve(&input);
        assert_eq!(input, StyleInput::Single(fragment));
        assert_eq!(animation.bindings(), vec![Binding::Style("opacity".into())]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let adapter = StyleAdapter::new().options(native());
        let style = StyleFragment::new()
            .with("borderWidth", 1)
            .with("borderTopWidth", 2)
            .with("paddingVertical", "3")
            .with("colors", vec!["#000000ff"])
            .with("transform", vec![StyleFragment::new().with("rotate", "9deg")]);

        let once = adapter.normalize(style);
        let twice = adapter.normalize(once.clone());
        assert_eq!(once, twice);
    }
}
