//! Animation start values for regular (non-transform) properties.

use tracing::debug;

use crate::value::{StyleFragment, StyleValue};

/// Replaces animation references with their start values and binds each
/// animation to the property it was found under.
///
/// Animation sets without children are left untouched. The `transform` key
/// is handled here too when it holds an animation directly rather than a
/// transform list.
pub fn bind_animations(mut style: StyleFragment) -> StyleFragment {
    for (property, value) in style.values_mut() {
        if !value.is_truthy() {
            continue;
        }
        let start = match value {
            StyleValue::Animation(animation) => {
                let start = animation.start_value();
                animation.set_style_attribute(property);
                start
            }
            StyleValue::AnimationSet(set) => {
                let Some(first) = set.children().first() else {
                    continue;
                };
                let start = first.start_value();
                set.set_style_attribute(property);
                start
            }
            _ => continue,
        };
        debug!(property, start = %start, "bound animation to style property");
        *value = start;
    }
    style
}
