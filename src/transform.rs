//! Transform list resolution.
//!
//! Native transforms are lists of single-function maps:
//!
//! ```text
//! [{ translateX: 10 }, { rotate: "45deg" }]  =>  "translateX(10) rotate(45deg)"
//! ```
//!
//! A transform with exactly one function may be animated. In that case the
//! element renders the animation's start value and the animation is bound to
//! the function name so the engine can drive it.

use std::ptr;
use std::rc::Rc;

use tracing::warn;

use crate::animation::{AnimationRef, AnimationSetRef};
use crate::normalize::ValueNormalizer;
use crate::value::{StyleFragment, StyleValue};

/// The outcome of resolving a `transform` value.
#[derive(Debug, Clone)]
pub enum ResolvedTransform {
    /// A value ready to use as-is, normally a CSS transform string.
    Static(StyleValue),
    /// A single animated transform function.
    Animated {
        /// Transform function name, e.g. `"scale"`.
        kind: String,
        /// The animation providing the start value.
        animation: AnimationRef,
        /// The set the animation belongs to, when the value was a set.
        animation_set: Option<AnimationSetRef>,
    },
}

impl PartialEq for ResolvedTransform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ResolvedTransform::Static(a), ResolvedTransform::Static(b)) => a == b,
            (
                ResolvedTransform::Animated {
                    kind: kind_a,
                    animation: animation_a,
                    animation_set: set_a,
                },
                ResolvedTransform::Animated {
                    kind: kind_b,
                    animation: animation_b,
                    animation_set: set_b,
                },
            ) => {
                // Animation references compare by identity
                let same_set = match (set_a, set_b) {
                    (Some(a), Some(b)) => ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
                    (None, None) => true,
                    _ => false,
                };
                kind_a == kind_b
                    && ptr::addr_eq(Rc::as_ptr(animation_a), Rc::as_ptr(animation_b))
                    && same_set
            }
            _ => false,
        }
    }
}

/// Resolves a `transform` value.
///
/// - Non-list values are returned verbatim.
/// - A list with one entry may yield [`ResolvedTransform::Animated`].
/// - Longer lists render every entry as `name(value)` joined by spaces;
///   animation values are not bound in that case.
pub fn resolve_transform<N: ValueNormalizer + ?Sized>(
    transform: &StyleValue,
    normalizer: &N,
) -> ResolvedTransform {
    let entries = match transform {
        StyleValue::List(entries) => entries,
        other => return ResolvedTransform::Static(other.clone()),
    };

    match entries.as_slice() {
        [] => {
            warn!("empty transform list");
            ResolvedTransform::Static(StyleValue::from(""))
        }
        [single] => resolve_single(single, normalizer),
        _ => {
            let functions: Vec<String> = entries
                .iter()
                .filter_map(|entry| render_function(entry, normalizer))
                .collect();
            ResolvedTransform::Static(StyleValue::String(functions.join(" ")))
        }
    }
}

fn resolve_single<N: ValueNormalizer + ?Sized>(
    entry: &StyleValue,
    normalizer: &N,
) -> ResolvedTransform {
    let Some((kind, raw)) = transform_function(entry) else {
        return ResolvedTransform::Static(StyleValue::from(""));
    };
    let value = normalizer.normalize(kind, raw);
    if !value.is_truthy() {
        return ResolvedTransform::Static(StyleValue::from(""));
    }

    match value {
        StyleValue::Animation(animation) => ResolvedTransform::Animated {
            kind: kind.to_string(),
            animation,
            animation_set: None,
        },
        StyleValue::AnimationSet(set) => match set.children().first() {
            Some(first) => ResolvedTransform::Animated {
                kind: kind.to_string(),
                animation: first.animation.clone(),
                animation_set: Some(set.clone()),
            },
            None => {
                warn!(kind, "animation set without children in transform");
                ResolvedTransform::Static(StyleValue::from(""))
            }
        },
        other => ResolvedTransform::Static(StyleValue::String(format!("{}({})", kind, other))),
    }
}

/// Renders one entry as `name(value)`.
fn render_function<N: ValueNormalizer + ?Sized>(
    entry: &StyleValue,
    normalizer: &N,
) -> Option<String> {
    let (kind, raw) = transform_function(entry)?;
    let value = normalizer.normalize(kind, raw);
    if matches!(value, StyleValue::Animation(_) | StyleValue::AnimationSet(_)) {
        warn!(
            kind,
            "animated value in a multi-function transform renders its start value only"
        );
    }
    Some(format!("{}({})", kind, value))
}

/// The function name and raw argument of a single transform entry.
fn transform_function(entry: &StyleValue) -> Option<(&str, &StyleValue)> {
    let function = match entry {
        StyleValue::Map(map) => map.iter().next(),
        _ => None,
    };
    if function.is_none() {
        warn!(entry = ?entry, "skipping transform entry that is not a single-function map");
    }
    function
}

/// Resolves the `transform` property of a style, writing back a CSS string.
///
/// An animated transform renders the normalized start value of its
/// animation, and the owning set (or the animation itself) is bound to the
/// transform function name.
pub fn apply_transform<N: ValueNormalizer + ?Sized>(
    mut style: StyleFragment,
    normalizer: &N,
) -> StyleFragment {
    let resolved = style
        .get("transform")
        .filter(|transform| transform.is_truthy())
        .map(|transform| resolve_transform(transform, normalizer));
    let Some(resolved) = resolved else {
        return style;
    };

    let value = match resolved {
        ResolvedTransform::Static(value) => value,
        ResolvedTransform::Animated {
            kind,
            animation,
            animation_set,
        } => {
            let start = normalizer.normalize(&kind, &animation.start_value());
            match animation_set {
                Some(set) => set.set_transform_style_attribute(&kind),
                None => animation.set_transform_style_attribute(&kind),
            }
            StyleValue::String(format!("{}({})", kind, start))
        }
    };
    style.insert("transform", value);
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationSetChild, Binding, StaticAnimation, StaticAnimationSet};
    use crate::normalize::IdentityNormalizer;

    fn function(name: &str, value: impl Into<StyleValue>) -> StyleValue {
        StyleValue::Map(StyleFragment::new().with(name, value))
    }

    #[test]
    fn test_non_list_is_verbatim() {
        let transform = StyleValue::from("scale(2)");
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("scale(2)".into())
        );
    }

    #[test]
    fn test_single_function() {
        let transform = StyleValue::List(vec![function("scale", 2)]);
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("scale(2)".into())
        );
    }

    #[test]
    fn test_single_function_falsy_value() {
        let transform = StyleValue::List(vec![function("rotate", 0)]);
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("".into())
        );
    }

    #[test]
    fn test_multiple_functions_joined() {
        let transform = StyleValue::List(vec![
            function("translateX", 10),
            function("rotate", "45deg"),
        ]);
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("translateX(10) rotate(45deg)".into())
        );
    }

    #[test]
    fn test_multiple_functions_use_normalizer() {
        let px = |name: &str, value: &StyleValue| match name {
            "translateX" | "translateY" => crate::units::to_px(value),
            _ => value.clone(),
        };
        let transform = StyleValue::List(vec![function("translateY", 5), function("scale", 0)]);
        assert_eq!(
            resolve_transform(&transform, &px),
            ResolvedTransform::Static("translateY(5px) scale(0)".into())
        );
    }

    #[test]
    fn test_multiple_functions_skip_non_maps() {
        let transform = StyleValue::List(vec![
            function("scale", 2),
            "bogus".into(),
            function("rotate", "1deg"),
        ]);
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("scale(2) rotate(1deg)".into())
        );
    }

    #[test]
    fn test_empty_list() {
        let transform = StyleValue::List(vec![]);
        assert_eq!(
            resolve_transform(&transform, &IdentityNormalizer),
            ResolvedTransform::Static("".into())
        );
    }

    #[test]
    fn test_single_animation_is_tagged() {
        let animation = StaticAnimation::new(1);
        let transform = StyleValue::List(vec![function(
            "scale",
            StyleValue::animation(animation.clone()),
        )]);

        match resolve_transform(&transform, &IdentityNormalizer) {
            ResolvedTransform::Animated {
                kind,
                animation: found,
                animation_set,
            } => {
                assert_eq!(kind, "scale");
                assert_eq!(
                    StyleValue::Animation(found),
                    StyleValue::animation(animation.clone())
                );
                assert!(animation_set.is_none());
            }
            other => panic!("expected animated transform, got {:?}", other),
        }
        assert!(animation.bindings().is_empty());
    }

    #[test]
    fn test_single_animation_set_is_tagged_with_first_child() {
        let first = StaticAnimation::new("0deg");
        let set = StaticAnimationSet::new(vec![
            AnimationSetChild::new(first.clone()),
            AnimationSetChild::following(StaticAnimation::new("90deg")),
        ]);
        let transform = StyleValue::List(vec![function(
            "rotate",
            StyleValue::animation_set(set.clone()),
        )]);

        match resolve_transform(&transform, &IdentityNormalizer) {
            ResolvedTransform::Animated {
                animation,
                animation_set,
                ..
            } => {
                assert_eq!(
                    StyleValue::Animation(animation),
                    StyleValue::animation(first)
                );
                assert_eq!(
                    animation_set.map(StyleValue::AnimationSet),
                    Some(StyleValue::animation_set(set))
                );
            }
            other => panic!("expected animated transform, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_transform_binds_animation_once() {
        let animation = StaticAnimation::new(0.5);
        let style = StyleFragment::new().with(
            "transform",
            vec![function("scale", StyleValue::animation(animation.clone()))],
        );

        let style = apply_transform(style, &IdentityNormalizer);
        assert_eq!(style.get("transform"), Some(&"scale(0.5)".into()));
        assert_eq!(animation.bindings(), vec![Binding::Transform("scale".into())]);
    }

    #[test]
    fn test_apply_transform_binds_set_not_child() {
        let child = StaticAnimation::new(10);
        let set = StaticAnimationSet::new(vec![AnimationSetChild::new(child.clone())]);
        let style = StyleFragment::new().with(
            "transform",
            vec![function("translateX", StyleValue::animation_set(set.clone()))],
        );

        let px = |_: &str, value: &StyleValue| crate::units::to_px(value);
        let style = apply_transform(style, &px);
        assert_eq!(style.get("transform"), Some(&"translateX(10px)".into()));
        assert_eq!(set.bindings(), vec![Binding::Transform("translateX".into())]);
        assert!(child.bindings().is_empty());
    }

    #[test]
    fn test_apply_transform_without_transform() {
        let style = apply_transform(StyleFragment::new().with("width", 1), &IdentityNormalizer);
        assert!(!style.contains_key("transform"));
    }
}
