//! The [`StyleValue`] sum type.

use std::fmt;
use std::rc::Rc;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::fragment::StyleFragment;
use crate::animation::{Animation, AnimationRef, AnimationSet, AnimationSetRef};
use crate::units::format_number;

/// A single style property value.
///
/// Literal values come straight from component style declarations. Animation
/// references are owned by the animation engine; the adapter only reads their
/// start values and registers the property they were found under.
#[derive(Clone, Default)]
pub enum StyleValue {
    /// Explicit absence (`null` in the source declarations).
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Transform lists and color arrays.
    List(Vec<StyleValue>),
    /// Nested map, used by single-function transform entries like `{ scale: 2 }`.
    Map(StyleFragment),
    Animation(AnimationRef),
    AnimationSet(AnimationSetRef),
}

impl StyleValue {
    /// Wraps a concrete animation as a style value.
    pub fn animation<A: Animation + 'static>(animation: Rc<A>) -> Self {
        StyleValue::Animation(animation)
    }

    /// Wraps a concrete animation set as a style value.
    pub fn animation_set<S: AnimationSet + 'static>(set: Rc<S>) -> Self {
        StyleValue::AnimationSet(set)
    }

    /// Returns `true` unless the value is falsy in the JavaScript sense.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are falsy. Lists, maps
    /// and animation references are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Null => false,
            StyleValue::Bool(b) => *b,
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
            StyleValue::String(s) => !s.is_empty(),
            StyleValue::List(_)
            | StyleValue::Map(_)
            | StyleValue::Animation(_)
            | StyleValue::AnimationSet(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StyleValue]> {
        match self {
            StyleValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&StyleFragment> {
        match self {
            StyleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The value an animated property renders before the animation starts.
    ///
    /// Returns `None` for literals and for animation sets without children.
    pub fn animation_start_value(&self) -> Option<StyleValue> {
        match self {
            StyleValue::Animation(animation) => Some(animation.start_value()),
            StyleValue::AnimationSet(set) => set
                .children()
                .first()
                .map(|child| child.animation.start_value()),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    /// Formats the value the way JavaScript string interpolation would.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Null => f.write_str("null"),
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::String(s) => f.write_str(s),
            StyleValue::List(items) => {
                // Array#join renders null entries as empty strings
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            StyleValue::Map(_) => f.write_str("[object Object]"),
            StyleValue::Animation(_) | StyleValue::AnimationSet(_) => {
                match self.animation_start_value() {
                    Some(start) => write!(f, "{}", start),
                    None => Ok(()),
                }
            }
        }
    }
}

impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Null => f.write_str("Null"),
            StyleValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            StyleValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            StyleValue::String(s) => f.debug_tuple("String").field(s).finish(),
            StyleValue::List(items) => f.debug_tuple("List").field(items).finish(),
            StyleValue::Map(map) => f.debug_tuple("Map").field(map).finish(),
            StyleValue::Animation(a) => f.debug_tuple("Animation").field(a).finish(),
            StyleValue::AnimationSet(s) => f.debug_tuple("AnimationSet").field(s).finish(),
        }
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleValue::Null, StyleValue::Null) => true,
            (StyleValue::Bool(a), StyleValue::Bool(b)) => a == b,
            (StyleValue::Number(a), StyleValue::Number(b)) => a == b,
            (StyleValue::String(a), StyleValue::String(b)) => a == b,
            (StyleValue::List(a), StyleValue::List(b)) => a == b,
            (StyleValue::Map(a), StyleValue::Map(b)) => a == b,
            // Animation references compare by identity
            (StyleValue::Animation(a), StyleValue::Animation(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            (StyleValue::AnimationSet(a), StyleValue::AnimationSet(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        StyleValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<StyleFragment> for StyleValue {
    fn from(map: StyleFragment) -> Self {
        StyleValue::Map(map)
    }
}

impl From<AnimationRef> for StyleValue {
    fn from(animation: AnimationRef) -> Self {
        StyleValue::Animation(animation)
    }
}

impl From<AnimationSetRef> for StyleValue {
    fn from(set: AnimationSetRef) -> Self {
        StyleValue::AnimationSet(set)
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => StyleValue::Null,
            Value::Bool(b) => StyleValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(StyleValue::Null, StyleValue::Number),
            Value::String(s) => StyleValue::String(s),
            Value::Array(items) => StyleValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => StyleValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, StyleValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Null => serializer.serialize_unit(),
            StyleValue::Bool(b) => serializer.serialize_bool(*b),
            StyleValue::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            StyleValue::Number(n) => serializer.serialize_f64(*n),
            StyleValue::String(s) => serializer.serialize_str(s),
            StyleValue::List(items) => items.serialize(serializer),
            StyleValue::Map(map) => map.serialize(serializer),
            StyleValue::Animation(_) | StyleValue::AnimationSet(_) => {
                match self.animation_start_value() {
                    Some(start) => start.serialize(serializer),
                    None => serializer.serialize_unit(),
                }
            }
        }
    }
}

fn is_safe_integer(n: f64) -> bool {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StyleValueVisitor)
    }
}

/// Builds values directly from the deserializer so object keys keep their
/// source order.
struct StyleValueVisitor;

impl<'de> Visitor<'de> for StyleValueVisitor {
    type Value = StyleValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a style value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<StyleValue, E> {
        Ok(StyleValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<StyleValue, E> {
        Ok(StyleValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<StyleValue, D::Error> {
        StyleValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<StyleValue, E> {
        Ok(StyleValue::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<StyleValue, E> {
        Ok(StyleValue::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<StyleValue, E> {
        Ok(StyleValue::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<StyleValue, E> {
        Ok(StyleValue::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StyleValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(StyleValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleValue, A::Error> {
        let mut map = StyleFragment::new();
        while let Some((key, value)) = access.next_entry::<String, StyleValue>()? {
            map.insert(&key, value);
        }
        Ok(StyleValue::Map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationSetChild, StaticAnimation, StaticAnimationSet};

    #[test]
    fn test_truthiness_matches_js() {
        assert!(!StyleValue::Null.is_truthy());
        assert!(!StyleValue::from(false).is_truthy());
        assert!(!StyleValue::from(0).is_truthy());
        assert!(!StyleValue::from(f64::NAN).is_truthy());
        assert!(!StyleValue::from("").is_truthy());

        assert!(StyleValue::from(0.5).is_truthy());
        assert!(StyleValue::from("0").is_truthy());
        assert!(StyleValue::List(vec![]).is_truthy());
        assert!(StyleValue::Map(StyleFragment::new()).is_truthy());
        assert!(StyleValue::animation(StaticAnimation::new(0)).is_truthy());
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(StyleValue::from(10).to_string(), "10");
        assert_eq!(StyleValue::from(0.5).to_string(), "0.5");
        assert_eq!(StyleValue::from(-0.0).to_string(), "0");
    }

    #[test]
    fn test_display_list_joins_with_commas() {
        let list = StyleValue::List(vec![1.into(), StyleValue::Null, "a".into()]);
        assert_eq!(list.to_string(), "1,,a");
    }

    #[test]
    fn test_display_map_and_null() {
        let map = StyleValue::Map(StyleFragment::new().with("scale", 2));
        assert_eq!(map.to_string(), "[object Object]");
        assert_eq!(StyleValue::Null.to_string(), "null");
    }

    #[test]
    fn test_display_animation_uses_start_value() {
        let value = StyleValue::animation(StaticAnimation::new(0.25));
        assert_eq!(value.to_string(), "0.25");

        let empty = StyleValue::animation_set(StaticAnimationSet::new(vec![]));
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_animation_equality_is_identity() {
        let a = StaticAnimation::new(1);
        let b = StaticAnimation::new(1);

        assert_eq!(StyleValue::animation(a.clone()), StyleValue::animation(a.clone()));
        assert_ne!(StyleValue::animation(a), StyleValue::animation(b));
    }

    #[test]
    fn test_animation_start_value_of_set() {
        let first = StaticAnimation::new("red");
        let second = StaticAnimation::new("blue");
        let set = StaticAnimationSet::new(vec![
            AnimationSetChild::new(first),
            AnimationSetChild::new(second),
        ]);

        let value = StyleValue::animation_set(set);
        assert_eq!(value.animation_start_value(), Some("red".into()));
        assert_eq!(StyleValue::from(3).animation_start_value(), None);
    }

    #[test]
    fn test_from_json_value() {
        let json = serde_json::json!({
            "width": 10,
            "colors": ["red", "blue"],
            "transform": [{ "scale": 2 }],
            "hidden": null,
        });

        let value = StyleValue::from(json);
        let map = value.as_map().unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["width", "colors", "transform", "hidden"]);
        assert_eq!(map.get("width"), Some(&StyleValue::Number(10.0)));
        assert_eq!(
            map.get("colors"),
            Some(&StyleValue::from(vec!["red", "blue"]))
        );
        assert!(map.get("hidden").unwrap().is_null());

        let transform = map.get("transform").unwrap().as_list().unwrap();
        assert_eq!(
            transform[0].as_map().unwrap().get("scale"),
            Some(&StyleValue::Number(2.0))
        );
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let value: StyleValue = serde_json::from_str(r#"{"zIndex": 1, "alpha": 2}"#).unwrap();
        let keys: Vec<&str> = value.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["zIndex", "alpha"]);
    }

    #[test]
    fn test_serialize_animation_as_start_value() {
        let value = StyleValue::List(vec![
            StyleValue::animation(StaticAnimation::new(0.5)),
            StyleValue::animation_set(StaticAnimationSet::new(vec![])),
        ]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!([0.5, null]));
    }

    #[test]
    fn test_serialize_integral_numbers_without_fraction() {
        let json = serde_json::to_string(&StyleValue::List(vec![1.into(), 1.5.into()])).unwrap();
        assert_eq!(json, "[1,1.5]");
    }
}
