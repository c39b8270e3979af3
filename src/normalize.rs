//! Per-property value normalization.
//!
//! Unit and format rules for individual CSS properties live outside the
//! adapter. The adapter calls a [`ValueNormalizer`] for transform function
//! arguments and for animation start values used in transforms.

use crate::value::StyleValue;

/// Normalizes a raw value for a property or transform function name.
///
/// Implementations must pass animation references through unchanged so the
/// adapter can detect and bind them.
///
/// Any `Fn(&str, &StyleValue) -> StyleValue` closure is a normalizer:
///
/// ```rust
/// use stylebridge::{StyleValue, ValueNormalizer};
///
/// let degrees = |property: &str, value: &StyleValue| match (property, value) {
///     ("rotate", StyleValue::Number(n)) => StyleValue::String(format!("{}deg", n)),
///     _ => value.clone(),
/// };
///
/// assert_eq!(degrees.normalize("rotate", &45.into()), "45deg".into());
/// ```
pub trait ValueNormalizer {
    fn normalize(&self, property: &str, value: &StyleValue) -> StyleValue;
}

impl<F> ValueNormalizer for F
where
    F: Fn(&str, &StyleValue) -> StyleValue,
{
    fn normalize(&self, property: &str, value: &StyleValue) -> StyleValue {
        self(property, value)
    }
}

/// Returns every value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityNormalizer;

impl ValueNormalizer for IdentityNormalizer {
    fn normalize(&self, _property: &str, value: &StyleValue) -> StyleValue {
        value.clone()
    }
}
