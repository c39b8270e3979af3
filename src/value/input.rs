//! Adapter input and output shapes.

use serde::{Serialize, Serializer};

use super::fragment::StyleFragment;
use super::style_value::StyleValue;
use crate::error::StyleError;

/// The style a component hands to the adapter.
///
/// Either a single fragment or an ordered list of fragments. In a list,
/// later fragments override earlier ones key by key.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    Single(StyleFragment),
    List(Vec<StyleFragment>),
}

impl StyleInput {
    /// Parses a style input from JSON text.
    ///
    /// The top level must be an object or an array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Json`] on malformed JSON and
    /// [`StyleError::NotAFragment`] / [`StyleError::InvalidFragment`] when the
    /// shape is not a style object or a list of them.
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        let value: StyleValue = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Parses a style input from YAML text. Same shape rules as [`StyleInput::from_json`].
    pub fn from_yaml(text: &str) -> Result<Self, StyleError> {
        let value: StyleValue = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Converts a loaded value into an input, checking its shape.
    pub fn from_value(value: StyleValue) -> Result<Self, StyleError> {
        match value {
            StyleValue::Map(fragment) => Ok(StyleInput::Single(fragment)),
            StyleValue::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    StyleValue::Map(fragment) => Ok(fragment),
                    other => Err(StyleError::InvalidFragment {
                        index,
                        found: kind_name(&other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(StyleInput::List),
            other => Err(StyleError::NotAFragment {
                found: kind_name(&other),
            }),
        }
    }

    /// The fragments in application order.
    pub fn fragments(&self) -> &[StyleFragment] {
        match self {
            StyleInput::Single(fragment) => std::slice::from_ref(fragment),
            StyleInput::List(fragments) => fragments,
        }
    }
}

impl From<StyleFragment> for StyleInput {
    fn from(fragment: StyleFragment) -> Self {
        StyleInput::Single(fragment)
    }
}

impl From<Vec<StyleFragment>> for StyleInput {
    fn from(fragments: Vec<StyleFragment>) -> Self {
        StyleInput::List(fragments)
    }
}

fn kind_name(value: &StyleValue) -> &'static str {
    match value {
        StyleValue::Null => "null",
        StyleValue::Bool(_) => "boolean",
        StyleValue::Number(_) => "number",
        StyleValue::String(_) => "string",
        StyleValue::List(_) => "list",
        StyleValue::Map(_) => "object",
        StyleValue::Animation(_) => "animation",
        StyleValue::AnimationSet(_) => "animation set",
    }
}

/// The flattened, web-ready style produced by the adapter.
///
/// Keys are web style property names and values are ready to be applied to
/// a DOM element's inline style. Serializes as a JSON object in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    style: StyleFragment,
}

impl ResolvedStyle {
    pub(crate) fn new(style: StyleFragment) -> Self {
        Self { style }
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.style.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.style.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.style.iter()
    }

    pub fn len(&self) -> usize {
        self.style.len()
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_empty()
    }

    pub fn as_fragment(&self) -> &StyleFragment {
        &self.style
    }

    pub fn into_fragment(self) -> StyleFragment {
        self.style
    }
}

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.style.serialize(serializer)
    }
}
