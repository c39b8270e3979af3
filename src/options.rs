//! Adapter configuration.

use serde::{Deserialize, Serialize};

use crate::color::RgbaNotation;
use crate::env::{detect_flex_support, FlexSupport};
use crate::error::StyleError;

/// Options controlling how the adapter renders environment-dependent values.
///
/// Every field has a default, so option files only need to name what they
/// change.
///
/// # Example
///
/// ```rust
/// use stylebridge::{AdapterOptions, FlexSupport, RgbaNotation};
///
/// let options = AdapterOptions::from_yaml("flex_support: prefixed\n").unwrap();
/// assert_eq!(options.flex_support, Some(FlexSupport::Prefixed));
/// assert_eq!(options.rgba_notation, RgbaNotation::Standard);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterOptions {
    /// Pins the flexbox keyword. When `None`, the process-wide detector decides.
    pub flex_support: Option<FlexSupport>,
    /// Function name used when expanding 8-digit hex colors.
    pub rgba_notation: RgbaNotation,
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the flexbox keyword instead of asking the detector.
    pub fn flex_support(mut self, support: FlexSupport) -> Self {
        self.flex_support = Some(support);
        self
    }

    pub fn rgba_notation(mut self, notation: RgbaNotation) -> Self {
        self.rgba_notation = notation;
        self
    }

    /// Loads options from JSON text.
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads options from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// The `display` keyword to use as the layout default.
    pub(crate) fn display_value(&self) -> &'static str {
        self.flex_support
            .unwrap_or_else(detect_flex_support)
            .display_value()
    }
}
