//! Errors from loading styles and adapter options.
//!
//! Resolving a style never fails; malformed fields simply do not trigger the
//! rules that would read them. Only the text loading surfaces return errors.

use thiserror::Error;

/// Error returned when style input or adapter options cannot be loaded.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The text was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The text was not valid YAML
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The top level was neither a style object nor a list of style objects
    #[error("expected a style object or a list of style objects, found {found}")]
    NotAFragment { found: &'static str },
    /// An element of a style list was not a style object
    #[error("style list entry {index} is a {found}, expected a style object")]
    InvalidFragment { index: usize, found: &'static str },
}
