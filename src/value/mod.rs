//! Style values, fragments and the adapter's input/output shapes.
//!
//! This module provides the data model the adapter works on:
//!
//! - [`StyleValue`]: A single property value (literal, list, map or animation reference)
//! - [`StyleFragment`]: An insertion-ordered property map
//! - [`StyleInput`]: One fragment or an ordered list of fragments
//! - [`ResolvedStyle`]: The flattened, web-ready output map
//!
//! Values follow JavaScript truthiness and stringification rules so that
//! style declarations written for the native side behave the same once they
//! are translated.

mod fragment;
mod input;
mod style_value;

pub use fragment::StyleFragment;
pub use input::{ResolvedStyle, StyleInput};
pub use style_value::StyleValue;
