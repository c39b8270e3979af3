//! Rendering environment detection.
//!
//! Older web engines only understand the vendor-prefixed `-webkit-flex`
//! display keyword. The adapter asks a process-wide detector which keyword
//! to emit when it fills in a default `display`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Which flexbox display keyword the rendering environment supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexSupport {
    /// Unprefixed `flex` is supported.
    #[default]
    Native,
    /// Only the `-webkit-flex` keyword is supported.
    Prefixed,
}

impl FlexSupport {
    /// The `display` value to use for this environment.
    pub fn display_value(self) -> &'static str {
        match self {
            FlexSupport::Native => "flex",
            FlexSupport::Prefixed => "-webkit-flex",
        }
    }
}

type FlexDetector = fn() -> FlexSupport;

static FLEX_DETECTOR: Lazy<Mutex<FlexDetector>> = Lazy::new(|| Mutex::new(native_flex_detector));

/// Overrides the detector used to determine flexbox support.
///
/// Host renderers call this once at startup with a probe of their engine.
/// It is also useful for testing the prefixed code path.
pub fn set_flex_detector(detector: FlexDetector) {
    let mut guard = FLEX_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_flex_support() -> FlexSupport {
    let detector = FLEX_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn native_flex_detector() -> FlexSupport {
    FlexSupport::Native
}
