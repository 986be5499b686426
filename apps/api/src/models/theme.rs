//! Color theme supplied with a render request.
//!
//! A theme is a partial mapping of color roles to `#rrggbb` values. Resolution
//! to concrete colors is per key: an absent or unparsable role falls back to
//! that role's default without touching the others, whether the client sent no
//! theme, an empty object, or a partial one.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY: &str = "#1e40af";
pub const DEFAULT_SECONDARY: &str = "#3b82f6";
pub const DEFAULT_ACCENT: &str = "#93c5fd";
pub const DEFAULT_TEXT: &str = "#1f2937";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
}

impl Theme {
    /// The fully-populated default theme, injected into `AppState` at startup
    /// and used when a request carries no theme at all.
    pub fn fallback() -> Self {
        Theme {
            primary: Some(DEFAULT_PRIMARY.to_string()),
            secondary: Some(DEFAULT_SECONDARY.to_string()),
            accent: Some(DEFAULT_ACCENT.to_string()),
            text: Some(DEFAULT_TEXT.to_string()),
        }
    }
}
