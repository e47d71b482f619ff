//! Page configuration.
//!
//! Hosts can override the defaults by embedding JSON in the page:
//!
//! ```html
//! <script type="application/json" id="marketly-config">
//!   { "copyright_year": 2026, "self_test": false }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::content::BRAND;

/// Id of the `<script>` element carrying a JSON [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "marketly-config";

/// Year printed in the footer when nothing better is known.
pub const DEFAULT_COPYRIGHT_YEAR: i32 = 2025;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Text of the header brand marker
    pub brand: String,
    /// Footer copyright year
    pub copyright_year: i32,
    /// Run the self-test harness after mount
    pub self_test: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BRAND.to_string(),
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
            self_test: true,
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a JSON override, logging and falling back to defaults on error.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "invalid site config, using defaults");
                Self::default()
            }
        }
    }
}
