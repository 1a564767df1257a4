//! Presentation settings: date/price rendering and detail loading

use serde::Deserialize;

use crate::trips::{DisplayOptions, StalePolicy};

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub date_format: Option<String>,
    pub currency: Option<String>,
}

/// The `[display]` section resolves straight into the options the
/// formatters take
impl DisplayOptions {
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            date_format: file.date_format.unwrap_or(defaults.date_format),
            currency: file.currency.unwrap_or(defaults.currency),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail loading
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailConfig {
    /// Whether a response for an older click may replace a newer one
    pub stale_responses: StalePolicy,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDetail {
    pub stale_responses: Option<String>,
}

impl DetailConfig {
    pub fn from_file(file: Option<FileDetail>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            stale_responses: file
                .stale_responses
                .map(|s| StalePolicy::from_str(&s))
                .unwrap_or_default(),
        }
    }
}
