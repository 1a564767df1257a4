//! Clipboard access for the `y` keybind
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per copy so nothing is held between keypresses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux) or on permission errors.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Toast text for a copy attempt of `what`
pub fn copy_outcome_message(what: &str, result: &Result<()>) -> String {
    match result {
        Ok(()) => format!("✓ Copied {} to clipboard", what),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            "✗ Failed to copy".to_string()
        }
    }
}
