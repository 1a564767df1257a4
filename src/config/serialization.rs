//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# tripdeck configuration

# Base endpoint of the trip API (TRIPDECK_API_URL overrides)
api_url = "{api_url}"

# Theme: Dark, Light, Monokai, Dracula, Nord, Solarized (TRIPDECK_THEME overrides)
theme = "{theme}"

# Date and price rendering
[display]
date_format = "{date_format}"  # strftime pattern, local time
currency = "{currency}"

# Detail pane
[detail]
# What to do when an older request finishes after a newer one:
# "discard" shows only the latest click, "accept" shows whatever arrives last
stale_responses = "{stale}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = escape(&self.api_url),
            theme = escape(&self.theme),
            date_format = escape(&self.display.date_format),
            currency = escape(&self.display.currency),
            stale = self.detail.stale_responses.as_str(),
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
