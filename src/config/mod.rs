//! Configuration for tripdeck
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tripdeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod presentation;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use presentation::{DetailConfig, FileDetail, FileDisplay};

use crate::api::DEFAULT_API_URL;
use crate::trips::DisplayOptions;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_API_URL: &str = "TRIPDECK_API_URL";
pub const ENV_THEME: &str = "TRIPDECK_THEME";

const DEFAULT_THEME: &str = "Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint of the trip API
    pub api_url: String,

    /// Theme name: "Dark", "Light", "Monokai", "Dracula", "Nord", "Solarized"
    pub theme: String,

    /// Date and price rendering
    pub display: DisplayOptions,

    /// Detail loading behavior
    pub detail: DetailConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            display: DisplayOptions::default(),
            detail: DetailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,

    /// Optional [display] section
    pub display: Option<FileDisplay>,

    /// Optional [detail] section
    pub detail: Option<FileDetail>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Values taken from the environment
#[derive(Debug, Default)]
pub(crate) struct EnvOverrides {
    pub api_url: Option<String>,
    pub theme: Option<String>,
}

impl EnvOverrides {
    fn capture() -> Self {
        Self {
            api_url: non_empty_var(ENV_API_URL),
            theme: non_empty_var(ENV_THEME),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/tripdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tripdeck").join("config.toml"))
    }

    /// Write the default config file, refusing to overwrite unless forced
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Config::default().to_toml() is the single source of truth
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed terminates the
    /// process with an actionable message.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match FileConfig::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `tripdeck config --init --force`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), EnvOverrides::capture())
    }

    /// Merge the layers
    pub(crate) fn resolve(file: FileConfig, env: EnvOverrides) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env
            .api_url
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Theme: env > file > default
        let theme = env.theme.or(file.theme).unwrap_or(defaults.theme);

        Self {
            api_url,
            theme,
            display: DisplayOptions::from_file(file.display),
            detail: DetailConfig::from_file(file.detail),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
