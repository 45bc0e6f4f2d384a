//! Configuration management for maxsetup
//!
//! Loaded from `<config_dir>/maxsetup/config.toml`, or from the path in
//! `MAXSETUP_CONFIG`. Missing files and missing fields fall back to defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::escape::EscapeOptions;
use crate::gradient::{validate_stop_count, Justify, RemainderPolicy, DEFAULT_STOPS};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "MAXSETUP_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gradient: GradientConfig,
    pub panel: PanelConfig,
    pub logging: LoggingConfig,
    pub escape: EscapeOptions,
}

/// Defaults for `gradient`, `rainbow` and `panel` commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Stop count used when `--stops` is not given.
    pub default_stops: usize,
    /// Whether leftover characters are folded into the last segment.
    pub remainder: RemainderPolicy,
    pub justify: Justify,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            default_stops: DEFAULT_STOPS,
            remainder: RemainderPolicy::Distribute,
            justify: Justify::Left,
        }
    }
}

/// Panel appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Fixed panel width. Unset means the terminal width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Border color as `#rrggbb`.
    pub border: String,
    /// Stop count for panel titles.
    pub title_stops: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: None,
            border: "#808080".to_string(),
            title_stops: DEFAULT_STOPS,
        }
    }
}

impl PanelConfig {
    pub fn border_rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.border).context("Invalid panel.border in config")
    }
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logs directory, relative to the project base.
    pub directory: PathBuf,
    /// Level filter for `log.log`.
    pub file_level: String,
    /// Level filter for `verbose.log`.
    pub verbose_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_level: "info".to_string(),
            verbose_level: "trace".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("maxsetup").join("config.toml"))
    }

    /// Reject values that would only fail later, at render time.
    pub fn validate(&self) -> Result<()> {
        validate_stop_count(self.gradient.default_stops)
            .context("Invalid gradient.default_stops in config")?;
        validate_stop_count(self.panel.title_stops)
            .context("Invalid panel.title_stops in config")?;
        self.panel.border_rgb()?;
        if self.logging.directory.is_absolute() {
            bail!(
                "logging.directory must be relative to the project base, got {}",
                self.logging.directory.display()
            );
        }
        Ok(())
    }
}
