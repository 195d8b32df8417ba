//! Editor configuration for WoodCraft
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in a platform-specific directory.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (size, snap toggle)
//! - Display preferences (dimension labels, unit)
//! - Project defaults (placeholder name)
//! - Snap tuning (candidate distance, rotation and scale steps)
//! - Editing behavior (duplicate offset)

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
pub use woodcraft_core::DisplayUnit;

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid cell size in inches
    pub size: f64,
    /// Whether transforms snap to the grid for new projects
    pub snap_enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 1.0,
            snap_enabled: true,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show dimension labels on pieces
    pub show_dimensions: bool,
    /// Unit used for presenting lengths
    pub unit: DisplayUnit,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_dimensions: true,
            unit: DisplayUnit::Inches,
        }
    }
}

/// Project defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Name given to new and cleared projects
    pub default_name: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            default_name: "Untitled Project".to_string(),
        }
    }
}

/// Snap tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettingsConfig {
    /// Extra reach (inches) added to the longer piece when gathering alignment candidates
    pub candidate_distance: f64,
    /// Rotation snap increment in degrees
    pub rotation_step_degrees: f64,
    /// Scale snap increment
    pub scale_step: f64,
}

impl Default for SnapSettingsConfig {
    fn default() -> Self {
        Self {
            candidate_distance: 5.0,
            rotation_step_degrees: 15.0,
            scale_step: 0.1,
        }
    }
}

/// Editing behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    /// Offset applied to a duplicated piece, in inches
    pub duplicate_offset: [f64; 3],
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            duplicate_offset: [5.0, 0.0, 5.0],
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid settings
    pub grid: GridSettings,
    /// Display preferences
    pub display: DisplaySettings,
    /// Project defaults
    pub project: ProjectSettings,
    /// Snap tuning
    pub snap: SnapSettingsConfig,
    /// Editing behavior
    pub editing: EditingSettings,
}

/// Alias used by callers that talk about "the editor config".
pub type EditorConfig = Config;

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/woodcraft/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))?;
        Ok(dir.join("woodcraft").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("grid.size", self.grid.size)?;
        positive("snap.candidate_distance", self.snap.candidate_distance)?;
        positive("snap.rotation_step_degrees", self.snap.rotation_step_degrees)?;
        positive("snap.scale_step", self.snap.scale_step)?;

        if self.project.default_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "project.default_name".to_string(),
                value: format!("{:?}", self.project.default_name),
            });
        }

        if let Some(v) = self.editing.duplicate_offset.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange {
                key: "editing.duplicate_offset".to_string(),
                value: v.to_string(),
            });
        }

        Ok(())
    }

    /// Rotation snap increment in radians
    pub fn rotation_step_radians(&self) -> f64 {
        self.snap.rotation_step_degrees.to_radians()
    }
}
