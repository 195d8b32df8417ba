//! WoodCraft Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    Config, DisplaySettings, EditingSettings, EditorConfig, GridSettings, ProjectSettings,
    SnapSettingsConfig, CONFIG_FILE_NAME,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
