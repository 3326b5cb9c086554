//! Configuration structs for the editor: history depth, placeholder image, export settings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// History settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of retained entries (None = unbounded).
    pub max_entries: Option<usize>,
}

/// Settings for the flattened export artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoder quality in (0.0, 1.0].
    pub quality: f32,
    /// File name used when no explicit output path is given.
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 440,
            quality: 0.95,
            file_name: "sticker-smash.jpeg".to_string(),
        }
    }
}

/// Top-level editor configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub history: HistoryConfig,
    /// Image reference committed by "use this photo".
    pub placeholder_image: String,
    pub export: ExportSettings,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            placeholder_image: "asset://images/background-image.png".to_string(),
            export: ExportSettings::default(),
        }
    }
}

impl StudioConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded studio config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_entries == Some(0) {
            return Err(ConfigError::Invalid {
                reason: "history.max_entries must be > 0".to_string(),
            });
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "placeholder_image must not be empty".to_string(),
            });
        }
        if self.export.width == 0 || self.export.height == 0 {
            return Err(ConfigError::Invalid {
                reason: "export width and height must be > 0".to_string(),
            });
        }
        if !(self.export.quality > 0.0 && self.export.quality <= 1.0) {
            return Err(ConfigError::Invalid {
                reason: format!("export quality {} outside (0, 1]", self.export.quality),
            });
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "export file_name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
