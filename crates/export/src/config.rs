//! Export configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ss_common::ExportSettings;

use crate::error::ExportError;

/// Image container of the flattened artifact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Jpeg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Configuration for one export.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Path of the flattened image.
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Encoder quality in (0.0, 1.0].
    pub quality: f32,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::from_settings(&ExportSettings::default(), Path::new("."))
    }
}

impl ExportConfig {
    /// Build a config writing `settings.file_name` inside `output_dir`.
    pub fn from_settings(settings: &ExportSettings, output_dir: &Path) -> Self {
        let output_path = output_dir.join(&settings.file_name);
        Self {
            format: ExportFormat::from_path(&output_path).unwrap_or_default(),
            output_path,
            width: settings.width,
            height: settings.height,
            quality: settings.quality,
        }
    }

    /// Point the export at `path`, taking the format from its extension when known.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        if let Some(format) = ExportFormat::from_path(&self.output_path) {
            self.format = format;
        }
        self
    }

    /// Where the flatten manifest for this export is written.
    pub fn manifest_path(&self) -> PathBuf {
        let mut name = OsString::from(self.output_path.as_os_str());
        name.push(".json");
        PathBuf::from(name)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if self.width == 0 || self.height == 0 {
            return Err(ExportError::InvalidConfig(
                "Output size must be > 0".to_string(),
            ));
        }
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(ExportError::InvalidConfig(format!(
                "Quality {} outside (0, 1]",
                self.quality
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ExportError::InvalidConfig(
                "Output path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
