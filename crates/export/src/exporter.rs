//! Exporter boundary and the manifest-writing implementation.

use std::path::PathBuf;

use ss_filters::FilterRegistry;
use ss_session::SessionState;
use tracing::{error, info};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::manifest::FlattenManifest;

/// Result of a finished export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    /// File that was written.
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: u64,
}

/// Turns a session state into a persisted artifact.
///
/// Implementations receive a snapshot of the current state and must not
/// assume anything about the history it came from.
pub trait Exporter: Send + Sync {
    fn export(
        &self,
        state: &SessionState,
        config: &ExportConfig,
    ) -> Result<ExportReceipt, ExportError>;
}

/// Writes a [`FlattenManifest`] next to the configured output path.
pub struct ManifestExporter {
    filters: FilterRegistry,
}

impl ManifestExporter {
    pub fn new(filters: FilterRegistry) -> Self {
        Self { filters }
    }
}

impl Default for ManifestExporter {
    fn default() -> Self {
        Self::new(FilterRegistry::with_builtins())
    }
}

impl Exporter for ManifestExporter {
    /// The manifest is written atomically: a temporary file in the same
    /// directory is renamed over the target.
    fn export(
        &self,
        state: &SessionState,
        config: &ExportConfig,
    ) -> Result<ExportReceipt, ExportError> {
        config.validate()?;
        let manifest = FlattenManifest::build(state, config, &self.filters)?;
        let json = manifest.to_json_string()?;

        let path = config.manifest_path();
        let temp_path = path.with_extension("json.tmp");

        std::fs::write(&temp_path, json.as_bytes()).map_err(|e| {
            error!(path = %temp_path.display(), error = %e, "Failed to write temp file");
            ExportError::Io(e)
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            error!(
                from = %temp_path.display(),
                to = %path.display(),
                error = %e,
                "Failed to rename temp file to target"
            );
            ExportError::Io(e)
        })?;

        let bytes = json.len() as u64;
        info!(path = %path.display(), bytes, "Export manifest written");
        Ok(ExportReceipt { path, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_common::{FilterKind, ImageRef};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::create_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_manifest_file() {
        let dir = temp_dir("ss_export_manifest_test");
        let config = ExportConfig::default().with_output_path(dir.join("shot.jpeg"));
        let state = SessionState::empty()
            .with_image(ImageRef::from("file:///a.jpg"))
            .with_filter(FilterKind::Invert);

        let receipt = ManifestExporter::default()
            .export(&state, &config)
            .expect("export");

        assert_eq!(receipt.path, dir.join("shot.jpeg.json"));
        let contents = std::fs::read_to_string(&receipt.path).expect("read");
        assert_eq!(contents.len() as u64, receipt.bytes);
        let manifest = FlattenManifest::from_json_str(&contents).unwrap();
        assert_eq!(manifest.filter, FilterKind::Invert);
        assert!(!receipt.path.with_extension("json.tmp").exists());

        let _ = std::fs::remove_file(&receipt.path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn empty_state_is_not_exported() {
        let dir = temp_dir("ss_export_empty_test");
        let config = ExportConfig::default().with_output_path(dir.join("empty.jpeg"));
        let err = ManifestExporter::default()
            .export(&SessionState::empty(), &config)
            .unwrap_err();
        assert!(matches!(err, ExportError::NoImage));
        assert!(!config.manifest_path().exists());
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let config = ExportConfig::default()
            .with_output_path("/nonexistent/ss_export/dir/out.jpeg");
        let state = SessionState::empty().with_image(ImageRef::from("file:///a.jpg"));
        let err = ManifestExporter::default()
            .export(&state, &config)
            .unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
