//! Export error types.
//!
//! Export failures are terminal notifications for the user. They never
//! reach the editing history.

use thiserror::Error;

/// Errors that can occur while exporting the current session state.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: no image chosen")]
    NoImage,

    #[error("Invalid export config: {0}")]
    InvalidConfig(String),

    #[error("Export cancelled by user")]
    Cancelled,

    #[error("Export worker failed to start: {0}")]
    SpawnFailed(String),

    #[error("Export failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
