//! Shared error types (thiserror-based).

use std::fmt;

use thiserror::Error;

/// Where an image is being acquired from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaptureSource {
    /// The photo library / gallery picker.
    Library,
    /// The device camera.
    Camera,
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => f.write_str("photo library"),
            Self::Camera => f.write_str("camera"),
        }
    }
}

/// Failures reported by the image-capture collaborator.
///
/// None of these ever reach the history; the caller surfaces them as a
/// notification and simply does not commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("You did not select any image")]
    Cancelled,

    #[error("Permission to use the {origin} was denied")]
    PermissionDenied { origin: CaptureSource },

    #[error("Image source unavailable: {0}")]
    Unavailable(String),
}

/// A filter name outside the closed filter set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter: {name}")]
pub struct ParseFilterError {
    pub name: String,
}

/// Errors loading or validating a `StudioConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}
