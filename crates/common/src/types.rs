//! Opaque reference types with the newtype pattern for type safety.
//!
//! The editor never looks inside these references. An `ImageRef` is whatever
//! the capture collaborator handed back (a file URI, an asset id), and a
//! `StickerRef` names a decorative overlay asset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to the working image.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Reference to a sticker asset placed over the image.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerRef(pub String);

impl StickerRef {
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StickerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StickerRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StickerRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}
