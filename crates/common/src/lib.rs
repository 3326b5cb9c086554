//! `ss-common`: Shared types, errors, and configuration for the StickerSmash editor.
//!
//! This crate is the foundation that all other editor crates depend on.
//! It defines:
//!
//! - **Types**: `ImageRef`, `StickerRef` (opaque reference newtypes)
//! - **Filters**: `FilterKind`, the closed set of selectable filters
//! - **Errors**: `CaptureError`, `ParseFilterError`, `ConfigError` (thiserror-based)
//! - **Config**: `StudioConfig`, `HistoryConfig`, `ExportSettings`

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ExportSettings, HistoryConfig, StudioConfig};
pub use error::{CaptureError, CaptureSource, ConfigError, ParseFilterError};
pub use filter::FilterKind;
pub use types::{ImageRef, StickerRef};
