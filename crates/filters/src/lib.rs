//! `ss-filters`: Filter catalog for the StickerSmash editor.
//!
//! This crate provides:
//! - [`FilterPreset`]: display name, picker icon, and overlay tint per filter
//! - [`FilterRegistry`]: lookup by kind or name, picker ordering, badge text
//!
//! ## Built-in filters
//! - None (no overlay)
//! - Sepia
//! - Blur
//! - Invert
//! - Grayscale
//!
//! Rendering the overlay is left to the export collaborator; this crate only
//! describes it.

pub mod error;
pub mod preset;
pub mod registry;

// Re-export primary types at crate root.
pub use error::FilterError;
pub use preset::{FilterPreset, OverlayTint};
pub use registry::FilterRegistry;
