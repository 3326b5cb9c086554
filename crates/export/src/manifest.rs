//! Flatten manifest: the serializable recipe for the exported image.
//!
//! A manifest names the base image, the sticker, and the overlay tint to lay
//! over it, together with the output size and encoding.

use serde::{Deserialize, Serialize};
use ss_common::{FilterKind, ImageRef, StickerRef};
use ss_filters::{FilterRegistry, OverlayTint};
use ss_session::SessionState;
use tracing::debug;

use crate::config::{ExportConfig, ExportFormat};
use crate::error::ExportError;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenManifest {
    pub version: u32,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<StickerRef>,
    pub filter: FilterKind,
    /// Badge label drawn in the corner while a filter is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<OverlayTint>,
    pub width: u32,
    pub height: u32,
    pub quality: f32,
    pub format: ExportFormat,
}

impl FlattenManifest {
    /// Describe how to flatten `state` under `config`.
    pub fn build(
        state: &SessionState,
        config: &ExportConfig,
        filters: &FilterRegistry,
    ) -> Result<Self, ExportError> {
        let image = state.image.clone().ok_or(ExportError::NoImage)?;
        let tint = filters.get(state.filter).and_then(|p| p.tint);
        let badge = filters.badge_text(state.filter).map(str::to_string);

        debug!(
            image = %image,
            filter = %state.filter,
            sticker = state.sticker.is_some(),
            "Built flatten manifest"
        );

        Ok(Self {
            version: MANIFEST_VERSION,
            image,
            sticker: state.sticker.clone(),
            filter: state.filter,
            badge,
            tint,
            width: config.width,
            height: config.height,
            quality: config.quality,
            format: config.format,
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decorated() -> SessionState {
        SessionState::empty()
            .with_image(ImageRef::from("file:///a.jpg"))
            .with_sticker(StickerRef::from("emoji5"))
            .with_filter(FilterKind::Sepia)
    }

    #[test]
    fn build_carries_state_and_tint() {
        let manifest = FlattenManifest::build(
            &decorated(),
            &ExportConfig::default(),
            &FilterRegistry::with_builtins(),
        )
        .expect("build");

        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.image, ImageRef::from("file:///a.jpg"));
        assert_eq!(manifest.sticker, Some(StickerRef::from("emoji5")));
        assert_eq!(manifest.filter, FilterKind::Sepia);
        assert_eq!(manifest.badge.as_deref(), Some("Sepia"));
        assert_eq!(manifest.tint, Some(OverlayTint::new(139, 69, 19, 0.6)));
        assert_eq!((manifest.width, manifest.height), (320, 440));
    }

    #[test]
    fn unfiltered_state_has_no_tint_or_badge() {
        let state = SessionState::empty().with_image(ImageRef::from("file:///b.jpg"));
        let manifest = FlattenManifest::build(
            &state,
            &ExportConfig::default(),
            &FilterRegistry::with_builtins(),
        )
        .unwrap();
        assert!(manifest.tint.is_none());
        assert!(manifest.badge.is_none());

        let json = manifest.to_json_string().unwrap();
        assert!(!json.contains("tint"));
        assert!(!json.contains("sticker"));
    }

    #[test]
    fn no_image_is_rejected() {
        let err = FlattenManifest::build(
            &SessionState::empty(),
            &ExportConfig::default(),
            &FilterRegistry::with_builtins(),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::NoImage));
    }

    #[test]
    fn json_roundtrip() {
        let manifest = FlattenManifest::build(
            &decorated(),
            &ExportConfig::default(),
            &FilterRegistry::with_builtins(),
        )
        .unwrap();
        let json = manifest.to_json_string().unwrap();
        assert!(json.contains("\"filter\": \"sepia\""));
        assert_eq!(FlattenManifest::from_json_str(&json).unwrap(), manifest);
    }
}
