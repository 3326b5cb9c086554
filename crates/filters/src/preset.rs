//! Filter presets: how each `FilterKind` is presented and tinted.
//!
//! The editor core only tracks which filter is active. A preset carries what
//! the picker and the export collaborator need to show it: label, icon, and
//! the translucent overlay color laid over the image.

use serde::{Deserialize, Serialize};
use ss_common::FilterKind;

/// Translucent overlay color (sRGB bytes + alpha in 0.0..=1.0).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayTint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl OverlayTint {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// CSS `rgba()` notation.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }

    /// Normalized `[r, g, b, a]` for compositors.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.alpha,
        ]
    }
}

/// Presentation of one filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub kind: FilterKind,
    /// Label in the filter picker.
    pub display_name: String,
    /// Material icon name for the picker button.
    pub icon: String,
    /// Overlay color; None leaves the image untouched.
    pub tint: Option<OverlayTint>,
}

impl FilterPreset {
    pub fn new(kind: FilterKind, icon: &str, tint: Option<OverlayTint>) -> Self {
        Self {
            kind,
            display_name: kind.display_name().to_string(),
            icon: icon.to_string(),
            tint,
        }
    }

    /// The built-in preset for `kind`.
    pub fn builtin(kind: FilterKind) -> Self {
        match kind {
            FilterKind::None => Self::new(kind, "clear", None),
            FilterKind::Sepia => {
                Self::new(kind, "photo-filter", Some(OverlayTint::new(139, 69, 19, 0.6)))
            }
            FilterKind::Blur => {
                Self::new(kind, "blur-on", Some(OverlayTint::new(255, 255, 255, 0.4)))
            }
            FilterKind::Invert => {
                Self::new(kind, "invert-colors", Some(OverlayTint::new(100, 150, 255, 0.5)))
            }
            FilterKind::Grayscale => {
                Self::new(kind, "gradient", Some(OverlayTint::new(0, 0, 0, 0.4)))
            }
        }
    }
}
