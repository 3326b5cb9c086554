//! Session state: one immutable snapshot of the editable document.
//!
//! A `SessionState` is a plain value. Transitions build a new value from the
//! current one; nothing here mutates in place.

use serde::{Deserialize, Serialize};
use ss_common::{FilterKind, ImageRef, StickerRef};
use std::fmt;

/// Image, sticker, and active filter at one point in the editing session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionState {
    /// Working image (None until one is chosen).
    pub image: Option<ImageRef>,
    /// Sticker placed over the image.
    pub sticker: Option<StickerRef>,
    /// Active filter.
    #[serde(default)]
    pub filter: FilterKind,
}

impl SessionState {
    /// The pre-image state: no image, no sticker, no filter.
    pub const EMPTY: Self = Self {
        image: None,
        sticker: None,
        filter: FilterKind::None,
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub fn with_image(&self, image: ImageRef) -> Self {
        Self {
            image: Some(image),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sticker(&self, sticker: StickerRef) -> Self {
        Self {
            sticker: Some(sticker),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_sticker(&self) -> Self {
        Self {
            sticker: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_filter(&self, filter: FilterKind) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.sticker.is_none() && self.filter.is_none()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Whether nothing is decorated before an image exists.
    ///
    /// Informational only: the history stores inconsistent states verbatim.
    pub fn is_consistent(&self) -> bool {
        self.image.is_some() || (self.sticker.is_none() && self.filter.is_none())
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let image = self.image.as_ref().map_or("-", ImageRef::as_str);
        let sticker = self.sticker.as_ref().map_or("-", StickerRef::as_str);
        write!(f, "image={image} sticker={sticker} filter={}", self.filter)
    }
}

/// Which part of the document a transition touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    ImageChosen,
    ImageCleared,
    StickerPlaced,
    StickerRemoved,
    FilterChanged,
    /// More than one field differs.
    Compound,
    Unchanged,
}

impl EditKind {
    /// Classify the transition from `prev` to `next`.
    pub fn between(prev: &SessionState, next: &SessionState) -> Self {
        let image_changed = prev.image != next.image;
        let sticker_changed = prev.sticker != next.sticker;
        let filter_changed = prev.filter != next.filter;

        match (image_changed, sticker_changed, filter_changed) {
            (false, false, false) => Self::Unchanged,
            (true, false, false) if next.image.is_some() => Self::ImageChosen,
            (true, false, false) => Self::ImageCleared,
            (false, true, false) if next.sticker.is_some() => Self::StickerPlaced,
            (false, true, false) => Self::StickerRemoved,
            (false, false, true) => Self::FilterChanged,
            _ => Self::Compound,
        }
    }

    /// Human-readable label for undo/redo affordances.
    pub fn label(self) -> &'static str {
        match self {
            Self::ImageChosen => "Choose image",
            Self::ImageCleared => "Clear image",
            Self::StickerPlaced => "Place sticker",
            Self::StickerRemoved => "Remove sticker",
            Self::FilterChanged => "Change filter",
            Self::Compound => "Edit",
            Self::Unchanged => "No change",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_image(tag: &str) -> SessionState {
        SessionState::empty().with_image(ImageRef::from(tag))
    }

    #[test]
    fn empty_matches_default() {
        assert_eq!(SessionState::empty(), SessionState::default());
        assert!(SessionState::empty().is_empty());
        assert!(!SessionState::empty().has_image());
        assert!(SessionState::empty().is_consistent());
    }

    #[test]
    fn transitions_leave_source_untouched() {
        let base = with_image("a");
        let filtered = base.with_filter(FilterKind::Sepia);
        let stickered = filtered.with_sticker(StickerRef::from("e1"));

        assert_eq!(base.filter, FilterKind::None);
        assert!(filtered.sticker.is_none());
        assert_eq!(stickered.filter, FilterKind::Sepia);
        assert_eq!(stickered.image, Some(ImageRef::from("a")));
        assert_eq!(stickered.without_sticker(), filtered);
    }

    #[test]
    fn new_image_keeps_decorations() {
        let decorated = with_image("a")
            .with_sticker(StickerRef::from("e2"))
            .with_filter(FilterKind::Blur);
        let swapped = decorated.with_image(ImageRef::from("b"));
        assert_eq!(swapped.sticker, Some(StickerRef::from("e2")));
        assert_eq!(swapped.filter, FilterKind::Blur);
    }

    #[test]
    fn decoration_without_image_is_inconsistent() {
        let stray = SessionState::empty().with_filter(FilterKind::Invert);
        assert!(!stray.is_consistent());
        assert!(!stray.is_empty());
    }

    #[test]
    fn edit_kind_classification() {
        let empty = SessionState::empty();
        let a = with_image("a");
        let sepia = a.with_filter(FilterKind::Sepia);
        let sticker = sepia.with_sticker(StickerRef::from("e1"));

        assert_eq!(EditKind::between(&empty, &a), EditKind::ImageChosen);
        assert_eq!(EditKind::between(&a, &empty), EditKind::ImageCleared);
        assert_eq!(EditKind::between(&a, &sepia), EditKind::FilterChanged);
        assert_eq!(EditKind::between(&sepia, &sticker), EditKind::StickerPlaced);
        assert_eq!(EditKind::between(&sticker, &sepia), EditKind::StickerRemoved);
        assert_eq!(EditKind::between(&empty, &sticker), EditKind::Compound);
        assert_eq!(EditKind::between(&a, &a.clone()), EditKind::Unchanged);
    }

    #[test]
    fn display_shows_all_fields() {
        let state = with_image("file:///a.png").with_filter(FilterKind::Grayscale);
        assert_eq!(
            state.to_string(),
            "image=file:///a.png sticker=- filter=grayscale"
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let state = with_image("a")
            .with_sticker(StickerRef::from("e4"))
            .with_filter(FilterKind::Invert);
        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
