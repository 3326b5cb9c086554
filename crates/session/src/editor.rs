//! Editing-screen controller.
//!
//! `EditorSession` is the explicitly owned replacement for ambient UI state.
//! It turns user intent into the next `SessionState` and commits it to its
//! `HistoryManager`; undo/redo go straight to the manager.
//!
//! Every discrete action (image chosen, sticker placed, filter changed) is one
//! commit. Decorations require an image, so the "no decoration before an
//! image exists" rule holds by construction here rather than in the history.

use ss_common::{CaptureError, CaptureSource, FilterKind, ImageRef, StickerRef, StudioConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::capture::ImageSource;
use crate::history::HistoryManager;
use crate::state::SessionState;

/// Which footer the editing screen shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Choose a photo, take one, or use the placeholder.
    #[default]
    Choosing,
    /// Filters, stickers, reset, and export are available.
    Editing,
}

/// Edits the editor refuses to commit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("No image chosen yet: pick or take a photo first")]
    NoImage,
}

/// One editing session: mode, placeholder, and the owned history.
#[derive(Debug)]
pub struct EditorSession {
    history: HistoryManager,
    mode: EditorMode,
    placeholder: ImageRef,
}

impl EditorSession {
    /// Create a session from the studio configuration.
    pub fn new(config: &StudioConfig) -> Self {
        let history = match config.history.max_entries {
            Some(max) => HistoryManager::with_limit(max),
            None => HistoryManager::new(),
        };
        Self::with_history(history, ImageRef::new(config.placeholder_image.clone()))
    }

    /// Create a session around an existing (usually empty) history.
    pub fn with_history(history: HistoryManager, placeholder: ImageRef) -> Self {
        Self {
            history,
            mode: EditorMode::Choosing,
            placeholder,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn current(&self) -> &SessionState {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Acquire an image and make it the working image.
    ///
    /// Sticker and filter carry over. On failure the history is untouched and
    /// the error is handed back for the caller to show as a notification.
    pub fn import_image(
        &mut self,
        source: &mut dyn ImageSource,
        origin: CaptureSource,
    ) -> Result<&SessionState, CaptureError> {
        match source.acquire(origin) {
            Ok(image) => {
                info!(%origin, image = %image, "Image acquired");
                let next = self.current().with_image(image);
                self.mode = EditorMode::Editing;
                Ok(self.commit(next))
            }
            Err(err) => {
                warn!(%origin, error = %err, "Image capture failed");
                Err(err)
            }
        }
    }

    /// "Use this photo": work on the placeholder image.
    pub fn use_placeholder(&mut self) -> &SessionState {
        let next = self.current().with_image(self.placeholder.clone());
        self.mode = EditorMode::Editing;
        self.commit(next)
    }

    pub fn place_sticker(&mut self, sticker: StickerRef) -> Result<&SessionState, EditError> {
        let next = self.require_image()?.with_sticker(sticker);
        Ok(self.commit(next))
    }

    pub fn apply_filter(&mut self, filter: FilterKind) -> Result<&SessionState, EditError> {
        let next = self.require_image()?.with_filter(filter);
        Ok(self.commit(next))
    }

    pub fn undo(&mut self) -> &SessionState {
        self.history.undo()
    }

    pub fn redo(&mut self) -> &SessionState {
        self.history.redo()
    }

    /// Start over: empty history, back to choosing a photo.
    pub fn reset(&mut self) {
        self.history.reset();
        self.mode = EditorMode::Choosing;
        info!("Editor session reset");
    }

    fn require_image(&self) -> Result<&SessionState, EditError> {
        let current = self.current();
        if current.has_image() {
            Ok(current)
        } else {
            debug!("Edit rejected: no image");
            Err(EditError::NoImage)
        }
    }

    /// Commit `next`, seeding an empty history with the blank state first so
    /// the very first edit can be undone.
    fn commit(&mut self, next: SessionState) -> &SessionState {
        if self.history.is_empty() && !next.is_empty() {
            self.history.commit(SessionState::empty());
        }
        self.history.commit(next);
        self.history.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(&StudioConfig::default())
    }

    fn library(uri: &'static str) -> impl FnMut(CaptureSource) -> Result<ImageRef, CaptureError> {
        move |_| Ok(ImageRef::from(uri))
    }

    #[test]
    fn starts_empty_and_choosing() {
        let s = session();
        assert_eq!(s.mode(), EditorMode::Choosing);
        assert_eq!(s.current(), &SessionState::empty());
        assert!(!s.can_undo());
        assert!(!s.can_redo());
    }

    #[test]
    fn import_commits_image_and_enters_editing() {
        let mut s = session();
        let state = s
            .import_image(&mut library("file:///a.jpg"), CaptureSource::Library)
            .unwrap()
            .clone();
        assert_eq!(state.image, Some(ImageRef::from("file:///a.jpg")));
        assert_eq!(s.mode(), EditorMode::Editing);
    }

    #[test]
    fn first_edit_undoes_to_blank_canvas() {
        let mut s = session();
        s.import_image(&mut library("file:///a.jpg"), CaptureSource::Camera)
            .unwrap();
        assert!(s.can_undo());

        assert_eq!(s.undo(), &SessionState::empty());
        assert!(!s.can_undo());
        assert!(s.can_redo());

        assert_eq!(
            s.redo().image,
            Some(ImageRef::from("file:///a.jpg"))
        );
    }

    #[test]
    fn cancelled_capture_leaves_history_untouched() {
        let mut s = session();
        let mut cancelled =
            |_: CaptureSource| -> Result<ImageRef, CaptureError> { Err(CaptureError::Cancelled) };
        let err = s
            .import_image(&mut cancelled, CaptureSource::Library)
            .unwrap_err();
        assert!(matches!(err, CaptureError::Cancelled));
        assert!(s.history().is_empty());
        assert_eq!(s.mode(), EditorMode::Choosing);
    }

    #[test]
    fn denied_camera_keeps_existing_edits() {
        let mut s = session();
        s.import_image(&mut library("file:///a.jpg"), CaptureSource::Library)
            .unwrap();
        s.apply_filter(FilterKind::Sepia).unwrap();
        let before = s.current().clone();
        let depth = s.history().len();

        let mut denied = |origin: CaptureSource| -> Result<ImageRef, CaptureError> {
            Err(CaptureError::PermissionDenied { origin })
        };
        assert!(s.import_image(&mut denied, CaptureSource::Camera).is_err());
        assert_eq!(s.current(), &before);
        assert_eq!(s.history().len(), depth);
    }

    #[test]
    fn decorations_require_an_image() {
        let mut s = session();
        assert_eq!(
            s.place_sticker(StickerRef::from("emoji1")).unwrap_err(),
            EditError::NoImage
        );
        assert_eq!(s.apply_filter(FilterKind::Blur).unwrap_err(), EditError::NoImage);
        assert!(s.history().is_empty());
    }

    #[test]
    fn placeholder_counts_as_an_image() {
        let mut s = session();
        let placeholder = ImageRef::new(StudioConfig::default().placeholder_image);
        assert_eq!(s.use_placeholder().image, Some(placeholder));
        assert_eq!(s.mode(), EditorMode::Editing);
        assert!(s.place_sticker(StickerRef::from("emoji2")).is_ok());
    }

    #[test]
    fn filter_and_sticker_edits_are_single_steps() {
        let mut s = session();
        s.import_image(&mut library("A"), CaptureSource::Library)
            .unwrap();
        s.apply_filter(FilterKind::Sepia).unwrap();
        s.place_sticker(StickerRef::from("E1")).unwrap();

        // blank baseline + image + filter + sticker
        assert_eq!(s.history().len(), 4);
        assert_eq!(s.current().sticker, Some(StickerRef::from("E1")));
        assert_eq!(s.current().filter, FilterKind::Sepia);

        s.undo();
        assert!(s.current().sticker.is_none());
        assert_eq!(s.current().filter, FilterKind::Sepia);
        s.undo();
        assert_eq!(s.current().filter, FilterKind::None);
        assert!(s.current().has_image());
    }

    #[test]
    fn new_edit_after_undo_drops_redo() {
        let mut s = session();
        s.import_image(&mut library("A"), CaptureSource::Library)
            .unwrap();
        s.apply_filter(FilterKind::Sepia).unwrap();
        s.undo();
        s.apply_filter(FilterKind::Invert).unwrap();
        assert!(!s.can_redo());
        assert_eq!(s.current().filter, FilterKind::Invert);
    }

    #[test]
    fn undo_redo_are_safe_to_call_speculatively() {
        let mut s = session();
        assert_eq!(s.undo(), &SessionState::empty());
        assert_eq!(s.redo(), &SessionState::empty());
        assert!(s.history().is_empty());
    }

    #[test]
    fn reset_returns_to_choosing() {
        let mut s = session();
        s.import_image(&mut library("A"), CaptureSource::Library)
            .unwrap();
        s.apply_filter(FilterKind::Grayscale).unwrap();
        s.reset();
        assert_eq!(s.mode(), EditorMode::Choosing);
        assert!(s.history().is_empty());
        assert_eq!(s.current(), &SessionState::empty());
    }

    #[test]
    fn configured_history_limit_applies() {
        let mut config = StudioConfig::default();
        config.history.max_entries = Some(2);
        let mut s = EditorSession::new(&config);
        s.use_placeholder();
        s.apply_filter(FilterKind::Sepia).unwrap();
        s.apply_filter(FilterKind::Blur).unwrap();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().max_entries(), Some(2));
    }

    #[test]
    fn independent_sessions_do_not_share_history() {
        let mut first = session();
        let second = session();
        first.use_placeholder();
        assert!(!first.history().is_empty());
        assert!(second.history().is_empty());
    }
}
