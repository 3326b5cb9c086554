//! `ss-session` -- Editing session state and linear undo/redo for StickerSmash.
//!
//! This crate provides:
//!
//! - **`SessionState`**: Immutable snapshot of the document (image, sticker, filter).
//! - **`HistoryManager`**: Commit/undo/redo/reset over an ordered log plus a cursor.
//! - **`EditorSession`**: The owned controller the editing screen drives.
//! - **`ImageSource`**: Seam for the platform picker/camera collaborator.
//!
//! # Architecture
//!
//! ```text
//! EditorSession (one per editing screen)
//! ├── mode: EditorMode               (choosing vs. editing)
//! ├── placeholder: ImageRef          ("use this photo")
//! └── history: HistoryManager
//!     ├── entries: Vec<HistoryEntry> (commit order)
//!     └── cursor: Option<usize>      (None = empty sentinel)
//! ```
//!
//! The manager performs no I/O and never fails; capture and export talk to it
//! only through `commit` and `current`.

pub mod capture;
pub mod editor;
pub mod history;
pub mod state;

// Re-export primary types at crate root for convenience.
pub use capture::ImageSource;
pub use editor::{EditError, EditorMode, EditorSession};
pub use history::{HistoryEntry, HistoryManager};
pub use state::{EditKind, SessionState};
