//! Linear undo/redo history of session states.
//!
//! The history is an ordered log of committed `SessionState`s plus a cursor
//! naming the active entry:
//!
//! - Entries before the cursor are the past, entries after it the redo branch.
//! - Committing while the cursor is not at the tail destroys the redo branch.
//! - Undo at the first entry and redo at the last are silent no-ops.
//! - States are stored verbatim; the manager never validates or repairs them.
//!
//! # Usage
//!
//! ```
//! use ss_common::{FilterKind, ImageRef};
//! use ss_session::{HistoryManager, SessionState};
//!
//! let mut history = HistoryManager::new();
//! let picked = SessionState::empty().with_image(ImageRef::from("file:///cat.jpg"));
//! history.commit(picked.clone());
//! history.commit(picked.with_filter(FilterKind::Sepia));
//!
//! assert_eq!(history.undo(), &picked);
//! assert!(history.can_redo());
//! ```

use tracing::{debug, trace};

use crate::state::{EditKind, SessionState};

/// What `current()` projects while the history is empty.
static EMPTY_STATE: SessionState = SessionState::EMPTY;

/// A single committed state in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// What changed relative to the state that was current at commit time.
    pub label: EditKind,
    /// The committed state, exactly as given.
    pub state: SessionState,
}

/// Owns all temporal navigation for one editing session.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    /// Index of the active entry; None only while `entries` is empty.
    cursor: Option<usize>,
    max_entries: Option<usize>,
}

impl HistoryManager {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that retains at most `max_entries` states.
    ///
    /// Only the undoable past is ever evicted. A limit of 0 is treated as 1.
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(1)),
            ..Self::default()
        }
    }

    /// Record `next` as the newest state, discarding any redo branch.
    pub fn commit(&mut self, next: SessionState) {
        let label = EditKind::between(self.current(), &next);

        let keep = self.cursor.map_or(0, |c| c + 1);
        let discarded = self.entries.len() - keep;
        self.entries.truncate(keep);

        self.entries.push(HistoryEntry {
            label,
            state: next,
        });
        self.cursor = Some(self.entries.len() - 1);
        self.enforce_limit();

        debug!(
            %label,
            discarded,
            depth = self.entries.len(),
            cursor = ?self.cursor,
            "History commit"
        );
    }

    /// Step back one entry and return the new current state.
    ///
    /// At the first entry, or with an empty history, nothing changes and the
    /// current state is returned as-is.
    pub fn undo(&mut self) -> &SessionState {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                debug!(
                    label = %self.entries[c].label,
                    cursor = c - 1,
                    "Undo"
                );
            }
            _ => trace!(cursor = ?self.cursor, "Undo ignored: at start of history"),
        }
        self.current()
    }

    /// Step forward one entry and return the new current state.
    ///
    /// At the last entry, or with an empty history, this is a no-op.
    pub fn redo(&mut self) -> &SessionState {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                debug!(
                    label = %self.entries[c + 1].label,
                    cursor = c + 1,
                    "Redo"
                );
            }
            _ => trace!(cursor = ?self.cursor, "Redo ignored: at end of history"),
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// The active state, or the empty state when nothing has been committed.
    pub fn current(&self) -> &SessionState {
        self.current_entry().map_or(&EMPTY_STATE, |e| &e.state)
    }

    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Drop every entry and return to the empty state.
    pub fn reset(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.cursor = None;
        debug!(dropped, "History reset");
    }

    /// Active index, or None for the empty sentinel.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of undo steps available.
    pub fn undo_count(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of redo steps available.
    pub fn redo_count(&self) -> usize {
        self.cursor.map_or(0, |c| self.entries.len() - c - 1)
    }

    /// Label of the edit that `undo()` would revert.
    pub fn undo_label(&self) -> Option<EditKind> {
        if self.can_undo() {
            self.current_entry().map(|e| e.label)
        } else {
            None
        }
    }

    /// Label of the edit that `redo()` would reapply.
    pub fn redo_label(&self) -> Option<EditKind> {
        if self.can_redo() {
            self.cursor
                .and_then(|c| self.entries.get(c + 1))
                .map(|e| e.label)
        } else {
            None
        }
    }

    /// All entries in commit order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// All stored states in commit order.
    pub fn states(&self) -> impl Iterator<Item = &SessionState> {
        self.entries.iter().map(|e| &e.state)
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Change the retention limit, evicting old undo entries if needed.
    pub fn set_max_entries(&mut self, max: Option<usize>) {
        self.max_entries = max.map(|m| m.max(1));
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        let Some(max) = self.max_entries else {
            return;
        };
        let Some(cursor) = self.cursor else {
            return;
        };
        // Never evict the active entry or the redo branch.
        let excess = self.entries.len().saturating_sub(max).min(cursor);
        if excess > 0 {
            self.entries.drain(..excess);
            self.cursor = Some(cursor - excess);
            debug!(evicted = excess, max, "History limit enforced");
        }
    }
}
