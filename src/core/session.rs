//! Undo/redo bookkeeping shared across parses.
//!
//! One `Session` lives for the whole interpreter lifetime and is threaded
//! explicitly through the [`Interpreter`](crate::parser::Interpreter). The four
//! mutators below are the only way to change it.

use serde::Serialize;

/// Undo/redo state carried between parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    undo_pending: bool,
    redo_pending: bool,
    last_removed_position: Option<usize>,
}

impl Session {
    /// Create a session with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the record at `position` was removed and can be restored.
    pub fn mark_removed(&mut self, position: usize) {
        self.last_removed_position = Some(position);
        self.undo_pending = true;
    }

    /// Forget the pending undo and its position.
    pub fn clear_undo(&mut self) {
        self.last_removed_position = None;
        self.undo_pending = false;
    }

    /// Record that an undone change can be re-applied.
    pub fn mark_redo_available(&mut self) {
        self.redo_pending = true;
    }

    /// Forget the pending redo.
    pub fn clear_redo(&mut self) {
        self.redo_pending = false;
    }

    /// Whether a removal can be undone.
    #[must_use]
    pub const fn undo_pending(&self) -> bool {
        self.undo_pending
    }

    /// Whether an undo can be re-applied.
    #[must_use]
    pub const fn redo_pending(&self) -> bool {
        self.redo_pending
    }

    /// Position of the last removed record, only while an undo is pending.
    #[must_use]
    pub const fn last_removed_position(&self) -> Option<usize> {
        if self.undo_pending {
            self.last_removed_position
        } else {
            None
        }
    }
}
