//! Linear undo/redo over whole-board-set snapshots

use crate::types::Boards;
use serde::{Deserialize, Serialize};

/// Past, present, and future board snapshots.
///
/// `past` is oldest first; `future` is soonest-next first. All transitions
/// consume `self` and return the next history, so a caller can never observe
/// a half-updated value. A new commit discards the redo branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<Boards>,
    present: Boards,
    future: Vec<Boards>,
    /// Upper bound on `past.len()`; `None` keeps every snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl History {
    /// Start a history at `present` with nothing to undo or redo
    pub fn new(present: Boards) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` undo snapshots
    pub fn with_limit(present: Boards, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(present)
        }
    }

    /// Adopt `next` as the present; the old present becomes undoable and the
    /// redo stack is cleared.
    pub fn commit(mut self, next: Boards) -> Self {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();

        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
        self
    }

    /// Step back one snapshot. No-op when there is nothing to undo.
    pub fn undo(mut self) -> Self {
        let Some(previous) = self.past.pop() else {
            return self;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.insert(0, current);
        self
    }

    /// Step forward one snapshot. No-op when there is nothing to redo.
    pub fn redo(mut self) -> Self {
        if self.future.is_empty() {
            return self;
        }
        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        self
    }

    /// The state currently visible and editable
    pub fn present(&self) -> &Boards {
        &self.present
    }

    /// Undo snapshots, oldest first
    pub fn past(&self) -> &[Boards] {
        &self.past
    }

    /// Redo snapshots, soonest-next first
    pub fn future(&self) -> &[Boards] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Drop the history and keep only the present
    pub fn into_present(self) -> Boards {
        self.present
    }
}
