//! BoardSession - the host-side owner of the live history
//!
//! A session ties the pure pieces together: it loads the stored boards once,
//! routes every mutation through [`History::commit`], and saves after each
//! state change. Saving is best effort; a failed save is logged and the
//! in-memory state stays authoritative.

use crate::error::Result;
use crate::history::History;
use crate::mutation::Mutation;
use crate::reorder::DragDescriptor;
use crate::stamp::Stamper;
use crate::store::BoardStore;
use crate::types::Boards;
use tracing::{debug, warn};

/// One editing session over a store
pub struct BoardSession<S, T> {
    history: History,
    store: S,
    stamper: T,
}

impl<S: BoardStore, T: Stamper> BoardSession<S, T> {
    /// Load the stored boards and start with an empty history
    pub fn open(store: S, stamper: T) -> Self {
        let mut boards = store.load();
        let repaired = boards.normalize_owners();
        if repaired > 0 {
            warn!(repaired, "stored items pointed at the wrong board, repaired");
        }

        Self {
            history: History::new(boards),
            store,
            stamper,
        }
    }

    /// Cap the number of undo snapshots kept from now on
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = History::with_limit(self.history.into_present(), limit);
        self
    }

    /// Apply a mutation and commit its result.
    ///
    /// Every successful result is committed, so a new step always discards
    /// the redo branch. Only a cancelled drag skips history. On error
    /// nothing changes.
    pub fn apply<M: Mutation + ?Sized>(&mut self, mutation: &M) -> Result<&Boards> {
        if mutation.skips_commit() {
            debug!(op = %mutation.op_string(), "cancelled, nothing to commit");
            return Ok(self.history.present());
        }

        let next = mutation.apply(self.history.present(), &self.stamper)?;
        debug!(op = %mutation.op_string(), "committing");
        self.replace_history(|h| h.commit(next));
        Ok(self.history.present())
    }

    /// Apply a finished drag gesture
    pub fn drag(&mut self, descriptor: &DragDescriptor) -> &Boards {
        if let Err(e) = self.apply(descriptor) {
            warn!(error = %e, "drag failed");
        }
        self.history.present()
    }

    /// Step back; returns false when there was nothing to undo
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        self.replace_history(History::undo);
        true
    }

    /// Step forward; returns false when there was nothing to redo
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        self.replace_history(History::redo);
        true
    }

    /// The current boards
    pub fn boards(&self) -> &Boards {
        self.history.present()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn replace_history(&mut self, step: impl FnOnce(History) -> History) {
        let current = std::mem::replace(&mut self.history, History::new(Boards::new()));
        self.history = step(current);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.history.present()) {
            warn!(error = %e, "failed to save boards");
        }
    }
}
