//! DeleteBoard command

use crate::error::{BoardError, Result};
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{BoardId, Boards};
use serde::{Deserialize, Serialize};

/// Delete a board together with all of its items
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board ID to delete
    pub id: BoardId,
}

impl DeleteBoard {
    /// Create a new DeleteBoard command
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteBoard {
    fn op_string(&self) -> String {
        "delete board".into()
    }

    fn apply(&self, boards: &Boards, _stamper: &dyn Stamper) -> Result<Boards> {
        let index = boards
            .board_position(self.id.as_str())
            .ok_or_else(|| BoardError::board_not_found(self.id.as_str()))?;

        let mut next = boards.clone();
        let removed = next.as_mut_vec().remove(index);
        tracing::debug!(
            board = %removed.id,
            items = removed.items.len(),
            "deleted board and its items"
        );
        Ok(next)
    }
}
