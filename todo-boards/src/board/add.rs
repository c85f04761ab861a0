//! AddBoard command

use super::validate_title;
use crate::error::Result;
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{Board, Boards};
use serde::{Deserialize, Serialize};

/// Append a new, empty board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddBoard {
    /// The board title
    pub title: String,
}

impl AddBoard {
    /// Create a new AddBoard command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Mutation for AddBoard {
    fn op_string(&self) -> String {
        "add board".into()
    }

    fn apply(&self, boards: &Boards, stamper: &dyn Stamper) -> Result<Boards> {
        validate_title(&self.title)?;

        let board = Board::new(stamper.next_id(), self.title.clone(), stamper.now());
        let mut next = boards.clone();
        next.as_mut_vec().push(board);
        Ok(next)
    }
}
