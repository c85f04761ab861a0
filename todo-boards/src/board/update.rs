//! UpdateBoard command

use crate::error::{BoardError, Result};
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{BoardId, Boards};
use serde::{Deserialize, Serialize};

/// Rename a board.
///
/// Blank titles are accepted here: a host that commits on every keystroke
/// passes through an empty title while the user retypes it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateBoard {
    /// The board ID to rename
    pub id: BoardId,
    /// The new title
    pub title: String,
}

impl UpdateBoard {
    /// Create a new UpdateBoard command
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Mutation for UpdateBoard {
    fn op_string(&self) -> String {
        "update board".into()
    }

    fn apply(&self, boards: &Boards, _stamper: &dyn Stamper) -> Result<Boards> {
        let index = boards
            .board_position(self.id.as_str())
            .ok_or_else(|| BoardError::board_not_found(self.id.as_str()))?;

        let mut next = boards.clone();
        next.as_mut_vec()[index].title = self.title.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::stamp::test_support::SequenceStamper;

    #[test]
    fn test_rename_board() {
        let stamper = SequenceStamper::default();
        let boards = AddBoard::new("Old").apply(&Boards::new(), &stamper).unwrap();
        let id = boards[0].id.clone();

        let renamed = UpdateBoard::new(&id, "New").apply(&boards, &stamper).unwrap();
        assert_eq!(renamed[0].title, "New");
        assert_eq!(renamed[0].id, id);
        assert_eq!(renamed[0].created_at, boards[0].created_at);
        // input untouched
        assert_eq!(boards[0].title, "Old");
    }

    #[test]
    fn test_rename_missing_board() {
        let result =
            UpdateBoard::new("nope", "X").apply(&Boards::new(), &SequenceStamper::default());
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
    }
}
