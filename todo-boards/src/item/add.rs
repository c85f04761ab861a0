//! AddItem command

use super::validate_text;
use crate::error::{BoardError, Result};
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{BoardId, Boards, Item};
use serde::{Deserialize, Serialize};

/// Append a new item to the end of a board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddItem {
    /// The board receiving the item
    pub board_id: BoardId,
    /// The item text
    pub text: String,
}

impl AddItem {
    /// Create a new AddItem command
    pub fn new(board_id: impl Into<BoardId>, text: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            text: text.into(),
        }
    }
}

impl Mutation for AddItem {
    fn op_string(&self) -> String {
        "add item".into()
    }

    fn apply(&self, boards: &Boards, stamper: &dyn Stamper) -> Result<Boards> {
        validate_text(&self.text)?;
        let index = boards
            .board_position(self.board_id.as_str())
            .ok_or_else(|| BoardError::board_not_found(self.board_id.as_str()))?;

        let item = Item::new(
            stamper.next_id(),
            self.text.clone(),
            self.board_id.clone(),
            stamper.now(),
        );
        let mut next = boards.clone();
        next.as_mut_vec()[index].items.push(item);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::stamp::test_support::SequenceStamper;

    #[test]
    fn test_add_item_appends_with_owner() {
        let stamper = SequenceStamper::default();
        let boards = AddBoard::new("A").apply(&Boards::new(), &stamper).unwrap();
        let a = boards[0].id.clone();

        let boards = AddItem::new(&a, "first").apply(&boards, &stamper).unwrap();
        let boards = AddItem::new(&a, "second").apply(&boards, &stamper).unwrap();

        let texts: Vec<_> = boards[0].items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(boards[0].items[1].board_id, a);
        assert!(boards.is_consistent());
    }

    #[test]
    fn test_add_item_to_missing_board() {
        let result = AddItem::new("nope", "x").apply(&Boards::new(), &SequenceStamper::default());
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
    }

    #[test]
    fn test_add_blank_item() {
        let stamper = SequenceStamper::default();
        let boards = AddBoard::new("A").apply(&Boards::new(), &stamper).unwrap();
        let result = AddItem::new(&boards[0].id, " \t").apply(&boards, &stamper);
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }
}
