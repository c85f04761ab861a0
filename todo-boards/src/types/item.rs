//! Item type: a single to-do entry on a board

use super::ids::{BoardId, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// `board_id` always names the board whose `items` currently holds this item.
/// On the wire it keeps the `boardId` spelling of the stored blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub board_id: BoardId,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item owned by `board_id`
    pub fn new(
        id: impl Into<ItemId>,
        text: impl Into<String>,
        board_id: impl Into<BoardId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            board_id: board_id.into(),
            created_at,
        }
    }

    /// Copy of this item re-owned by another board
    pub fn moved_to(&self, board_id: &BoardId) -> Self {
        Self {
            board_id: board_id.clone(),
            ..self.clone()
        }
    }
}
