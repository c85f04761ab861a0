//! Board type: a titled, ordered list of items

use super::ids::BoardId;
use super::item::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board holds an ordered list of items.
///
/// Items are stored under `todos` in the persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(rename = "todos", default)]
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a new, empty board
    pub fn new(
        id: impl Into<BoardId>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
            created_at,
        }
    }

    /// Replace the items (builder style, used mostly by tests and loaders)
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Index of an item within this board
    pub fn item_position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::new("b1", "Groceries", at());
        assert_eq!(board.title, "Groceries");
        assert!(board.items.is_empty());
    }

    #[test]
    fn test_board_serialization_uses_todos() {
        let board = Board::new("b1", "Groceries", at())
            .with_items(vec![Item::new("t1", "Milk", "b1", at())]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["todos"][0]["text"], "Milk");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_board_reads_missing_todos() {
        let json = r#"{"id":"b1","title":"Empty","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert!(board.items.is_empty());
    }

    #[test]
    fn test_item_lookup() {
        let board = Board::new("b1", "Groceries", at()).with_items(vec![
            Item::new("t1", "Milk", "b1", at()),
            Item::new("t2", "Eggs", "b1", at()),
        ]);
        assert_eq!(board.item_position("t2"), Some(1));
        assert_eq!(board.item_position("t3"), None);
    }
}
