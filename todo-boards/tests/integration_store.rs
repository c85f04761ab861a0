//! Persistence tests: the stored blob round-trips every field

use serde_json::Value;
use tempfile::TempDir;
use todo_boards::{Board, BoardStore, Boards, Item, JsonFileStore, MemoryStore, STORE_KEY};

const BLOB: &str = r#"[
  {
    "id": "3f1c",
    "title": "Groceries",
    "todos": [
      { "id": "9a2b", "text": "Milk", "boardId": "3f1c", "createdAt": "2024-04-01T10:15:30.250Z" },
      { "id": "9a2c", "text": "Eggs", "boardId": "3f1c", "createdAt": "2024-04-01T10:16:00Z" }
    ],
    "createdAt": "2024-04-01T10:15:00Z"
  },
  { "id": "77aa", "title": "Chores", "todos": [], "createdAt": "2024-04-02T08:00:00Z" }
]"#;

#[test]
fn test_blob_round_trips_all_fields() {
    let boards = MemoryStore::with_blob(BLOB).load();
    assert_eq!(boards.board_count(), 2);
    assert_eq!(boards.item_count(), 2);

    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path());
    store.save(&boards).unwrap();
    assert!(store.path().ends_with(format!("{STORE_KEY}.json")));

    let reloaded = store.load();
    assert_eq!(reloaded, boards);

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let milk = &raw[0]["todos"][0];
    assert_eq!(milk["id"], "9a2b");
    assert_eq!(milk["text"], "Milk");
    assert_eq!(milk["boardId"], "3f1c");
    assert_eq!(milk["createdAt"], "2024-04-01T10:15:30.250Z");
    assert_eq!(raw[1]["title"], "Chores");
}

#[test]
fn test_order_is_preserved() {
    let boards: Boards = MemoryStore::with_blob(BLOB).load();
    let ids: Vec<&str> = boards.iter().map(|b: &Board| b.id.as_str()).collect();
    assert_eq!(ids, ["3f1c", "77aa"]);
    let items: Vec<&str> = boards[0].items.iter().map(|i: &Item| i.text.as_str()).collect();
    assert_eq!(items, ["Milk", "Eggs"]);
}

#[test]
fn test_unreadable_data_loads_empty() {
    for blob in ["", "garbage", "{\"boards\": 1}", "[{\"id\": 5}]"] {
        assert!(MemoryStore::with_blob(blob).load().is_empty(), "blob: {blob:?}");
    }
}

#[test]
fn test_save_into_missing_directory() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("nested").join("dir"));
    store.save(&Boards::new()).unwrap();
    assert!(store.load().is_empty());
    assert!(store.path().exists());
}
