//! Persistence adapters for the board set
//!
//! The engine treats stored data as one opaque blob under the fixed key
//! [`STORE_KEY`]. Loading never fails: anything missing or unreadable comes
//! back as an empty board set, and the problem is logged.

use crate::error::Result;
use crate::types::Boards;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name under which the board set is stored
pub const STORE_KEY: &str = "boards";

/// Load/save collaborator for the whole board set
pub trait BoardStore {
    /// Read the stored boards; empty when nothing usable is stored
    fn load(&self) -> Boards;

    /// Persist the boards. Callers treat this as best effort.
    fn save(&self, boards: &Boards) -> Result<()>;
}

/// Stores the board set as pretty JSON at `<root>/boards.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Directory holding the blob
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to the stored blob
    pub fn path(&self) -> PathBuf {
        self.root.join(format!("{STORE_KEY}.json"))
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Boards {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored boards, starting empty");
                return Boards::new();
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read stored boards, starting empty"
                );
                return Boards::new();
            }
        };

        match parse_blob(&content) {
            Some(boards) => {
                info!(
                    path = %path.display(),
                    boards = boards.board_count(),
                    items = boards.item_count(),
                    "loaded boards"
                );
                boards
            }
            None => Boards::new(),
        }
    }

    fn save(&self, boards: &Boards) -> Result<()> {
        let path = self.path();
        let content = serde_json::to_string_pretty(boards)?;
        atomic_write(&path, content.as_bytes())?;
        debug!(path = %path.display(), boards = boards.board_count(), "saved boards");
        Ok(())
    }
}

/// Keeps the serialized blob in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw blob, as if a previous session had saved it
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// The raw blob last saved, if any
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl BoardStore for MemoryStore {
    fn load(&self) -> Boards {
        self.blob
            .borrow()
            .as_deref()
            .and_then(parse_blob)
            .unwrap_or_default()
    }

    fn save(&self, boards: &Boards) -> Result<()> {
        *self.blob.borrow_mut() = Some(serde_json::to_string(boards)?);
        Ok(())
    }
}

impl<S: BoardStore + ?Sized> BoardStore for &S {
    fn load(&self) -> Boards {
        (**self).load()
    }

    fn save(&self, boards: &Boards) -> Result<()> {
        (**self).save(boards)
    }
}

/// Parse a stored blob. `null` counts as nothing stored.
fn parse_blob(content: &str) -> Option<Boards> {
    match serde_json::from_str::<Option<Boards>>(content) {
        Ok(boards) => boards,
        Err(e) => {
            warn!(error = %e, "stored boards are not valid, starting empty");
            None
        }
    }
}

/// Write via a temp file in the same directory, then rename over the target
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Item};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample() -> Boards {
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        Boards::from(vec![
            Board::new("a", "Groceries", at).with_items(vec![Item::new("x", "Milk", "a", at)]),
            Board::new("b", "Chores", at),
        ])
    }

    #[test]
    fn test_json_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("data"));

        store.save(&sample()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_json_store_corrupt_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_json_store_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());
        store.save(&sample()).unwrap();
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
        assert!(store.blob().unwrap().starts_with('['));
    }

    #[test]
    fn test_null_blob_is_empty() {
        assert!(MemoryStore::with_blob("null").load().is_empty());
    }

    #[test]
    fn test_reads_browser_blob() {
        let blob = r#"[{"id":"a","title":"Groceries","todos":[
            {"id":"x","text":"Milk","boardId":"a","createdAt":"2024-05-06T07:08:09.000Z"}
        ],"createdAt":"2024-05-06T07:08:09.000Z"}]"#;
        let boards = MemoryStore::with_blob(blob).load();
        assert_eq!(boards[0].items[0].text, "Milk");
        assert_eq!(boards[0].created_at, sample()[0].created_at);
    }
}
