//! Core types for the board engine

mod board;
mod boards;
mod ids;
mod item;

// Re-export all types
pub use board::Board;
pub use boards::Boards;
pub use ids::{BoardId, ItemId};
pub use item::Item;

/// Creation timestamp of boards and items, stored as ISO-8601
pub type Timestamp = chrono::DateTime<chrono::Utc>;
