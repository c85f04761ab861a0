//! Board and to-do engine with drag reordering and snapshot undo/redo
//!
//! This crate holds the state model behind a to-do board application: an
//! ordered list of boards, each holding an ordered list of items. Hosts drive
//! it with two kinds of input:
//!
//! - **Mutations** - add/rename/delete boards and items (see [`board`] and [`item`])
//! - **Drags** - a resolved [`DragDescriptor`] describing where a board or item was dropped
//!
//! Every state change is routed through a [`History`] so it can be undone and
//! redone. Snapshots are whole [`Boards`] values; nothing is shared between
//! them, so a later edit can never leak into an older snapshot.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use todo_boards::{board::AddBoard, item::AddItem, BoardSession, JsonFileStore, SystemStamper};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = BoardSession::open(JsonFileStore::new(".boards"), SystemStamper);
//!
//! session.apply(&AddBoard::new("Groceries"))?;
//! let board_id = session.boards()[0].id.clone();
//! session.apply(&AddItem::new(board_id, "Milk"))?;
//!
//! session.undo();
//! assert!(session.boards()[0].items.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! ```text
//! host (CLI / UI) ──> BoardSession ──> Mutation::apply ──> reorder / CRUD
//!                          │
//!                          ├──> History (past / present / future)
//!                          └──> BoardStore::save (best effort)
//! ```

mod error;
mod history;
mod mutation;
mod reorder;
mod session;
mod stamp;
mod store;
pub mod types;

// Command modules
pub mod board;
pub mod item;

pub use error::{BoardError, Result};
pub use history::History;
pub use mutation::Mutation;
pub use reorder::{reorder, DragDescriptor, DragKind};
pub use session::BoardSession;
pub use stamp::{Stamper, SystemStamper};
pub use store::{BoardStore, JsonFileStore, MemoryStore, STORE_KEY};

pub use types::{Board, BoardId, Boards, Item, ItemId};
