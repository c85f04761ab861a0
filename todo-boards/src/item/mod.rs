//! Item commands

mod add;
mod delete;
mod update;

pub use add::AddItem;
pub use delete::DeleteItem;
pub use update::UpdateItem;

use crate::error::{BoardError, Result};

pub(crate) fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BoardError::invalid_value("text", "must not be blank"));
    }
    Ok(())
}
