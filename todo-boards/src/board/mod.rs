//! Board commands

mod add;
mod delete;
mod update;

pub use add::AddBoard;
pub use delete::DeleteBoard;
pub use update::UpdateBoard;

use crate::error::{BoardError, Result};

/// Reject blank titles for new boards; surrounding whitespace is kept as typed
pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(BoardError::invalid_value("title", "must not be blank"));
    }
    Ok(())
}
