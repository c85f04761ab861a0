//! DeleteItem command

use crate::error::{BoardError, Result};
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{Boards, ItemId};
use serde::{Deserialize, Serialize};

/// Delete a single item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteItem {
    /// The item ID to delete
    pub id: ItemId,
}

impl DeleteItem {
    /// Create a new DeleteItem command
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteItem {
    fn op_string(&self) -> String {
        "delete item".into()
    }

    fn apply(&self, boards: &Boards, _stamper: &dyn Stamper) -> Result<Boards> {
        let (bi, ii) = boards
            .locate_item(self.id.as_str())
            .ok_or_else(|| BoardError::item_not_found(self.id.as_str()))?;

        let mut next = boards.clone();
        next.as_mut_vec()[bi].items.remove(ii);
        Ok(next)
    }
}
