//! UpdateItem command

use crate::error::{BoardError, Result};
use crate::mutation::Mutation;
use crate::stamp::Stamper;
use crate::types::{Boards, ItemId};
use serde::{Deserialize, Serialize};

/// Change an item's text. Position and owner are kept.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateItem {
    /// The item ID to edit
    pub id: ItemId,
    /// The new text
    pub text: String,
}

impl UpdateItem {
    /// Create a new UpdateItem command
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Mutation for UpdateItem {
    fn op_string(&self) -> String {
        "update item".into()
    }

    fn apply(&self, boards: &Boards, _stamper: &dyn Stamper) -> Result<Boards> {
        let (bi, ii) = boards
            .locate_item(self.id.as_str())
            .ok_or_else(|| BoardError::item_not_found(self.id.as_str()))?;

        let mut next = boards.clone();
        next.as_mut_vec()[bi].items[ii].text = self.text.clone();
        Ok(next)
    }
}
