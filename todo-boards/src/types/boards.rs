//! The ordered set of boards: the unit of snapshotting

use super::board::Board;
use super::ids::BoardId;
use super::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;

/// Ordered list of boards.
///
/// Serialized as a bare JSON array. Cloning produces a fully independent copy,
/// which is what lets [`History`](crate::History) keep snapshots that later
/// edits cannot touch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boards(Vec<Board>);

impl Boards {
    /// An empty board set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of boards
    pub fn board_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of items across all boards
    pub fn item_count(&self) -> usize {
        self.0.iter().map(|b| b.items.len()).sum()
    }

    /// Index of a board by id
    pub fn board_position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|b| b.id.as_str() == id)
    }

    /// Find a board by id
    pub fn find_board(&self, id: &str) -> Option<&Board> {
        self.0.iter().find(|b| b.id.as_str() == id)
    }

    /// Locate an item: `(board index, item index)`
    pub fn locate_item(&self, id: &str) -> Option<(usize, usize)> {
        self.0
            .iter()
            .enumerate()
            .find_map(|(bi, b)| b.item_position(id).map(|ii| (bi, ii)))
    }

    /// Find an item by id
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.locate_item(id).map(|(bi, ii)| &self.0[bi].items[ii])
    }

    /// Id of the board currently holding the item
    pub fn owner_of_item(&self, id: &str) -> Option<&BoardId> {
        self.locate_item(id).map(|(bi, _)| &self.0[bi].id)
    }

    /// Check that every item points at its containing board and that no id
    /// appears twice.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        for board in &self.0 {
            if !seen.insert(board.id.as_str()) {
                return false;
            }
            for item in &board.items {
                if item.board_id != board.id || !seen.insert(item.id.as_str()) {
                    return false;
                }
            }
        }
        true
    }

    /// Point every item's `board_id` at its containing board.
    ///
    /// Returns how many items were repaired. Only meant for data that came
    /// from outside the engine (a loaded blob); the engine itself never
    /// produces mismatches.
    pub fn normalize_owners(&mut self) -> usize {
        let mut repaired = 0;
        for board in &mut self.0 {
            for item in &mut board.items {
                if item.board_id != board.id {
                    item.board_id = board.id.clone();
                    repaired += 1;
                }
            }
        }
        repaired
    }

    pub(crate) fn as_mut_vec(&mut self) -> &mut Vec<Board> {
        &mut self.0
    }
}

impl Deref for Boards {
    type Target = [Board];

    fn deref(&self) -> &[Board] {
        &self.0
    }
}

impl From<Vec<Board>> for Boards {
    fn from(boards: Vec<Board>) -> Self {
        Self(boards)
    }
}

impl FromIterator<Board> for Boards {
    fn from_iter<I: IntoIterator<Item = Board>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Boards {
    type Item = Board;
    type IntoIter = std::vec::IntoIter<Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Boards {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
