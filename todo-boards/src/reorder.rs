//! Drag-and-drop reorder engine
//!
//! [`reorder`] turns the current [`Boards`] plus a resolved [`DragDescriptor`]
//! into the next [`Boards`]. It is a pure function: the input is never
//! touched, and the same input always yields the same output.
//!
//! ## Placement rules
//!
//! - **Board over board** - array-move: the dragged board is removed and
//!   reinserted at the target's index.
//! - **Item within its own board** - the item is removed, then inserted at the
//!   target item's index in the shortened list (append when the target is not
//!   an item of that board). This is a fixed tie-break that does not depend on
//!   drag direction: moving down settles just before the target's new slot.
//! - **Item into another board** - inserted right after the target item, or
//!   appended when dropped on the board itself or on an unknown target. The
//!   item's `board_id` is rewritten to the destination.
//!
//! Anything that cannot be resolved degrades to a no-op (or an append) and
//! is logged at debug level. The engine never errors.

use crate::types::{BoardId, Boards};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What kind of thing was dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A whole board
    #[serde(rename = "collection")]
    Board,
    /// A single item
    Item,
}

/// A completed drag gesture, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDescriptor {
    #[serde(rename = "draggedKind")]
    pub kind: DragKind,
    pub dragged_id: String,
    /// Board holding the dragged item; `None` for board drags
    #[serde(default)]
    pub dragged_owner_id: Option<BoardId>,
    /// Where the drag ended; `None` means it was cancelled
    #[serde(default)]
    pub target_id: Option<String>,
    /// Board holding the target, when the target is an item
    #[serde(default)]
    pub target_owner_id: Option<BoardId>,
}

impl DragDescriptor {
    /// Drag a board onto another board (`None` = cancelled)
    pub fn board(dragged: impl Into<String>, target: Option<String>) -> Self {
        Self {
            kind: DragKind::Board,
            dragged_id: dragged.into(),
            dragged_owner_id: None,
            target_id: target,
            target_owner_id: None,
        }
    }

    /// Start an item drag; finish it with one of the `over_*` builders.
    /// Without a target the drag counts as cancelled.
    pub fn item(dragged: impl Into<String>, owner: impl Into<BoardId>) -> Self {
        Self {
            kind: DragKind::Item,
            dragged_id: dragged.into(),
            dragged_owner_id: Some(owner.into()),
            target_id: None,
            target_owner_id: None,
        }
    }

    /// Dropped over an item held by `owner`
    pub fn over_item(mut self, target: impl Into<String>, owner: impl Into<BoardId>) -> Self {
        self.target_id = Some(target.into());
        self.target_owner_id = Some(owner.into());
        self
    }

    /// Dropped over a board's empty area
    pub fn over_board(mut self, target: impl Into<BoardId>) -> Self {
        self.target_id = Some(target.into().to_string());
        self.target_owner_id = None;
        self
    }

    /// Dropped over an id whose kind the host did not resolve
    pub fn over(mut self, target: impl Into<String>) -> Self {
        self.target_id = Some(target.into());
        self.target_owner_id = None;
        self
    }

    /// True when the drag can never change anything: no target, or dropped
    /// onto itself
    pub fn is_cancelled(&self) -> bool {
        match &self.target_id {
            None => true,
            Some(target) => *target == self.dragged_id,
        }
    }
}

/// Compute the board set that results from a drag.
pub fn reorder(current: &Boards, descriptor: &DragDescriptor) -> Boards {
    if descriptor.is_cancelled() {
        return current.clone();
    }
    // is_cancelled guarantees a target here
    let target = descriptor.target_id.as_deref().unwrap_or_default();

    match descriptor.kind {
        DragKind::Board => move_board(current, &descriptor.dragged_id, target),
        DragKind::Item => move_item(current, descriptor, target),
    }
}

fn move_board(current: &Boards, dragged: &str, target: &str) -> Boards {
    let (Some(from), Some(to)) = (
        current.board_position(dragged),
        current.board_position(target),
    ) else {
        debug!(
            dragged,
            target_id = target,
            "board drag did not resolve to two boards, ignoring"
        );
        return current.clone();
    };

    let mut next = current.clone();
    let boards = next.as_mut_vec();
    let moved = boards.remove(from);
    boards.insert(to, moved);
    next
}

fn move_item(current: &Boards, descriptor: &DragDescriptor, target: &str) -> Boards {
    let dragged = descriptor.dragged_id.as_str();

    let Some((source, from)) = locate_source(current, descriptor) else {
        debug!(dragged, "dragged item not found, ignoring");
        return current.clone();
    };
    let destination = resolve_destination(current, descriptor, target).unwrap_or(source);

    let mut next = current.clone();
    let boards = next.as_mut_vec();
    let moved = boards[source].items.remove(from);

    if destination == source {
        let items = &mut boards[source].items;
        let at = items
            .iter()
            .position(|i| i.id.as_str() == target)
            .unwrap_or(items.len());
        items.insert(at, moved);
    } else {
        let dest_id = boards[destination].id.clone();
        let items = &mut boards[destination].items;
        let at = items
            .iter()
            .position(|i| i.id.as_str() == target)
            .map_or(items.len(), |i| i + 1);
        items.insert(at, moved.moved_to(&dest_id));
    }
    next
}

/// Board index and item index of the dragged item. The claimed owner is
/// trusted only if it really holds the item.
fn locate_source(current: &Boards, descriptor: &DragDescriptor) -> Option<(usize, usize)> {
    let dragged = descriptor.dragged_id.as_str();
    let claimed = descriptor
        .dragged_owner_id
        .as_ref()
        .and_then(|owner| current.board_position(owner.as_str()))
        .and_then(|bi| current[bi].item_position(dragged).map(|ii| (bi, ii)));

    claimed.or_else(|| {
        let found = current.locate_item(dragged);
        if found.is_some() {
            debug!(
                dragged,
                claimed_owner = ?descriptor.dragged_owner_id,
                "dragged item is not held by its claimed owner, using actual owner"
            );
        }
        found
    })
}

/// Destination board index: target's owner, else the board holding the
/// target item, else the target board itself. `None` means fall back to the
/// source board.
fn resolve_destination(
    current: &Boards,
    descriptor: &DragDescriptor,
    target: &str,
) -> Option<usize> {
    if let Some(owner) = &descriptor.target_owner_id {
        match current.board_position(owner.as_str()) {
            Some(bi) => return Some(bi),
            None => debug!(target_owner = %owner, "target owner is not a board"),
        }
    }

    let resolved = current
        .locate_item(target)
        .map(|(bi, _)| bi)
        .or_else(|| current.board_position(target));
    if resolved.is_none() {
        debug!(target_id = target, "drop target not found, returning item to its board");
    }
    resolved
}
