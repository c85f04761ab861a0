//! The Mutation trait: one committed step of board state

use crate::error::Result;
use crate::reorder::{reorder, DragDescriptor};
use crate::stamp::Stamper;
use crate::types::Boards;

/// A command that computes the next board set from the current one.
///
/// Implementations never modify `boards`; they return a new value. The
/// stamper is the only source of fresh ids and timestamps.
pub trait Mutation: std::fmt::Debug {
    /// Short "verb noun" name used in logs, e.g. `"add board"`
    fn op_string(&self) -> String;

    /// Compute the next state
    fn apply(&self, boards: &Boards, stamper: &dyn Stamper) -> Result<Boards>;

    /// True when the step must not reach history at all. Everything else is
    /// committed, even when it reproduces the present.
    fn skips_commit(&self) -> bool {
        false
    }
}

impl Mutation for DragDescriptor {
    fn op_string(&self) -> String {
        match self.kind {
            crate::reorder::DragKind::Board => "move board".to_string(),
            crate::reorder::DragKind::Item => "move item".to_string(),
        }
    }

    fn apply(&self, boards: &Boards, _stamper: &dyn Stamper) -> Result<Boards> {
        Ok(reorder(boards, self))
    }

    fn skips_commit(&self) -> bool {
        self.is_cancelled()
    }
}
