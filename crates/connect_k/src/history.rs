//! Undo/redo stacks of applied moves.

use super::action::MoveRecord;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Applied moves plus the moves that were undone since the last new move.
///
/// Pushing a new move discards the redo branch, so redo only ever replays
/// moves from a single line of play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
    undone: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly applied move and invalidates the redo branch.
    #[instrument(level = "trace", skip(self))]
    pub fn push(&mut self, record: MoveRecord) {
        if !self.undone.is_empty() {
            trace!(discarded = self.undone.len(), "Dropping redo branch");
            self.undone.clear();
        }
        self.moves.push(record);
    }

    /// Moves the latest applied move onto the redo stack and returns it.
    pub fn pop_undo(&mut self) -> Option<MoveRecord> {
        let record = self.moves.pop()?;
        self.undone.push(record);
        Some(record)
    }

    /// Moves the latest undone move back onto the applied stack and returns it.
    pub fn pop_redo(&mut self) -> Option<MoveRecord> {
        let record = self.undone.pop()?;
        self.moves.push(record);
        Some(record)
    }

    /// Forgets both stacks.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.undone.clear();
    }

    /// The most recently applied move.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Applied moves, oldest first.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Undone moves; the last element is the next one to redo.
    pub fn undone(&self) -> &[MoveRecord] {
        &self.undone
    }

    /// Returns true if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Returns true if there is a move to redo.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
