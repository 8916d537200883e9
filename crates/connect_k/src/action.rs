//! First-class move records for connect-K.
//!
//! Moves are plain data rather than captured closures: a record says which
//! cell changed, which mark was written and what the cell held before.
//! [`apply`] and [`reverse`] are the only two ways a record touches a board.

use super::{Grid, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on one cell, with enough information to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct MoveRecord {
    /// Id of the cell that was written.
    pub cell: usize,
    /// The mark that was placed.
    pub mark: Mark,
    /// Content of the cell before the move.
    pub prior: Option<Mark>,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Writes the record's mark onto the board.
///
/// Returns false, leaving the board untouched, if the cell id is invalid.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &mut Grid, record: &MoveRecord) -> bool {
    board.set_content(record.cell, Some(record.mark)).is_some()
}

/// Restores the cell's content from before the record was applied.
#[instrument(level = "trace", skip(board))]
pub fn reverse(board: &mut Grid, record: &MoveRecord) -> bool {
    board.set_content(record.cell, record.prior).is_some()
}

/// Error that can occur when choosing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell id is not on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The game already has a winner or the board is full.
    #[display("Game is already over")]
    GameOver,
}

/// What a successful placement did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The game goes on with the other player to move.
    Continue,
    /// The placement completed a winning run.
    Won(Mark),
    /// The placement filled the last cell without a winner.
    Draw,
}
