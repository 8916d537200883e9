//! Core domain types for connect-K.

use serde::{Deserialize, Serialize};

/// Mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::ops::Not for Mark {
    type Output = Mark;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

/// Direction of a diagonal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Slope {
    /// Top-left to bottom-right (id step `size + 1`).
    Positive,
    /// Top-right to bottom-left (id step `size - 1`).
    Negative,
}

/// A single square of the grid.
///
/// Cells are only ever created by [`crate::Grid`], which keeps `id` equal to
/// the cell's slot in its backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) id: usize,
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) content: Option<Mark>,
}

impl Cell {
    /// Linear index of the cell (`row * size + column`).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Row of the cell, counted from the top.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the cell, counted from the left.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Mark occupying the cell, if any.
    pub fn content(&self) -> Option<Mark> {
        self.content
    }

    /// Checks if the cell is unoccupied.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a winning run.
    Winner(Mark),
    /// The board filled up without a winning run.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
