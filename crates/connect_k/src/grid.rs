//! Square grid storage with line geometry derived from cell ids.
//!
//! Every line query (row, column, diagonal) is pure index arithmetic and
//! relies on a cell's id being equal to its slot in `cells`. The grid is
//! the only code that creates or moves cells, so that invariant cannot be
//! broken from outside this module.

use super::types::{Cell, Mark, Slope};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square matrix of cells, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unvalidated grid as read by serde.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

/// A deserialized grid whose cells do not line up with their ids.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Grid cell at slot {} is inconsistent with a {}x{} grid", slot, size, size)]
pub struct GridError {
    /// Offending storage slot, the expected cell count on a length mismatch,
    /// or `usize::MAX` when the cell count overflows.
    pub slot: usize,
    /// Declared grid size.
    pub size: usize,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let RawGrid { size, cells } = raw;
        let expected = size
            .checked_mul(size)
            .ok_or(GridError { slot: usize::MAX, size })?;
        if cells.len() != expected {
            return Err(GridError {
                slot: expected,
                size,
            });
        }
        for (slot, cell) in cells.iter().enumerate() {
            if cell.id != slot || cell.row != slot / size || cell.column != slot % size {
                return Err(GridError { slot, size });
            }
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// Creates an empty grid with `size` rows and `size` columns.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|id| Cell {
                id,
                row: id / size,
                column: id % size,
                content: None,
            })
            .collect();
        Self { size, cells }
    }

    /// Number of cells in each row and column.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// All cells, ordered by id.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell with the given id.
    pub fn cell(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Gets the mark at the given id, `None` if empty or out of range.
    pub fn content(&self, id: usize) -> Option<Mark> {
        self.cell(id).and_then(Cell::content)
    }

    /// Checks if the given id names an unoccupied cell.
    pub fn is_vacant(&self, id: usize) -> bool {
        self.cell(id).is_some_and(Cell::is_empty)
    }

    /// Overwrites one cell's content.
    ///
    /// Returns the updated cell, or `None` without touching the grid when
    /// `id` is out of range.
    #[instrument(level = "trace", skip(self))]
    pub fn set_content(&mut self, id: usize, content: Option<Mark>) -> Option<&Cell> {
        let cell = self.cells.get_mut(id)?;
        cell.content = content;
        Some(cell)
    }

    /// Returns true if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns true if no cell holds a mark.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Ids of all unoccupied cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter(|cell| cell.is_empty()).map(Cell::id)
    }

    /// The row containing `id`, in increasing column order.
    pub fn row(&self, id: usize) -> Vec<Cell> {
        let Some(cell) = self.cell(id) else {
            return Vec::new();
        };
        let start = cell.row * self.size;
        self.cells[start..start + self.size].to_vec()
    }

    /// The column containing `id`, in increasing row order.
    pub fn column(&self, id: usize) -> Vec<Cell> {
        let Some(cell) = self.cell(id) else {
            return Vec::new();
        };
        (0..self.size)
            .map(|row| self.cells[cell.column + row * self.size])
            .collect()
    }

    /// The maximal diagonal through `id` with the given slope, ascending by id.
    pub fn diagonal(&self, id: usize, slope: Slope) -> Vec<Cell> {
        let Some(cell) = self.cell(id) else {
            return Vec::new();
        };
        let last = self.size - 1;
        let (distance_to_corner, step) = match slope {
            Slope::Positive => (cell.column, self.size + 1),
            Slope::Negative => (last - cell.column, self.size - 1),
        };
        let index_in_diagonal = distance_to_corner.min(cell.row);
        let tail_length = last - distance_to_corner.max(cell.row);
        let first = cell.id - index_in_diagonal * step;

        (0..=index_in_diagonal + tail_length)
            .map(|offset| self.cells[first + offset * step])
            .collect()
    }

    /// The row, column and both diagonals through `id`.
    ///
    /// Empty when `id` is out of range.
    pub fn groups(&self, id: usize) -> Vec<Vec<Cell>> {
        if self.cell(id).is_none() {
            return Vec::new();
        }
        vec![
            self.row(id),
            self.column(id),
            self.diagonal(id, Slope::Positive),
            self.diagonal(id, Slope::Negative),
        ]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size).map(|row| self.row(row * self.size)).collect()
    }

    /// All columns, left to right.
    pub fn columns(&self) -> Vec<Vec<Cell>> {
        (0..self.size).map(|column| self.column(column)).collect()
    }

    /// Every diagonal of both slopes, one per starting border cell.
    ///
    /// Positive diagonals come first (starting along the top row, then down
    /// the left column), then negative ones (top row, then down the right
    /// column). Corner diagonals of length one are included.
    pub fn diagonals(&self) -> Vec<Vec<Cell>> {
        if self.size == 0 {
            return Vec::new();
        }
        let top_row = 0..self.size;
        let left_column = (1..self.size).map(|row| row * self.size);
        let right_column = (1..self.size).map(|row| row * self.size + self.size - 1);

        let positive = top_row
            .clone()
            .chain(left_column)
            .map(|start| self.diagonal(start, Slope::Positive));
        let negative = top_row
            .chain(right_column)
            .map(|start| self.diagonal(start, Slope::Negative));
        positive.chain(negative).collect()
    }

    /// Every line on the board: columns, then rows, then diagonals.
    pub fn all_lines(&self) -> Vec<Vec<Cell>> {
        let mut lines = self.columns();
        lines.extend(self.rows());
        lines.extend(self.diagonals());
        lines
    }

    /// Ids of the up to eight cells touching `id`.
    ///
    /// Order: directly above, directly below, then the left column top to
    /// bottom, then the right column top to bottom. Never wraps across the
    /// board edge.
    pub fn adjacent(&self, id: usize) -> Vec<usize> {
        let Some(cell) = self.cell(id) else {
            return Vec::new();
        };
        let size = self.size as isize;
        let mut offsets = vec![-size, size];
        if cell.column != 0 {
            offsets.extend([-size - 1, -1, size - 1]);
        }
        if cell.column != self.size - 1 {
            offsets.extend([-size + 1, 1, size + 1]);
        }
        offsets
            .into_iter()
            .filter_map(|offset| {
                let index = id as isize + offset;
                (0..self.cells.len() as isize)
                    .contains(&index)
                    .then_some(index as usize)
            })
            .collect()
    }
}
