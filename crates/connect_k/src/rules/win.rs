//! Win detection for connect-K.
//!
//! A line is any row, column or diagonal. A run is a maximal stretch of a
//! line whose cells all hold the same mark; empty cells always end a run.

use super::super::{Cell, Grid, Mark};
use tracing::instrument;

/// Closes the run `[start, start + len)` if it beats the best so far.
fn close_run(best: &mut (usize, usize), start: usize, len: usize) {
    if len > best.1 {
        *best = (start, len);
    }
}

/// Returns the longest run of identical non-empty marks in `line`.
///
/// Ties go to the run found first. Returns an empty vector when the line
/// holds no marks at all.
pub fn longest_run(line: &[Cell]) -> Vec<Cell> {
    // (start, len) of the best run seen and of the run being walked.
    let mut best = (0, 0);
    let mut current: Option<(Mark, usize)> = None;
    let mut len = 0;

    for (index, cell) in line.iter().enumerate() {
        match (current, cell.content()) {
            (Some((mark, _)), Some(content)) if mark == content => len += 1,
            (run, content) => {
                if let Some((_, start)) = run {
                    close_run(&mut best, start, len);
                }
                current = content.map(|mark| (mark, index));
                len = usize::from(content.is_some());
            }
        }
    }
    if let Some((_, start)) = current {
        close_run(&mut best, start, len);
    }

    line[best.0..best.0 + best.1].to_vec()
}

/// Splits `line` into its maximal non-empty runs, in line order.
pub fn runs(line: &[Cell]) -> Vec<Vec<Cell>> {
    line.chunk_by(|a, b| a.content() == b.content())
        .filter(|chunk| chunk.first().is_some_and(|cell| !cell.is_empty()))
        .map(<[Cell]>::to_vec)
        .collect()
}

/// Checks whether `line` contains a run of at least `win_condition` cells.
pub fn winning_path(line: &[Cell], win_condition: usize) -> bool {
    longest_run(line).len() >= win_condition
}

/// Mark of the first qualifying run among `lines`, if any.
fn first_winner<'a>(
    lines: impl IntoIterator<Item = &'a Vec<Cell>>,
    win_condition: usize,
) -> Option<Mark> {
    lines.into_iter().find_map(|line| {
        let run = longest_run(line);
        if run.len() >= win_condition {
            run.first().and_then(Cell::content)
        } else {
            None
        }
    })
}

/// Scans the whole board for a winner.
///
/// Lines are visited columns first, then rows, then diagonals; when more
/// than one winning run exists the first one in that order is reported.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Grid, win_condition: usize) -> Option<Mark> {
    first_winner(&board.all_lines(), win_condition)
}

/// Checks only the four lines through `id` for a winner.
///
/// Sufficient after a single placement at `id`, since any new run must pass
/// through the placed cell.
#[instrument(level = "trace", skip(board))]
pub fn winner_through(board: &Grid, id: usize, win_condition: usize) -> Option<Mark> {
    first_winner(&board.groups(id), win_condition)
}

/// Cells of the first winning run on the board.
///
/// If the run ends at `last_move` it is reversed so that it starts from the
/// move that completed it.
#[instrument(level = "trace", skip(board))]
pub fn winning_cells(
    board: &Grid,
    win_condition: usize,
    last_move: Option<usize>,
) -> Option<Vec<Cell>> {
    let mut run = board
        .all_lines()
        .iter()
        .map(|line| longest_run(line))
        .find(|run| !run.is_empty() && run.len() >= win_condition)?;

    if last_move.is_some() && run.last().map(Cell::id) == last_move {
        run.reverse();
    }
    Some(run)
}
