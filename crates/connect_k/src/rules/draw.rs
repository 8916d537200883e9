//! Draw detection logic for connect-K.

use super::super::Grid;
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Grid) -> bool {
    board.is_full()
}

/// Checks if the board is full and nobody has a winning run.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Grid, win_condition: usize) -> bool {
    is_full(board) && winner(board, win_condition).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    fn fill(board: &mut Grid, marks: [Mark; 9]) {
        for (id, mark) in marks.into_iter().enumerate() {
            board.set_content(id, Some(mark));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Grid::new(3);
        assert!(!is_full(&board));
        assert!(!is_draw(&board, 3));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Grid::new(3);
        board.set_content(4, Some(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        let mut board = Grid::new(3);
        // X O X / O X X / O X O
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board, 3));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        let mut board = Grid::new(3);
        // X X X / O O X / O X O
        fill(&mut board, [X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board, 3));
    }

    #[test]
    fn test_same_board_draw_depends_on_win_condition() {
        use Mark::{O, X};
        let mut board = Grid::new(3);
        fill(&mut board, [X, O, X, O, X, X, O, X, O]);
        // Middle row has X X, which wins when K = 2.
        assert!(!is_draw(&board, 2));
    }
}
