//! History consistency invariant: the move stacks agree with the board.

use super::super::Game;
use super::Invariant;

/// Invariant: every applied move's cell holds its mark, no other cell is
/// occupied, and every undone move's cell is empty.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let history = game.history();

        let occupied = board.cells().iter().filter(|cell| !cell.is_empty()).count();
        let applied_match = history
            .moves()
            .iter()
            .all(|record| board.content(record.cell) == Some(record.mark));
        let undone_vacant = history
            .undone()
            .iter()
            .all(|record| board.is_vacant(record.cell));

        occupied == history.moves().len() && applied_match && undone_vacant
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Mark};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_undo_keeps_consistency() {
        let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 4, 8]).unwrap();
        game.undo();
        game.undo();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().undone().len(), 2);
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[4]).unwrap();
        game.board_mut().set_content(0, Some(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
