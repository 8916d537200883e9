//! Alternating turn invariant: X and O take turns, X first.

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: X has placed as many marks as O or exactly one more, and
/// until someone wins the side to move follows from those counts.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let count = |mark| {
            game.board()
                .cells()
                .iter()
                .filter(|cell| cell.content() == Some(mark))
                .count()
        };
        let (x, o) = (count(Mark::X), count(Mark::O));
        if x != o && x != o + 1 {
            return false;
        }
        if game.winner().is_some() {
            return true;
        }
        let expected = if x == o { Mark::X } else { Mark::O };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
