//! Index invariant: every cell sits in the storage slot named by its id.

use super::super::{Game, Grid};
use super::Invariant;

/// Invariant: `cells[i].id == i`, with row and column derived from the id.
///
/// All line geometry is computed from ids, so a misplaced cell would make
/// rows, columns and diagonals silently wrong.
pub struct IndexMatchesIdInvariant;

impl Invariant<Grid> for IndexMatchesIdInvariant {
    fn holds(grid: &Grid) -> bool {
        let size = grid.size();
        size.checked_mul(size) == Some(grid.cells().len())
            && grid.cells().iter().enumerate().all(|(slot, cell)| {
                cell.id() == slot && cell.row() == slot / size && cell.column() == slot % size
            })
    }

    fn description() -> &'static str {
        "Every cell id matches its storage slot"
    }
}

impl Invariant<Game> for IndexMatchesIdInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Grid>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Grid>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_every_size() {
        for size in 1..=8 {
            assert!(<IndexMatchesIdInvariant as Invariant<Grid>>::holds(&Grid::new(size)));
        }
    }

    #[test]
    fn test_holds_after_play() {
        let game = Game::replay(crate::GameConfig::new(4, 3).unwrap(), &[5, 6, 9]).unwrap();
        assert!(<IndexMatchesIdInvariant as Invariant<Game>>::holds(&game));
    }
}
