//! Game engine: turn order, rule enforcement and undo/redo.

use super::action::{self, MoveError, MoveRecord, Placement};
use super::config::{ConfigError, GameConfig};
use super::history::MoveHistory;
use super::rules;
use super::types::{Cell, Mark, Outcome};
use super::Grid;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A connect-K game in any phase.
///
/// State only changes through [`Game::choose`], [`Game::undo`],
/// [`Game::redo`] and [`Game::reset`]. Cloning produces a fully independent
/// copy, which is what the search bot relies on.
///
/// Deserialized games are checked against the same invariants the engine
/// maintains, so a saved game cannot smuggle in an impossible position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    config: GameConfig,
    board: Grid,
    current_player: Mark,
    history: MoveHistory,
    winner: Option<Mark>,
}

/// Unvalidated game as read by serde.
#[derive(Deserialize)]
struct RawGame {
    config: GameConfig,
    board: Grid,
    current_player: Mark,
    history: MoveHistory,
    winner: Option<Mark>,
}

/// A deserialized game that no sequence of moves could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameStateError {
    /// The board does not have the configured size.
    #[display("Board size {} does not match configured size {}", board, config)]
    SizeMismatch {
        /// Size of the stored board.
        board: usize,
        /// Size from the stored configuration.
        config: usize,
    },

    /// The stored winner disagrees with the board.
    #[display("Stored winner {:?} does not match board winner {:?}", stored, actual)]
    WinnerMismatch {
        /// Winner as stored.
        stored: Option<Mark>,
        /// Winner found by scanning the board.
        actual: Option<Mark>,
    },

    /// One or more game invariants fail.
    #[display("Game invariants violated: {}", violations)]
    InvariantsViolated {
        /// Descriptions of the failed invariants.
        violations: String,
    },
}

impl TryFrom<RawGame> for Game {
    type Error = GameStateError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        use super::invariants::{GameInvariants, InvariantSet};

        if raw.board.size() != raw.config.size() {
            return Err(GameStateError::SizeMismatch {
                board: raw.board.size(),
                config: raw.config.size(),
            });
        }
        let actual = rules::winner(&raw.board, raw.config.win_condition());
        if actual != raw.winner {
            return Err(GameStateError::WinnerMismatch {
                stored: raw.winner,
                actual,
            });
        }

        let game = Self {
            config: raw.config,
            board: raw.board,
            current_player: raw.current_player,
            history: raw.history,
            winner: raw.winner,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let violations = violations
                .into_iter()
                .map(|violation| violation.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%violations, "Rejected deserialized game");
            GameStateError::InvariantsViolated { violations }
        })?;
        Ok(game)
    }
}

impl Game {
    /// The player who moves first in every new game.
    pub const FIRST_PLAYER: Mark = Mark::X;

    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Grid::new(config.size()),
            current_player: Self::FIRST_PLAYER,
            history: MoveHistory::new(),
            winner: None,
        }
    }

    /// Creates a new game from a board size and win condition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the pair is not a playable configuration.
    pub fn with_size(size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::new(size, win_condition)?))
    }

    /// Plays `cells` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    #[instrument]
    pub fn replay(config: GameConfig, cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for &cell in cells {
            game.try_choose(cell)?;
        }
        Ok(game)
    }

    /// Places the current player's mark on `cell`.
    ///
    /// On a win the turn does not pass; the winner stays the current player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already has a winner or a full board
    /// - [`MoveError::OutOfBounds`] if `cell` is not on the board
    /// - [`MoveError::CellOccupied`] if `cell` already holds a mark
    #[instrument(level = "trace", skip(self), fields(player = %self.current_player))]
    pub fn try_choose(&mut self, cell: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let prior = self
            .board
            .cell(cell)
            .ok_or(MoveError::OutOfBounds(cell))?
            .content();
        if prior.is_some() {
            return Err(MoveError::CellOccupied(cell));
        }

        let record = MoveRecord::new(cell, self.current_player, prior);
        action::apply(&mut self.board, &record);
        self.history.push(record);

        let placement =
            match rules::winner_through(&self.board, cell, self.config.win_condition()) {
                Some(winner) => {
                    self.winner = Some(winner);
                    Placement::Won(winner)
                }
                None => {
                    self.current_player = !self.current_player;
                    if self.board.is_full() {
                        Placement::Draw
                    } else {
                        Placement::Continue
                    }
                }
            };

        self.debug_check_invariants();
        Ok(placement)
    }

    /// Places the current player's mark on `cell`.
    ///
    /// Returns false, changing nothing, if the move is not legal.
    pub fn choose(&mut self, cell: usize) -> bool {
        self.try_choose(cell).is_ok()
    }

    /// Takes back the most recent move.
    ///
    /// The player whose move was undone is to move again. Returns false if
    /// there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop_undo() else {
            debug!("Nothing to undo");
            return false;
        };
        action::reverse(&mut self.board, &record);
        self.current_player = record.mark;
        self.refresh_winner();
        debug!(%record, "Undid move");

        self.debug_check_invariants();
        true
    }

    /// Replays the most recently undone move.
    ///
    /// Returns false if there is nothing to redo.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.pop_redo() else {
            debug!("Nothing to redo");
            return false;
        };
        action::apply(&mut self.board, &record);
        self.refresh_winner();
        self.current_player = if self.winner.is_some() {
            record.mark
        } else {
            !record.mark
        };
        debug!(%record, "Redid move");

        self.debug_check_invariants();
        true
    }

    /// Returns the game to its initial state, keeping its configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Grid::new(self.config.size());
        self.current_player = Self::FIRST_PLAYER;
        self.history.clear();
        self.winner = None;
    }

    /// Recomputes the winner from the board rather than trusting the cache.
    fn refresh_winner(&mut self) {
        self.winner = rules::winner(&self.board, self.config.win_condition());
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        let result = GameInvariants::check_all(self);
        if let Err(violations) = &result {
            tracing::warn!(?violations, "Game invariants violated");
        }
        debug_assert!(result.is_ok(), "Game invariants violated: {:?}", result);
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Grid {
        &mut self.board
    }

    /// Returns true if someone has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// The final outcome, or `None` while the game is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(winner) => Some(Outcome::Winner(winner)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Ids of the cells the current player may choose.
    ///
    /// Empty once the game is over.
    pub fn available_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// The winning run, ordered from the completing move when possible.
    pub fn winning_cells(&self) -> Option<Vec<Cell>> {
        self.winner?;
        rules::winning_cells(
            &self.board,
            self.config.win_condition(),
            self.last_move().map(|record| record.cell),
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the player to move (or the winner once the game is won).
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Cells per row and column.
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Run length needed to win.
    pub fn win_condition(&self) -> usize {
        self.config.win_condition()
    }

    /// Returns the game's configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the undo/redo history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The most recently applied move.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
