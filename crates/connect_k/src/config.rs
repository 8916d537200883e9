//! Validated game and bot configuration.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Board size and run length needed to win.
///
/// Only constructible through [`GameConfig::new`], which rejects boards
/// without cells and win conditions that cannot fit on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: usize,
    win_condition: usize,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: usize,
    win_condition: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.win_condition)
    }
}

impl GameConfig {
    /// Classic 3x3 tic-tac-toe.
    pub const TIC_TAC_TOE: GameConfig = GameConfig {
        size: 3,
        win_condition: 3,
    };

    /// Creates a configuration, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is zero, `win_condition` is zero, or
    /// `win_condition` exceeds `size`.
    #[instrument]
    pub fn new(size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        let error = if size == 0 {
            Some(ConfigError::EmptyBoard)
        } else if win_condition == 0 {
            Some(ConfigError::ZeroWinCondition)
        } else if win_condition > size {
            Some(ConfigError::WinConditionTooLarge {
                win_condition,
                size,
            })
        } else {
            None
        };

        match error {
            Some(error) => {
                warn!(%error, "Rejected game configuration");
                Err(error)
            }
            None => Ok(Self {
                size,
                win_condition,
            }),
        }
    }

    /// Cells per row and column.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run length needed to win.
    pub fn win_condition(&self) -> usize {
        self.win_condition
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::TIC_TAC_TOE
    }
}

/// Search bot settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBotConfig")]
pub struct BotConfig {
    max_depth: usize,
    adjacent_only_from: usize,
}

#[derive(Deserialize)]
struct RawBotConfig {
    max_depth: usize,
    #[serde(default = "default_adjacent_only_from")]
    adjacent_only_from: usize,
}

fn default_adjacent_only_from() -> usize {
    BotConfig::DEFAULT_ADJACENT_ONLY_FROM
}

impl TryFrom<RawBotConfig> for BotConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBotConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.max_depth)?.with_adjacent_only_from(raw.adjacent_only_from))
    }
}

impl BotConfig {
    /// Default search depth in plies.
    pub const DEFAULT_MAX_DEPTH: usize = 4;

    /// Default board size from which candidate moves are restricted to
    /// cells next to existing marks.
    pub const DEFAULT_ADJACENT_ONLY_FROM: usize = 6;

    /// Creates bot settings searching `max_depth` plies ahead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSearchDepth`] if `max_depth` is zero.
    #[instrument]
    pub fn new(max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            warn!("Rejected zero search depth");
            return Err(ConfigError::ZeroSearchDepth);
        }
        Ok(Self {
            max_depth,
            adjacent_only_from: Self::DEFAULT_ADJACENT_ONLY_FROM,
        })
    }

    /// Sets the board size from which only cells adjacent to a mark are searched.
    pub fn with_adjacent_only_from(mut self, size: usize) -> Self {
        self.adjacent_only_from = size;
        self
    }

    /// Maximum search depth in plies.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Board size from which candidate moves are restricted to neighbours.
    pub fn adjacent_only_from(&self) -> usize {
        self.adjacent_only_from
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            adjacent_only_from: Self::DEFAULT_ADJACENT_ONLY_FROM,
        }
    }
}

/// Invalid game or bot configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The board would have no cells.
    #[display("Board size must be at least 1")]
    EmptyBoard,

    /// A run of zero cells cannot decide a game.
    #[display("Win condition must be at least 1")]
    ZeroWinCondition,

    /// No run of the requested length fits on the board.
    #[display("Win condition {} exceeds board size {}", win_condition, size)]
    WinConditionTooLarge {
        /// Requested run length.
        win_condition: usize,
        /// Board size.
        size: usize,
    },

    /// The bot must look at least one ply ahead.
    #[display("Search depth must be at least 1")]
    ZeroSearchDepth,
}
