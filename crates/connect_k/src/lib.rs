//! Connect-K - generalized tic-tac-toe on an N x N grid.
//!
//! Two players alternately place X and O marks; the first to line up K of
//! their marks in a row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Grid**: row-major board storage plus line extraction
//! - **Rules**: pure win and draw detection over boards and lines
//! - **Game**: turn order, rule enforcement and undo/redo via move records
//! - **Invariants**: properties checked after every state change in debug builds
//! - **Bot**: depth-limited minimax with alpha-beta pruning
//!
//! # Example
//!
//! ```
//! use connect_k::{BotConfig, Game, GameConfig, SearchBot};
//!
//! let mut game = Game::new(GameConfig::new(3, 3)?);
//! let mut bot = SearchBot::with_seed(BotConfig::new(9)?, 42);
//! while let Some(cell) = bot.optimal_move(&game) {
//!     game.choose(cell);
//! }
//! assert!(game.is_terminal());
//! # Ok::<(), connect_k::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod grid;
mod history;
mod types;

// Public modules
pub mod action;
pub mod bot;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use grid::{Grid, GridError};
pub use types::{Cell, Mark, Outcome, Slope};

// Crate-level exports - Moves and history
pub use action::{MoveError, MoveRecord, Placement};
pub use history::MoveHistory;

// Crate-level exports - Game engine
pub use config::{BotConfig, ConfigError, GameConfig};
pub use game::{Game, GameStateError};

// Crate-level exports - Search bot
pub use bot::{SearchBot, SearchReport};
