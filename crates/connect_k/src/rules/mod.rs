//! Game rules for connect-K.
//!
//! Pure functions over boards and lines. Rules are kept apart from board
//! storage so the engine and the search bot share a single definition of
//! what a win is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{longest_run, runs, winner, winner_through, winning_cells, winning_path};
