//! Adversarial search bot.
//!
//! Depth-limited minimax with alpha-beta pruning over cloned game states,
//! plus a static heuristic for positions beyond the search horizon and for
//! breaking ties between equally good moves.

pub mod heuristic;
mod search;

pub use heuristic::{move_utility, utility, HEURISTIC_LIMIT, WIN_SCORE};
pub use search::{SearchBot, SearchReport};
