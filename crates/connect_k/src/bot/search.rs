//! Minimax search with alpha-beta pruning.

use super::heuristic::{move_utility, utility};
use super::super::{BotConfig, Game, Mark};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// The chosen cell id.
    pub cell: usize,
    /// Minimax score of the chosen cell, from X's point of view.
    pub score: i32,
    /// Number of positions generated during the search.
    pub nodes: u64,
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cell {} (score {}, {} nodes)",
            self.cell, self.score, self.nodes
        )
    }
}

/// Picks moves for whichever player is to move.
///
/// X maximizes the score and O minimizes it. Every branch works on its own
/// clone of the game, so siblings never see each other's moves.
#[derive(Debug, Clone)]
pub struct SearchBot {
    config: BotConfig,
    rng: SmallRng,
}

impl SearchBot {
    /// Creates a bot with an entropy-seeded tie-breaker.
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a bot whose tie-breaking is reproducible.
    pub fn with_seed(config: BotConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the bot's configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The cell the current player should choose, or `None` if the game is over.
    pub fn optimal_move(&mut self, game: &Game) -> Option<usize> {
        self.search(game).map(|report| report.cell)
    }

    /// Searches the position and reports the chosen move.
    ///
    /// When every candidate scores the same, candidates are re-ranked by the
    /// static heuristic; remaining ties are broken uniformly at random.
    #[instrument(
        skip(self, game),
        fields(player = %game.current_player(), depth = self.config.max_depth())
    )]
    pub fn search(&mut self, game: &Game) -> Option<SearchReport> {
        if game.is_terminal() {
            debug!("Game is over, no move to search");
            return None;
        }
        let maximizing = game.current_player() == Mark::X;
        let mut nodes = 0;
        let mut scored: Vec<(usize, i32)> = Vec::new();
        let mut best: Option<i32> = None;

        for cell in self.candidates(game) {
            let mut child = game.clone();
            if !child.choose(cell) {
                continue;
            }
            nodes += 1;

            // Widen the window by one past the best score so far: moves
            // tying the best get exact scores, worse ones come back strictly
            // worse.
            let (alpha, beta) = match best {
                Some(best) if maximizing => (best - 1, i32::MAX),
                Some(best) => (i32::MIN, best + 1),
                None => (i32::MIN, i32::MAX),
            };
            let score = self.minimax(&child, 1, alpha, beta, &mut nodes);
            best = Some(match best {
                Some(best) if maximizing => best.max(score),
                Some(best) => best.min(score),
                None => score,
            });
            scored.push((cell, score));
        }
        let best = best?;

        let all_tied = scored.iter().all(|&(_, score)| score == best);
        let cell = if all_tied && scored.len() > 1 {
            self.rank_by_heuristic(game, &scored, maximizing)?
        } else {
            let ties: Vec<usize> = scored
                .iter()
                .filter(|&&(_, score)| score == best)
                .map(|&(cell, _)| cell)
                .collect();
            *ties.choose(&mut self.rng)?
        };

        let report = SearchReport {
            cell,
            score: best,
            nodes,
        };
        info!(%report, "Selected move");
        Some(report)
    }

    /// Best candidate by static score alone.
    ///
    /// Shuffling before the stable sort puts equal scores in random order.
    fn rank_by_heuristic(
        &mut self,
        game: &Game,
        scored: &[(usize, i32)],
        maximizing: bool,
    ) -> Option<usize> {
        let mut ranked: Vec<(usize, i32)> = scored
            .iter()
            .map(|&(cell, _)| {
                let mut child = game.clone();
                child.choose(cell);
                (cell, move_utility(&child))
            })
            .collect();
        ranked.shuffle(&mut self.rng);
        if maximizing {
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            ranked.sort_by_key(|&(_, score)| score);
        }
        debug!(?ranked, "All candidates tied, ranked by heuristic");
        ranked.first().map(|&(cell, _)| cell)
    }

    /// Fail-soft alpha-beta value of `game`, `depth` plies below the root.
    fn minimax(
        &self,
        game: &Game,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        if game.is_terminal() {
            return utility(game, depth);
        }
        if depth >= self.config.max_depth() {
            return move_utility(game);
        }

        let maximizing = game.current_player() == Mark::X;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in self.candidates(game) {
            let mut child = game.clone();
            if !child.choose(cell) {
                continue;
            }
            *nodes += 1;
            let value = self.minimax(&child, depth + 1, alpha, beta, nodes);

            if maximizing {
                best = best.max(value);
                if beta <= best {
                    break;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                if alpha >= best {
                    break;
                }
                beta = beta.min(best);
            }
        }
        best
    }

    /// Cells worth searching in `game`.
    ///
    /// On boards at least `adjacent_only_from` wide, only empty cells
    /// touching an existing mark are considered once play has started.
    fn candidates(&self, game: &Game) -> Vec<usize> {
        let board = game.board();
        let moves = game.available_moves();
        if board.size() < self.config.adjacent_only_from() || board.is_empty() {
            return moves;
        }

        let near: Vec<usize> = moves
            .iter()
            .copied()
            .filter(|&cell| {
                board
                    .adjacent(cell)
                    .into_iter()
                    .any(|neighbour| !board.is_vacant(neighbour))
            })
            .collect();
        if near.is_empty() { moves } else { near }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    fn full_depth() -> BotConfig {
        BotConfig::new(9).unwrap()
    }

    #[test]
    fn test_terminal_game_has_no_move() {
        let game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4, 2]).unwrap();
        let mut bot = SearchBot::with_seed(full_depth(), 1);
        assert_eq!(bot.optimal_move(&game), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X: 0 1 . / O: 3 4 . -> X completes the top row.
        let game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4]).unwrap();
        let mut bot = SearchBot::with_seed(full_depth(), 7);
        let report = bot.search(&game).unwrap();
        assert_eq!(report.cell, 2);
        assert_eq!(report.score, super::super::WIN_SCORE - 1);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens 0-1-2; O must take 2.
        let game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 4, 1]).unwrap();
        let mut bot = SearchBot::with_seed(full_depth(), 3);
        assert_eq!(bot.optimal_move(&game), Some(2));
    }

    #[test]
    fn test_opening_prefers_center() {
        let game = Game::default();
        for seed in 0..4 {
            let mut bot = SearchBot::with_seed(full_depth(), seed);
            assert_eq!(bot.optimal_move(&game), Some(4));
        }
    }

    #[test]
    fn test_candidates_restricted_to_neighbours() {
        let config = BotConfig::new(1).unwrap().with_adjacent_only_from(5);
        let bot = SearchBot::with_seed(config, 0);
        let game = Game::replay(GameConfig::new(5, 4).unwrap(), &[0]).unwrap();
        assert_eq!(bot.candidates(&game), vec![1, 5, 6]);

        let empty = Game::new(GameConfig::new(5, 4).unwrap());
        assert_eq!(bot.candidates(&empty).len(), 25);
    }

    #[test]
    fn test_search_counts_nodes() {
        let game = Game::replay(GameConfig::TIC_TAC_TOE, &[4]).unwrap();
        let mut bot = SearchBot::with_seed(BotConfig::new(2).unwrap(), 0);
        let report = bot.search(&game).unwrap();
        assert!(report.nodes >= 8);
        assert!(game.board().is_vacant(report.cell));
    }
}
