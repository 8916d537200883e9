//! Headless play: bot-vs-bot games and single move suggestions.

use connect_k::{BotConfig, Game, GameConfig, MoveError, Outcome, SearchBot, SearchReport};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A finished bot-vs-bot game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlay {
    /// How the game ended.
    pub outcome: Outcome,
    /// Cell ids in the order they were played, starting with X.
    pub moves: Vec<usize>,
    /// The winning run, starting from the completing move.
    pub winning_cells: Vec<usize>,
}

impl std::fmt::Display for SelfPlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.moves.iter().map(usize::to_string).collect();
        write!(
            f,
            "{} after {} moves: {}",
            self.outcome,
            self.moves.len(),
            moves.join(" ")
        )
    }
}

fn new_bot(bot_config: BotConfig, seed: Option<u64>) -> SearchBot {
    match seed {
        Some(seed) => SearchBot::with_seed(bot_config, seed),
        None => SearchBot::new(bot_config),
    }
}

/// Plays one bot against itself from an empty board.
///
/// # Errors
///
/// Returns [`MoveError`] if the bot ever proposes an illegal move.
#[instrument(skip(bot_config))]
pub fn self_play(
    game_config: GameConfig,
    bot_config: BotConfig,
    seed: Option<u64>,
) -> Result<SelfPlay, MoveError> {
    let mut game = Game::new(game_config);
    let mut bot = new_bot(bot_config, seed);

    while let Some(cell) = bot.optimal_move(&game) {
        let player = game.current_player();
        game.try_choose(cell)?;
        debug!(%player, cell, "Bot played");
    }

    // The bot only passes on a finished game.
    let outcome = game.outcome().ok_or(MoveError::GameOver)?;
    let moves = game.history().moves().iter().map(|record| record.cell).collect();
    let winning_cells = game
        .winning_cells()
        .unwrap_or_default()
        .iter()
        .map(|cell| cell.id())
        .collect();

    info!(%outcome, "Self-play finished");
    Ok(SelfPlay {
        outcome,
        moves,
        winning_cells,
    })
}

/// Replays `cells` from an empty board and asks the bot for the next move.
///
/// Returns `None` when the replayed position is already finished.
///
/// # Errors
///
/// Returns [`MoveError`] if `cells` is not a legal sequence of moves.
#[instrument(skip(bot_config))]
pub fn suggest(
    game_config: GameConfig,
    bot_config: BotConfig,
    seed: Option<u64>,
    cells: &[usize],
) -> Result<Option<SearchReport>, MoveError> {
    let game = Game::replay(game_config, cells)?;
    Ok(new_bot(bot_config, seed).search(&game))
}
