//! Position scoring for the search bot.
//!
//! Scores are always from X's point of view: positive favours X, negative
//! favours O.

use super::super::rules;
use super::super::{Game, Mark, Outcome};

/// Magnitude of a won position before the ply penalty.
pub const WIN_SCORE: i32 = 10_000;

/// Static scores stay strictly inside this bound so they never compete
/// with a real win.
pub const HEURISTIC_LIMIT: i32 = WIN_SCORE / 2 - 1;

/// Score of a finished position reached `plies` moves below the root.
///
/// Wins are worth less the longer they take, so the bot prefers quick wins
/// and slow losses. Draws and unfinished games score zero.
pub fn utility(game: &Game, plies: usize) -> i32 {
    let decay = i32::try_from(plies).unwrap_or(WIN_SCORE).min(WIN_SCORE - 1);
    match game.outcome() {
        Some(Outcome::Winner(Mark::X)) => WIN_SCORE - decay,
        Some(Outcome::Winner(Mark::O)) => -(WIN_SCORE - decay),
        Some(Outcome::Draw) | None => 0,
    }
}

/// Static score of the most recent move.
///
/// Looks only at the lines through the last placed mark that are long
/// enough to hold a win. Lines the mover owns outright, lines where the move
/// blocks the opponent, runs one short of the win condition and outright
/// wins all add to the score. The total is signed toward the mover and
/// clamped to [`HEURISTIC_LIMIT`].
pub fn move_utility(game: &Game) -> i32 {
    let Some(last) = game.last_move() else {
        return 0;
    };
    let mover = last.mark;
    let opponent = !mover;
    let near_win = game.win_condition().saturating_sub(1).max(1);

    let mut score: i32 = 0;
    let lanes = game.board().groups(last.cell);
    for lane in lanes.iter().filter(|lane| lane.len() >= game.win_condition()) {
        let count = |mark: Mark| lane.iter().filter(|cell| cell.content() == Some(mark)).count();
        let mine = count(mover);
        let theirs = count(opponent);
        let occupied = mine + theirs;

        score += match occupied {
            1 => 1,
            2 => 10,
            _ => 100,
        };
        // Either the lane is all ours, or this move is the only thing in
        // the way of the opponent.
        if mine == occupied || theirs + 1 == occupied {
            score += 100 * occupied as i32;
        }
        if theirs >= near_win {
            score += 500;
        }
        let own_run = rules::runs(lane)
            .into_iter()
            .find(|run| run.iter().any(|cell| cell.id() == last.cell))
            .map_or(0, |run| run.len());
        if own_run >= near_win {
            score += 500;
        }
    }
    if game.winner() == Some(mover) {
        score += 1_000;
    }

    let score = score.min(HEURISTIC_LIMIT);
    match mover {
        Mark::X => score,
        Mark::O => -score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    #[test]
    fn test_utility_signs_and_decay() {
        let x_wins = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(utility(&x_wins, 1), WIN_SCORE - 1);
        assert!(utility(&x_wins, 1) > utility(&x_wins, 3));

        let o_wins = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4, 8, 5]).unwrap();
        assert_eq!(utility(&o_wins, 2), -(WIN_SCORE - 2));

        assert_eq!(utility(&Game::default(), 4), 0);
    }

    #[test]
    fn test_move_utility_empty_history() {
        assert_eq!(move_utility(&Game::default()), 0);
    }

    #[test]
    fn test_move_utility_prefers_center_opening() {
        let center = Game::replay(GameConfig::TIC_TAC_TOE, &[4]).unwrap();
        let corner = Game::replay(GameConfig::TIC_TAC_TOE, &[0]).unwrap();
        let edge = Game::replay(GameConfig::TIC_TAC_TOE, &[1]).unwrap();
        assert!(move_utility(&center) > move_utility(&corner));
        assert!(move_utility(&corner) > move_utility(&edge));
    }

    #[test]
    fn test_move_utility_sign_follows_mover() {
        let game = Game::replay(GameConfig::TIC_TAC_TOE, &[4, 0]).unwrap();
        assert!(move_utility(&game) < 0);
    }

    #[test]
    fn test_move_utility_rewards_blocking() {
        // X threatens the top row; O blocking at 3 beats O elsewhere.
        let block = Game::replay(GameConfig::new(5, 4).unwrap(), &[0, 12, 1, 20, 2, 3]).unwrap();
        let elsewhere = Game::replay(GameConfig::new(5, 4).unwrap(), &[0, 12, 1, 20, 2, 24]).unwrap();
        assert!(move_utility(&block) < move_utility(&elsewhere));
    }

    #[test]
    fn test_move_utility_stays_below_win_scores() {
        let game = Game::replay(
            GameConfig::new(9, 9).unwrap(),
            &[40, 0, 41, 8, 39, 72, 42, 80, 38, 1],
        )
        .unwrap();
        assert!(move_utility(&game).abs() <= HEURISTIC_LIMIT);
    }
}
