//! Tests for the game engine: rules, turn order and undo/redo.

use connect_k::invariants::{GameInvariants, InvariantSet};
use connect_k::{rules, Game, GameConfig, Grid, Mark, MoveError, Outcome, Placement};

fn five_by_five() -> GameConfig {
    GameConfig::new(5, 4).unwrap()
}

fn board_with(size: usize, cells: &[usize], mark: Mark) -> Grid {
    let mut grid = Grid::new(size);
    for &cell in cells {
        grid.set_content(cell, Some(mark));
    }
    grid
}

#[test]
fn test_choose_then_undo_restores_state() {
    let mut game = Game::replay(five_by_five(), &[12, 0, 7]).unwrap();
    let before = game.clone();

    assert!(game.choose(13));
    assert!(game.undo());

    assert_eq!(game.board(), before.board());
    assert_eq!(game.current_player(), before.current_player());
    assert_eq!(game.winner(), before.winner());
    assert_eq!(game.history().moves(), before.history().moves());
    assert_eq!(game.history().undone().len(), 1);
    assert_eq!(game.history().undone()[0].cell, 13);
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut game = Game::replay(five_by_five(), &[12, 0, 7, 3]).unwrap();
    let before = game.clone();

    assert!(game.undo());
    assert!(game.undo());
    assert!(game.redo());
    assert!(game.redo());
    assert_eq!(game, before);
    assert!(!game.redo());
}

#[test]
fn test_new_move_invalidates_redo_branch() {
    let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 4]).unwrap();
    assert!(game.undo());
    assert!(game.history().can_redo());

    assert!(game.choose(8));
    assert!(!game.history().can_redo());
    assert!(!game.redo());
    assert_eq!(game.board().content(8), Some(Mark::O));
    assert_eq!(game.board().content(4), None);
}

#[test]
fn test_undo_on_fresh_game_does_nothing() {
    let mut game = Game::default();
    assert!(!game.undo());
    assert!(!game.redo());
    assert_eq!(game, Game::default());
}

#[test]
fn test_three_by_three_row_win() {
    let game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Mark::X)));
    assert!(game.is_terminal());
}

#[test]
fn test_four_in_a_row_wins_in_every_direction() {
    let directions: [(&str, [usize; 4]); 4] = [
        ("row", [0, 1, 2, 3]),
        ("column", [1, 6, 11, 16]),
        ("positive diagonal", [6, 12, 18, 24]),
        ("negative diagonal", [4, 8, 12, 16]),
    ];
    for (name, cells) in directions {
        let board = board_with(5, &cells, Mark::O);
        assert_eq!(rules::winner(&board, 4), Some(Mark::O), "{name}");
        for cell in cells {
            assert_eq!(rules::winner_through(&board, cell, 4), Some(Mark::O), "{name}");
        }

        let short = board_with(5, &cells[..3], Mark::O);
        assert_eq!(rules::winner(&short, 4), None, "{name} with three marks");
    }
}

#[test]
fn test_game_detects_diagonal_win() {
    // X on the negative diagonal 4-8-12-16, O scattered on the left.
    let mut game = Game::replay(five_by_five(), &[4, 0, 8, 5, 12, 10]).unwrap();
    assert_eq!(game.try_choose(16), Ok(Placement::Won(Mark::X)));
    let ids: Vec<_> = game
        .winning_cells()
        .unwrap()
        .iter()
        .map(|cell| cell.id())
        .collect();
    assert_eq!(ids, vec![16, 12, 8, 4]);
}

#[test]
fn test_win_through_undo_and_redo() {
    let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[4, 0, 2, 1, 6]).unwrap();
    assert_eq!(game.winner(), Some(Mark::X));

    game.undo();
    assert_eq!(game.winner(), None);
    assert!(!game.is_terminal());

    game.redo();
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_terminal_game_rejects_moves() {
    let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 3, 1, 4, 2]).unwrap();
    let before = game.clone();
    for cell in game.board().empty_cells().collect::<Vec<_>>() {
        assert_eq!(game.try_choose(cell), Err(MoveError::GameOver));
    }
    assert_eq!(game, before);
    assert!(game.available_moves().is_empty());
}

#[test]
fn test_full_board_without_winner_is_a_tie() {
    // X O X
    // X O O
    // O X X
    let game = Game::replay(GameConfig::TIC_TAC_TOE, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(game.winner(), None);
    assert!(game.board().is_full());
    assert!(rules::is_draw(game.board(), 3));
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_one_by_one_board_is_won_immediately() {
    let mut game = Game::with_size(1, 1).unwrap();
    assert_eq!(game.try_choose(0), Ok(Placement::Won(Mark::X)));
    assert!(game.is_terminal());
}

#[test]
fn test_replay_reports_first_illegal_move() {
    assert_eq!(
        Game::replay(GameConfig::TIC_TAC_TOE, &[4, 4]),
        Err(MoveError::CellOccupied(4))
    );
    assert_eq!(
        Game::replay(GameConfig::TIC_TAC_TOE, &[9]),
        Err(MoveError::OutOfBounds(9))
    );
}

#[test]
fn test_invariants_hold_through_play() {
    let mut game = Game::new(five_by_five());
    for cell in [12, 0, 13, 24, 11, 4, 14] {
        game.choose(cell);
        assert!(GameInvariants::check_all(&game).is_ok());
    }
    while game.undo() {
        assert!(GameInvariants::check_all(&game).is_ok());
    }
    while game.redo() {
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_game_serializes_board_and_history() {
    let game = Game::replay(GameConfig::TIC_TAC_TOE, &[4]).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["config"]["size"], 3);
    assert_eq!(json["board"]["cells"][4]["content"], "X");
    assert_eq!(json["history"]["moves"][0]["cell"], 4);
}
