//! Minimax search properties

mod common;

use common::board;
use reckon::tictactoe::{
    Board, Move, Player, Solver, initial_state, minimax, minimax_value, self_play,
};

#[test]
fn optimal_play_from_empty_board_is_a_draw() {
    let start = initial_state();
    let best = minimax(&start).expect("empty board is not terminal");
    let child = start.apply_move(best).unwrap();
    assert_eq!(minimax_value(&child), 0);
    assert_eq!(minimax_value(&start), 0);
}

#[test]
fn completes_own_winning_line() {
    // XX.
    // OO.
    // ...
    let state = board("XX. OO. ...");
    assert_eq!(state.player(), Player::X);

    let best = minimax(&state).unwrap();
    assert_eq!(best, Move::new(0, 2));
    assert_eq!(state.apply_move(best).unwrap().winner(), Some(Player::X));
}

#[test]
fn terminal_positions_return_none() {
    assert_eq!(minimax(&board("XXX OO. ...")), None);
    assert_eq!(minimax(&board("XOX XOO OXX")), None);
}

#[test]
fn search_never_mutates_the_input() {
    let state = board("X.. .O. ...");
    let snapshot = state;
    let _ = minimax(&state);
    assert_eq!(state, snapshot);
}

#[test]
fn chosen_move_achieves_position_value() {
    let positions = ["X........", "X...O....", "XO.......", "X.O.X....", "XX.OO.X.."];
    for s in positions {
        let state = board(s);
        let best = minimax(&state).unwrap();
        let value = minimax_value(&state);
        assert_eq!(
            minimax_value(&state.apply_move(best).unwrap()),
            value,
            "move {best} on {s}"
        );
    }
}

#[test]
fn every_opening_move_for_x_draws_or_better() {
    let start = Board::new();
    let mut solver = Solver::new();
    let policy = solver.solve(&start);

    assert_eq!(policy.value, 0);
    assert_eq!(policy.optimal_moves.len(), 9, "no opening move loses for X");
    assert_eq!(solver.best_move(&start), minimax(&start));
}

#[test]
fn corner_opening_must_be_answered_in_the_center() {
    let state = board("X........");
    let mut solver = Solver::new();
    let policy = solver.solve(&state);
    assert_eq!(policy.value, 0);
    assert_eq!(policy.optimal_moves, vec![Move::new(1, 1)]);
}

#[test]
fn perfect_self_play_never_produces_a_winner() {
    for opening in initial_state().legal_moves() {
        let start = initial_state().apply_move(opening).unwrap();
        let game = self_play(start).unwrap();
        assert!(game.current_state().is_draw(), "opening {opening}");
    }
}
