//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod validation;

pub use board::{Board, Cell, Move, Player};
pub use game::{Game, GameOutcome, PlayedMove, self_play};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{OptimalPolicy, SearchStats, Solver, minimax, minimax_value};

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}
