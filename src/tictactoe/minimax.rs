//! Minimax search over the full game tree
//!
//! [`minimax`] is the plain exhaustive search: two mutually recursive
//! functions, each returning its extremal `(value, move)` pair. [`Solver`]
//! computes the same values with a transposition table and also reports
//! every move that reaches the optimum.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::board::{Board, Move, Player};

/// Optimal move for the player to move, or `None` on a terminal board.
///
/// X maximizes utility and O minimizes it. Among equally good moves the
/// first one in row-major order wins.
pub fn minimax(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }

    match board.player() {
        Player::X => max_value(board).1,
        Player::O => min_value(board).1,
    }
}

/// Game-theoretic value of a board under optimal play by both sides
pub fn minimax_value(board: &Board) -> i32 {
    match board.player() {
        Player::X => max_value(board).0,
        Player::O => min_value(board).0,
    }
}

fn max_value(board: &Board) -> (i32, Option<Move>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = (i32::MIN, None);
    for mv in board.legal_moves() {
        let value = min_value(&child(board, mv)).0;
        if value > best.0 {
            best = (value, Some(mv));
        }
    }
    best
}

fn min_value(board: &Board) -> (i32, Option<Move>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = (i32::MAX, None);
    for mv in board.legal_moves() {
        let value = max_value(&child(board, mv)).0;
        if value < best.0 {
            best = (value, Some(mv));
        }
    }
    best
}

/// Apply a move produced by `legal_moves`.
fn child(board: &Board, mv: Move) -> Board {
    match board.apply_move(mv) {
        Ok(next) => next,
        Err(err) => unreachable!("legal_moves produced an illegal move {mv}: {err}"),
    }
}

/// Minimax value of a position and every move achieving it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimalPolicy {
    pub value: i32,
    /// Optimal moves in row-major order; empty for terminal boards
    pub optimal_moves: Vec<Move>,
}

/// Counters collected while solving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions expanded (cache misses)
    pub nodes: usize,
    /// Transposition table hits
    pub cache_hits: usize,
}

/// Memoizing minimax solver.
///
/// Results are identical to [`minimax`]: the transposition table only
/// removes repeated work for positions reached by different move orders.
#[derive(Debug, Default)]
pub struct Solver {
    memo: HashMap<Board, OptimalPolicy>,
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve a position, reusing anything already cached
    pub fn solve(&mut self, board: &Board) -> OptimalPolicy {
        let before = self.stats;
        let policy = self.solve_inner(board);
        debug!(
            board = %board.encode(),
            value = policy.value,
            nodes = self.stats.nodes - before.nodes,
            cache_hits = self.stats.cache_hits - before.cache_hits,
            "solved position"
        );
        policy
    }

    /// First optimal move in row-major order, or `None` on a terminal board
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.solve(board).optimal_moves.first().copied()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of cached positions
    pub fn cached_positions(&self) -> usize {
        self.memo.len()
    }

    fn solve_inner(&mut self, board: &Board) -> OptimalPolicy {
        if let Some(policy) = self.memo.get(board) {
            self.stats.cache_hits += 1;
            return policy.clone();
        }
        self.stats.nodes += 1;

        if board.is_terminal() {
            let policy = OptimalPolicy {
                value: board.utility(),
                optimal_moves: Vec::new(),
            };
            self.memo.insert(*board, policy.clone());
            return policy;
        }

        let mover = board.player();
        let mut best_value = match mover {
            Player::X => i32::MIN,
            Player::O => i32::MAX,
        };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in board.legal_moves() {
            let child_value = self.solve_inner(&child(board, mv)).value;

            let improves = match mover {
                Player::X => child_value > best_value,
                Player::O => child_value < best_value,
            };
            if improves {
                best_value = child_value;
                best_moves.clear();
                best_moves.push(mv);
            } else if child_value == best_value {
                best_moves.push(mv);
            }
        }

        let policy = OptimalPolicy {
            value: best_value,
            optimal_moves: best_moves,
        };
        self.memo.insert(*board, policy.clone());
        policy
    }
}
