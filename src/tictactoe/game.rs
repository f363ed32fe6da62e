//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Move, Player},
    minimax::Solver,
};

/// A move in the game together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<PlayedMove>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game starting from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: outcome_of(&initial),
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once an outcome is
    /// recorded, or the error from [`Board::apply_move`]. A rejected move
    /// leaves the game unchanged.
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state();
        let next = current.apply_move(mv)?;

        self.moves.push(PlayedMove {
            mv,
            player: current.player(),
        });
        self.outcome = outcome_of(&next);

        Ok(())
    }

    /// Get current board state
    pub fn current_state(&self) -> Board {
        self.state_sequence()
            .last()
            .copied()
            .unwrap_or(self.initial)
    }

    /// Every board from the initial position to the current one
    pub fn state_sequence(&self) -> Vec<Board> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for played in &self.moves {
            // Moves were checked by `play`, so the replay cannot fail
            if let Ok(next) = state.apply_move(played.mv) {
                state = next;
                states.push(state);
            }
        }
        states
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_of(board: &Board) -> Option<GameOutcome> {
    if !board.is_terminal() {
        return None;
    }
    Some(match board.winner() {
        Some(winner) => GameOutcome::Win(winner),
        None => GameOutcome::Draw,
    })
}

/// Play optimal moves for both sides until the game ends
pub fn self_play(start: Board) -> crate::Result<Game> {
    let mut solver = Solver::new();
    let mut game = Game::from_board(start);

    while game.outcome.is_none() {
        let board = game.current_state();
        let Some(mv) = solver.best_move(&board) else {
            break;
        };
        game.play(mv)?;
    }

    Ok(game)
}
