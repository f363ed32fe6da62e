//! Tictactoe command - solve positions and replay optimal games

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    cli::output::{join_or_dash, print_board, print_kv, print_section},
    tictactoe::{Board, GameOutcome, Solver, self_play},
};

#[derive(Parser, Debug)]
#[command(about = "Solve Tic-Tac-Toe positions with minimax")]
pub struct TictactoeArgs {
    #[command(subcommand)]
    pub command: TictactoeCommand,
}

#[derive(Subcommand, Debug)]
pub enum TictactoeCommand {
    /// Show the minimax value and optimal moves of a position
    Analyze {
        /// Board as 9 cells in row-major order, e.g. "XX.OO...." (default: empty)
        #[arg(long)]
        board: Option<String>,
    },

    /// Play optimal moves for both sides until the game ends
    SelfPlay {
        /// Starting board (default: empty)
        #[arg(long)]
        board: Option<String>,
    },
}

pub fn execute(args: TictactoeArgs) -> Result<()> {
    match args.command {
        TictactoeCommand::Analyze { board } => analyze(&parse_board(board)?),
        TictactoeCommand::SelfPlay { board } => replay(parse_board(board)?),
    }
}

fn parse_board(board: Option<String>) -> Result<Board> {
    match board {
        Some(s) => Board::from_string(&s).with_context(|| format!("parsing board '{s}'")),
        None => Ok(Board::new()),
    }
}

fn analyze(board: &Board) -> Result<()> {
    let mut solver = Solver::new();
    let policy = solver.solve(board);
    let stats = solver.stats();
    info!(nodes = stats.nodes, cache_hits = stats.cache_hits, "search finished");

    print_section("Position");
    print_board(board);
    print_kv("To move", &board.player().to_string());
    print_kv("Terminal", &board.is_terminal().to_string());
    print_kv(
        "Winner",
        &board
            .winner()
            .map_or_else(|| "-".to_string(), |p| p.to_string()),
    );

    print_section("Minimax");
    print_kv("Value", &policy.value.to_string());
    print_kv(
        "Best move",
        &policy
            .optimal_moves
            .first()
            .map_or_else(|| "-".to_string(), ToString::to_string),
    );
    print_kv("Optimal moves", &join_or_dash(&policy.optimal_moves));
    print_kv("Positions searched", &stats.nodes.to_string());
    Ok(())
}

fn replay(start: Board) -> Result<()> {
    let game = self_play(start)?;

    print_section("Self-play");
    print_board(&game.initial);
    for (played, board) in game.moves.iter().zip(game.state_sequence().iter().skip(1)) {
        println!("\n  {} plays {}", played.player, played.mv);
        print_board(board);
    }

    let outcome = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Outcome", &outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_board_defaults_to_empty() {
        assert_eq!(parse_board(None).unwrap(), Board::new());
    }

    #[test]
    fn invalid_board_is_reported() {
        let err = parse_board(Some("XXXX.....".to_string())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid piece counts"));
    }

    #[test]
    fn subcommands_parse() {
        let args = TictactoeArgs::parse_from(["tictactoe", "analyze", "--board", "XX.OO...."]);
        assert!(matches!(
            args.command,
            TictactoeCommand::Analyze { board: Some(_) }
        ));
        let args = TictactoeArgs::parse_from(["tictactoe", "self-play"]);
        assert!(matches!(args.command, TictactoeCommand::SelfPlay { board: None }));
    }
}
