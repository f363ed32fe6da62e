//! reckon CLI
//!
//! - `questions`: answer a question from a directory of `.txt` documents
//! - `tictactoe`: solve positions and replay optimal games

use anyhow::Result;
use clap::{Parser, Subcommand};
use reckon::{
    cli::commands::{questions, tictactoe},
    config::CommonConfig,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reckon")]
#[command(version, about = "TF-IDF question answering and perfect-play Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question from a corpus directory
    Questions(questions::QuestionsArgs),

    /// Solve Tic-Tac-Toe positions
    Tictactoe(tictactoe::TictactoeArgs),
}

fn init_tracing(common: &CommonConfig) -> Result<()> {
    let default_level = if common.verbose { "reckon=debug" } else { "reckon=warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&CommonConfig {
        verbose: cli.verbose,
    })?;

    match cli.command {
        Commands::Questions(args) => questions::execute(args),
        Commands::Tictactoe(args) => tictactoe::execute(args),
    }
}
