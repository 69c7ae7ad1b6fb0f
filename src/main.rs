use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ttt_solver::cli::{self, PlayConfig};
use ttt_solver::{Board, Player};

#[derive(Parser)]
#[command(name = "ttt-solver")]
#[command(version, about = "Play or solve tic-tac-toe with exhaustive minimax", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine on the terminal
    Play {
        /// Side you play, X moves first
        #[arg(long, default_value = "x")]
        human: Player,
    },

    /// Print the optimal move for a position, e.g. "XO./.X./..."
    Solve {
        board: Board,

        /// Also print the value of every legal move
        #[arg(long)]
        scores: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match args.command {
        Commands::Play { human } => {
            let config = PlayConfig { human };
            cli::run_game(&config, io::stdin().lock(), io::stdout()).map(|_| ())
        }
        Commands::Solve { board, scores } => cli::solve(&board, scores, io::stdout()),
    }
}
