//! Command-line interface for connect_k.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Connect-K - generalized tic-tac-toe with a minimax bot
#[derive(Parser, Debug)]
#[command(name = "connect_k")]
#[command(about = "Headless driver for the connect-K engine and search bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the bot play both sides until the game ends
    Selfplay {
        /// Game and bot settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Replay a position and print the bot's move for the side to play
    Suggest {
        /// Game and bot settings
        #[command(flatten)]
        game: GameArgs,

        /// Cell ids played so far, in order, starting with X
        cells: Vec<usize>,
    },
}

/// Overrides for the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Cells per row and column
    #[arg(long)]
    pub size: Option<usize>,

    /// Run length needed to win
    #[arg(long)]
    pub win: Option<usize>,

    /// Search depth in plies
    #[arg(long)]
    pub depth: Option<usize>,

    /// Seed for reproducible tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
}
