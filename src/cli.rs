//! Command-line interface for parlor_games.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parlor_engine::Tier;
use parlor_games::GameKind;

/// Parlor Games - matchsticks, tic-tac-toe, connect-four and higher/lower
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Turn-based terminal games for two players or bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to parlor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the score files
    #[arg(long, global = true)]
    pub scores_dir: Option<PathBuf>,

    /// Subcommand to run; plays interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Pit two bots against each other without a terminal
    Simulate {
        /// Game to play (guess, nim, tictactoe, connect-four)
        #[arg(long)]
        game: GameKind,

        /// Tier of side A (easy, medium, hard)
        #[arg(long, default_value = "hard")]
        first: Tier,

        /// Tier of side B (easy, medium, hard)
        #[arg(long, default_value = "hard")]
        second: Tier,

        /// Number of matches
        #[arg(short, long, default_value = "100")]
        matches: u32,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Send results to the score store (bots are still left out)
        #[arg(long)]
        record: bool,
    },

    /// Print the scoreboards
    Scores {
        /// Only this game
        #[arg(long)]
        game: Option<GameKind>,
    },
}
