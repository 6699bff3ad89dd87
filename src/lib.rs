//! Parlor Games library - a terminal suite of two-sided turn-based games.
//!
//! The game logic lives in the `parlor_*` crates; this crate adds what
//! turns them into an application.
//!
//! # Architecture
//!
//! - **Config**: `parlor.toml` plus environment and command-line overrides
//! - **Scores**: flat tab-separated score files, one per game
//! - **Runner**: match summaries and headless bot-vs-bot simulation
//! - **Lobby / TUI**: login, menu, role selection and the match table
//!
//! # Example
//!
//! ```no_run
//! use parlor_engine::Tier;
//! use parlor_games::{GameKind, ScoreStore, SimulationPlan, simulate};
//!
//! # fn example() -> Result<(), parlor_engine::EngineError> {
//! let plan = SimulationPlan {
//!     game: GameKind::Nim,
//!     first: Tier::Hard,
//!     second: Tier::Easy,
//!     matches: 100,
//!     seed: Some(7),
//!     record: false,
//! };
//! let tally = simulate(plan, &ScoreStore::new("scores"))?;
//! println!("{}", tally);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game_kind;
mod runner;
mod scores;

// Public modules
pub mod lobby;
pub mod logging;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ParlorConfig, SCORES_DIR_ENV};

// Crate-level exports - Games
pub use game_kind::{GameKind, RankRule};

// Crate-level exports - Match glue
pub use runner::{MatchSummary, Recap, SimulationPlan, Tally, finish, simulate};

// Crate-level exports - Scores
pub use scores::{FileScoreSink, Ranking, ScoreError, ScoreLine, ScoreStore};
