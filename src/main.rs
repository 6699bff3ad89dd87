//! Parlor Games - unified CLI.
//!
//! Runs the terminal UI by default, or headless bot simulations and
//! scoreboard dumps.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use parlor_games::{GameKind, ParlorConfig, ScoreStore, SimulationPlan, logging, simulate, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ParlorConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.scores_dir {
        config = config.with_scores_dir(dir);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run(&config),
        Command::Simulate {
            game,
            first,
            second,
            matches,
            seed,
            record,
        } => run_simulation(
            &config,
            SimulationPlan {
                game,
                first,
                second,
                matches,
                seed,
                record,
            },
        ),
        Command::Scores { game } => print_scores(&config, game),
    }
}

/// Runs bot-vs-bot matches and prints the tally.
#[instrument(skip(config))]
fn run_simulation(config: &ParlorConfig, plan: SimulationPlan) -> Result<()> {
    logging::init_stderr();
    info!("Starting simulation");
    let store = ScoreStore::new(config.scores_dir());
    let tally = simulate(plan, &store)?;
    println!(
        "{}: side A ({}) vs side B ({})",
        plan.game.title(),
        plan.first,
        plan.second
    );
    print!("{}", tally);
    Ok(())
}

/// Prints one or all scoreboards.
#[instrument(skip(config))]
fn print_scores(config: &ParlorConfig, game: Option<GameKind>) -> Result<()> {
    logging::init_stderr();
    let store = ScoreStore::new(config.scores_dir());
    let games = match game {
        Some(game) => vec![game],
        None => GameKind::all(),
    };
    for game in games {
        println!("== {} ==", game.title());
        let rankings = store.rankings(game)?;
        if rankings.is_empty() {
            println!("  (no scores yet)");
        }
        for (i, ranking) in rankings.iter().enumerate() {
            println!("{:>3}. {:<24} {}", i + 1, ranking.name(), ranking.score());
        }
        println!();
    }
    Ok(())
}
