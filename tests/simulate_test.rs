//! Tests for headless bot-vs-bot simulation.

use parlor_engine::Tier;
use parlor_games::{GameKind, ScoreStore, SimulationPlan, simulate};
use tempfile::TempDir;

fn plan(game: GameKind, first: Tier, second: Tier) -> SimulationPlan {
    SimulationPlan {
        game,
        first,
        second,
        matches: 20,
        seed: Some(42),
        record: false,
    }
}

#[test]
fn test_every_game_finishes_every_match() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    for game in GameKind::all() {
        let tally = simulate(plan(game, Tier::Medium, Tier::Easy), &store).expect("simulate");
        assert_eq!(*tally.matches(), 20, "{}", game);
        assert_eq!(
            tally.first_wins() + tally.second_wins() + tally.ties(),
            20,
            "{}",
            game
        );
    }
}

#[test]
fn test_seeded_runs_repeat() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let first = simulate(plan(GameKind::ConnectFour, Tier::Medium, Tier::Medium), &store)
        .expect("simulate");
    let second = simulate(plan(GameKind::ConnectFour, Tier::Medium, Tier::Medium), &store)
        .expect("simulate");
    assert_eq!(first, second);
}

#[test]
fn test_guess_always_ends_with_the_guesser_winning() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let tally = simulate(plan(GameKind::Guess, Tier::Hard, Tier::Hard), &store).expect("simulate");
    assert_eq!(*tally.second_wins(), 20);
    let mean = tally.mean_metric().expect("guess has a score");
    assert!(mean > 0.0);
}

#[test]
fn test_recording_bots_leaves_files_empty() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let mut recorded = plan(GameKind::Nim, Tier::Hard, Tier::Easy);
    recorded.record = true;
    simulate(recorded, &store).expect("simulate");
    assert!(store.load(GameKind::Nim).expect("load").is_empty());
}
