//! Tests for the flat-file score store and its sink.

use std::fs;

use parlor_engine::{Identity, Roster, ScoreSink, Scoring, Seat, Tier, report};
use parlor_games::{FileScoreSink, GameKind, ScoreStore};
use tempfile::TempDir;

fn roster() -> Roster {
    let mut roster = Roster::new();
    roster.add(Identity::human("ana")).expect("add ana");
    roster.add(Identity::human("ben")).expect("add ben");
    roster.add(Identity::bot(2, Tier::Hard)).expect("add bot");
    roster
}

#[test]
fn test_files_are_created_on_demand() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path().join("scores"));
    assert!(store.rankings(GameKind::Nim).expect("rankings").is_empty());
    assert!(dir.path().join("scores").join("nim.txt").exists());
}

#[test]
fn test_match_lines_count_wins_and_totals() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let roster = roster();
    let mut sink = FileScoreSink::new(&store, GameKind::TicTacToe, &roster);

    sink.record_match("ana", "ben", false).expect("record");
    sink.record_match("ana", "ben", false).expect("record");
    sink.record_match("ben", "ana", true).expect("record");

    let content = fs::read_to_string(store.path(GameKind::TicTacToe)).expect("read");
    assert_eq!(content, "ana\t2\t3\nben\t0\t3\n");

    let rankings = store.rankings(GameKind::TicTacToe).expect("rankings");
    assert_eq!(rankings[0].name(), "ana");
    assert_eq!(rankings[0].score(), "66.67");
    assert_eq!(rankings[1].score(), "0.00");
}

#[test]
fn test_bot_side_is_left_out() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let roster = roster();
    let mut sink = FileScoreSink::new(&store, GameKind::ConnectFour, &roster);

    sink.record_match("Bot 2", "ana", false).expect("record");

    let content = fs::read_to_string(store.path(GameKind::ConnectFour)).expect("read");
    assert_eq!(content, "ana\t0\t1\n");
}

#[test]
fn test_bot_only_match_records_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let mut roster = Roster::new();
    roster.add(Identity::bot(1, Tier::Easy)).expect("add");
    roster.add(Identity::bot(2, Tier::Hard)).expect("add");
    let mut sink = FileScoreSink::new(&store, GameKind::Nim, &roster);

    let scoring = Scoring::Match {
        winner: Seat::First,
        loser: Seat::Second,
        tie: false,
    };
    report(&scoring, ["Bot 1", "Bot 2"], &roster, &mut sink).expect("report");

    assert!(store.load(GameKind::Nim).expect("load").is_empty());
}

#[test]
fn test_guess_scores_rank_lowest_first() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let roster = roster();
    let mut sink = FileScoreSink::new(&store, GameKind::Guess, &roster);

    sink.record_metric("ana", 12.5).expect("record");
    sink.record_metric("ben", 4.0).expect("record");
    sink.record_metric("ana", 7.25).expect("record");
    sink.record_metric("Bot 2", 1.0).expect("record");

    let rankings = store.rankings(GameKind::Guess).expect("rankings");
    let rows: Vec<(&str, &str)> = rankings
        .iter()
        .map(|r| (r.name().as_str(), r.score().as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![("ben", "4.000"), ("ana", "7.250"), ("ana", "12.500")]
    );
}
