//! Plays whole matches through the terminal UI with scripted keys.

use crossterm::event::KeyCode;
use parlor_engine::{EngineError, Identity, Outcome, Roster, Scoring, Seat};
use parlor_games::tui::console::{Console, ScriptedKeys};
use parlor_games::tui::matches;
use parlor_games::tui::table::{SharedTable, Table};
use parlor_games::{GameKind, ParlorConfig, ScoreStore};
use ratatui::{Terminal, backend::TestBackend};
use tempfile::TempDir;

fn table(keys: Vec<KeyCode>) -> SharedTable<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    let console = Console::new(terminal, Box::new(ScriptedKeys::new(keys)));
    let config = ParlorConfig::default().with_delays(0, 0);
    Table::new(console, &config).shared()
}

fn humans() -> (Roster, [Identity; 2]) {
    let sides = [Identity::human("ana"), Identity::human("ben")];
    let mut roster = Roster::new();
    for side in &sides {
        roster.add(side.clone()).expect("add");
    }
    (roster, sides)
}

fn number(value: &str) -> Vec<KeyCode> {
    ScriptedKeys::typed(value)
        .chain(std::iter::once(KeyCode::Enter))
        .collect()
}

#[test]
fn test_tictactoe_diagonal_with_cursor_keys() {
    use KeyCode::{Down, Enter, Left, Right, Up};
    let keys = vec![
        Enter, // ana: Center
        Up, Enter, // ben: TopCenter
        Up, Left, Enter, // ana: TopLeft
        Right, Enter, // ben: TopRight
        Down, Down, Right, Right, Enter, // ana: BottomRight
    ];
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    let summary = matches::play(GameKind::TicTacToe, sides, &table(keys), &roster, &store)
        .expect("match");

    assert_eq!(
        *summary.outcome(),
        Outcome::Decided {
            winner: Seat::First,
            loser: Seat::Second
        }
    );
    assert_eq!(*summary.turns(), 5);
    let rankings = store.rankings(GameKind::TicTacToe).expect("rankings");
    assert_eq!(rankings[0].name(), "ana");
    assert_eq!(rankings[0].score(), "100.00");
}

#[test]
fn test_occupied_square_is_refused_locally() {
    use KeyCode::{Down, Enter, Left, Right, Up};
    let keys = vec![
        Enter, // ana: Center
        Enter, // ben: Center again, refused on screen
        Up, Enter, // ben: TopCenter
        Up, Left, Enter, // ana: TopLeft
        Right, Enter, // ben: TopRight
        Down, Down, Right, Right, Enter, // ana: BottomRight
    ];
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    let summary = matches::play(GameKind::TicTacToe, sides, &table(keys), &roster, &store)
        .expect("match");
    assert_eq!(*summary.turns(), 5);
}

#[test]
fn test_guess_between_two_humans() {
    let mut keys = Vec::new();
    keys.extend(number("100")); // ana: maximum
    keys.extend(number("62")); // ana: secret
    for (guess, answer) in [("50", '+'), ("75", '-'), ("63", '-'), ("62", '=')] {
        keys.extend(number(guess));
        keys.push(KeyCode::Char(answer));
    }
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    let summary =
        matches::play(GameKind::Guess, sides, &table(keys), &roster, &store).expect("match");

    assert_eq!(
        *summary.scoring(),
        Scoring::Metric {
            seat: Seat::Second,
            score: 4.0
        }
    );
    let rankings = store.rankings(GameKind::Guess).expect("rankings");
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].name(), "ben");
    assert_eq!(rankings[0].score(), "4.000");
}

#[test]
fn test_secret_above_maximum_is_asked_again() {
    let mut keys = Vec::new();
    keys.extend(number("5")); // too small, asked again
    keys.extend(number("10"));
    keys.extend(number("11")); // above the maximum, asked again
    keys.extend(number("7"));
    keys.extend(number("7"));
    keys.push(KeyCode::Char('='));
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    let summary =
        matches::play(GameKind::Guess, sides, &table(keys), &roster, &store).expect("match");
    assert_eq!(*summary.turns(), 2);
}

#[test]
fn test_nim_human_against_human() {
    let mut keys = number("15");
    // 15 → 12 → 9 → 6 → 3 → 1 → 0: ben takes the last match.
    keys.extend(['3', '3', '3', '3', '2', '1'].map(KeyCode::Char));
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    let summary = matches::play(GameKind::Nim, sides, &table(keys), &roster, &store).expect("match");

    assert_eq!(
        *summary.outcome(),
        Outcome::Decided {
            winner: Seat::First,
            loser: Seat::Second
        }
    );
    assert_eq!(*summary.turns(), 6);
}

#[test]
fn test_ctrl_c_aborts_without_recording() {
    let dir = TempDir::new().expect("tempdir");
    let store = ScoreStore::new(dir.path());
    let (roster, sides) = humans();

    // An exhausted script reads as Ctrl-C.
    let result = matches::play(GameKind::ConnectFour, sides, &table(Vec::new()), &roster, &store);

    assert!(matches!(result, Err(EngineError::Interrupted)));
    assert!(store.load(GameKind::ConnectFour).expect("load").is_empty());
}
