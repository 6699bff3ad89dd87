//! Tests for the session controller and the score reporting adapter.

use std::collections::VecDeque;
use std::fmt;

use parlor_engine::{
    Annotations, EngineError, Identity, MAX_ILLEGAL_ATTEMPTS, MoveSource, Outcome, Renderer,
    Roster, ScoreSink, Scoring, Seat, Session, Status, Tier, TurnGame, report,
};

/// Race to ten: each move adds 1 or 2, whoever reaches ten wins.
#[derive(Debug, Clone, Default)]
struct RaceToTen {
    total: u32,
    moves: Vec<Seat>,
}

#[derive(Debug)]
struct BadStep(u32);

impl fmt::Display for BadStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot add {}", self.0)
    }
}

impl std::error::Error for BadStep {}

impl TurnGame for RaceToTen {
    type Move = u32;
    type Error = BadStep;
    const NAME: &'static str = "race";

    fn check(&self, _seat: Seat, mv: &u32) -> Result<(), BadStep> {
        if (1..=2).contains(mv) && self.total + mv <= 10 {
            Ok(())
        } else {
            Err(BadStep(*mv))
        }
    }

    fn apply(&mut self, seat: Seat, mv: u32) {
        self.total += mv;
        self.moves.push(seat);
    }

    fn status(&self, last_mover: Seat) -> Status<Seat> {
        if self.total == 10 {
            Status::Won(last_mover)
        } else {
            Status::Ongoing
        }
    }
}

/// Plays a fixed script of moves.
struct Scripted {
    moves: VecDeque<u32>,
    rejections: usize,
}

impl Scripted {
    fn new(moves: &[u32]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            rejections: 0,
        }
    }
}

impl MoveSource<RaceToTen> for Scripted {
    fn get_move(&mut self, _game: &RaceToTen, _seat: Seat) -> Result<u32, EngineError> {
        self.moves.pop_front().ok_or(EngineError::Interrupted)
    }

    fn rejected(&mut self, _error: &BadStep) {
        self.rejections += 1;
    }
}

/// Always plays the same (illegal) move.
struct Stubborn;

impl MoveSource<RaceToTen> for Stubborn {
    fn get_move(&mut self, _game: &RaceToTen, _seat: Seat) -> Result<u32, EngineError> {
        Ok(7)
    }
}

#[derive(Default)]
struct Frames(Vec<Annotations>);

impl Renderer<RaceToTen> for Frames {
    fn render(&mut self, _game: &RaceToTen, annotations: &Annotations) -> Result<(), EngineError> {
        self.0.push(annotations.clone());
        Ok(())
    }
}

#[derive(Default)]
struct Tally {
    matches: Vec<(String, String, bool)>,
    metrics: Vec<(String, f64)>,
}

impl ScoreSink for Tally {
    fn record_match(&mut self, winner: &str, loser: &str, tie: bool) -> Result<(), EngineError> {
        self.matches.push((winner.to_string(), loser.to_string(), tie));
        Ok(())
    }

    fn record_metric(&mut self, player: &str, score: f64) -> Result<(), EngineError> {
        self.metrics.push((player.to_string(), score));
        Ok(())
    }
}

fn sides() -> [Identity; 2] {
    [Identity::human("Ada"), Identity::human("Grace")]
}

#[test]
fn test_seats_alternate_and_last_mover_wins() {
    let session = Session::new(
        RaceToTen::default(),
        sides(),
        [
            Box::new(Scripted::new(&[2, 2, 2])),
            Box::new(Scripted::new(&[1, 1, 2])),
        ],
    );
    let mut frames = Frames::default();
    let report = session.run(&mut frames).unwrap();

    // 2+1+2+1+2 = 8, then side B adds 2.
    assert_eq!(report.turns(), 6);
    assert_eq!(
        report.game().moves,
        vec![
            Seat::First,
            Seat::Second,
            Seat::First,
            Seat::Second,
            Seat::First,
            Seat::Second
        ]
    );
    assert_eq!(
        *report.outcome(),
        Outcome::Decided {
            winner: Seat::Second,
            loser: Seat::First
        }
    );
    // One render before the first move, one after each move.
    assert_eq!(frames.0.len(), 7);
    assert_eq!(frames.0[0].last_move(), &None);
    assert_eq!(frames.0[1].active(), "Ada");
    assert_eq!(frames.0[6].last_move().as_deref(), Some("2"));
}

#[test]
fn test_illegal_move_is_reprompted() {
    let session = Session::new(
        RaceToTen::default(),
        sides(),
        [
            Box::new(Scripted::new(&[5, 2, 2, 2, 2])),
            Box::new(Scripted::new(&[2, 2, 2, 2])),
        ],
    );
    let report = session.run(&mut Frames::default()).unwrap();
    assert_eq!(report.game().total, 10);
    // The rejected 5 never reached the state.
    assert_eq!(report.turns(), 5);
}

#[test]
fn test_stubborn_source_hits_the_limit() {
    let session = Session::new(
        RaceToTen::default(),
        sides(),
        [Box::new(Stubborn), Box::new(Scripted::new(&[1]))],
    );
    let err = session.run(&mut Frames::default()).unwrap_err();
    assert_eq!(
        err,
        EngineError::IllegalMoveLimit {
            seat: Seat::First,
            attempts: MAX_ILLEGAL_ATTEMPTS
        }
    );
}

#[test]
fn test_source_abort_stops_the_match() {
    let session = Session::new(
        RaceToTen::default(),
        sides(),
        [
            Box::new(Scripted::new(&[1])),
            Box::new(Scripted::new(&[])),
        ],
    );
    let err = session.run(&mut Frames::default()).unwrap_err();
    assert_eq!(err, EngineError::Interrupted);
}

#[test]
fn test_report_records_human_matches() {
    let mut roster = Roster::new();
    roster.add(Identity::human("Ada")).unwrap();
    roster.add(Identity::bot(2, Tier::Hard)).unwrap();
    let mut tally = Tally::default();

    let scoring = Scoring::Match {
        winner: Seat::Second,
        loser: Seat::First,
        tie: false,
    };
    report(&scoring, ["Ada", "Bot 2"], &roster, &mut tally).unwrap();
    assert_eq!(
        tally.matches,
        vec![("Bot 2".to_string(), "Ada".to_string(), false)]
    );
}

#[test]
fn test_report_skips_bot_only_results() {
    let mut roster = Roster::new();
    roster.add(Identity::bot(1, Tier::Easy)).unwrap();
    roster.add(Identity::bot(2, Tier::Hard)).unwrap();
    let mut tally = Tally::default();

    let scoring = Scoring::Match {
        winner: Seat::First,
        loser: Seat::Second,
        tie: true,
    };
    report(&scoring, ["Bot 1", "Bot 2"], &roster, &mut tally).unwrap();

    let metric = Scoring::Metric {
        seat: Seat::Second,
        score: 4.0,
    };
    report(&metric, ["Bot 1", "Bot 2"], &roster, &mut tally).unwrap();

    assert!(tally.matches.is_empty());
    assert!(tally.metrics.is_empty());
}

#[test]
fn test_report_records_human_metric() {
    let mut roster = Roster::new();
    roster.add(Identity::bot(1, Tier::Easy)).unwrap();
    roster.add(Identity::human("Grace")).unwrap();
    let mut tally = Tally::default();

    let metric = Scoring::Metric {
        seat: Seat::Second,
        score: 4.0,
    };
    report(&metric, ["Bot 1", "Grace"], &roster, &mut tally).unwrap();
    assert_eq!(tally.metrics, vec![("Grace".to_string(), 4.0)]);
}
