//! Full guessing matches through the turn engine.

use std::collections::VecDeque;

use parlor_engine::{
    EngineError, Identity, MoveSource, Outcome, Scoring, Seat, Session, Tier, TraceRenderer,
};
use parlor_guess::{GUESSER, GuessBot, GuessMove, GuessState, HOLDER, Response, efficiency};

struct Scripted(VecDeque<GuessMove>);

impl MoveSource<GuessState> for Scripted {
    fn get_move(&mut self, _game: &GuessState, _seat: Seat) -> Result<GuessMove, EngineError> {
        self.0.pop_front().ok_or(EngineError::Interrupted)
    }
}

fn answers(list: &[Response]) -> Box<Scripted> {
    Box::new(Scripted(list.iter().copied().map(GuessMove::Answer).collect()))
}

fn guesses(list: &[u32]) -> Box<Scripted> {
    Box::new(Scripted(list.iter().copied().map(GuessMove::Guess).collect()))
}

#[test]
fn test_four_tries_scores_four() {
    use Response::*;
    let state = GuessState::new(100, 62).unwrap();
    let session = Session::new(
        state,
        [Identity::human("hold"), Identity::human("seek")],
        [
            answers(&[Greater, Lower, Lower, Equal]),
            guesses(&[50, 75, 63, 62]),
        ],
    );
    let report = session.run(&mut TraceRenderer).unwrap();
    assert_eq!(report.turns(), 8);
    assert_eq!(report.game().lives(), 2);
    assert_eq!(
        *report.outcome(),
        Outcome::Decided {
            winner: GUESSER,
            loser: HOLDER
        }
    );
    assert_eq!(
        *report.scoring(),
        Scoring::Metric {
            seat: Seat::Second,
            score: 4.0
        }
    );
}

#[test]
fn test_lying_twice_forfeits() {
    use Response::*;
    let state = GuessState::new(100, 62).unwrap();
    let session = Session::new(
        state,
        [Identity::human("hold"), Identity::human("seek")],
        [answers(&[Lower, Greater]), guesses(&[50, 90])],
    );
    let report = session.run(&mut TraceRenderer).unwrap();
    assert_eq!(report.game().lives(), 0);
    assert_eq!(report.game().guesses(), 2);
    assert_eq!(report.outcome().winner(), Some(GUESSER));
    assert_eq!(
        *report.scoring(),
        Scoring::Metric {
            seat: GUESSER,
            score: efficiency(2, 100)
        }
    );
}

#[test]
fn test_hard_guesser_bisects() {
    let state = GuessState::new(1000, 737).unwrap();
    let session = Session::new(
        state,
        [Identity::bot(1, Tier::Hard), Identity::bot(2, Tier::Hard)],
        [
            Box::new(GuessBot::with_seed(Tier::Hard, 1)),
            Box::new(GuessBot::with_seed(Tier::Hard, 2)),
        ],
    );
    let report = session.run(&mut TraceRenderer).unwrap();
    // ceil(log2(1001)) = 10
    assert!(report.game().guesses() <= 10);
    assert_eq!(report.game().lives(), 2);
    assert_eq!(report.game().last_exchange().map(|e| e.guess), Some(737));
}

#[test]
fn test_every_tier_finds_the_secret() {
    for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
        for seed in 0..20u64 {
            let mut holder = GuessBot::with_seed(Tier::Medium, seed);
            let (maximum, secret) = holder.choose_setup();
            let session = Session::new(
                GuessState::new(maximum, secret).unwrap(),
                [Identity::bot(1, Tier::Medium), Identity::bot(2, tier)],
                [Box::new(holder), Box::new(GuessBot::with_seed(tier, seed + 7))],
            );
            let report = session.run(&mut TraceRenderer).unwrap();
            assert_eq!(
                report.game().last_exchange().map(|e| e.guess),
                Some(secret)
            );
            assert!(report.game().guesses() <= maximum + 1);
        }
    }
}
