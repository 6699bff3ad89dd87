//! Turn-engine binding for the guessing game.

use parlor_engine::{Outcome, Scoring, Seat, Status, TurnGame};

use crate::{GUESSER, GuessMove, GuessState, MoveError, rules};

/// Efficiency score: `guesses / maximum * 100`, rounded to three decimals.
/// Lower is better.
pub fn efficiency(guesses: u32, maximum: u32) -> f64 {
    let raw = f64::from(guesses) / f64::from(maximum.max(1)) * 100.0;
    (raw * 1000.0).round() / 1000.0
}

impl TurnGame for GuessState {
    type Move = GuessMove;
    type Error = MoveError;
    const NAME: &'static str = "guess";

    fn opening_seat(&self) -> Seat {
        GUESSER
    }

    fn check(&self, seat: Seat, mv: &GuessMove) -> Result<(), MoveError> {
        self.validate(seat, *mv)
    }

    fn apply(&mut self, _seat: Seat, mv: GuessMove) {
        self.play(mv);
    }

    fn status(&self, _last_mover: Seat) -> Status<Seat> {
        rules::status(self)
    }

    fn scoring(&self, _outcome: &Outcome) -> Scoring {
        Scoring::Metric {
            seat: GUESSER,
            score: efficiency(self.guesses(), self.maximum()),
        }
    }
}
