//! Turn-engine binding for the matchstick game.

use parlor_engine::{Seat, Status, TurnGame};

use crate::{MoveError, NimState, Take, rules};

impl TurnGame for NimState {
    type Move = Take;
    type Error = MoveError;
    const NAME: &'static str = "nim";

    fn check(&self, _seat: Seat, mv: &Take) -> Result<(), MoveError> {
        self.validate(*mv)
    }

    fn apply(&mut self, _seat: Seat, mv: Take) {
        self.take(mv);
    }

    fn status(&self, last_mover: Seat) -> Status<Seat> {
        rules::status(self, last_mover)
    }
}
