//! Terminal-condition detection for the guessing game.

use parlor_engine::{Seat, Status};
use tracing::instrument;

use crate::{GUESSER, GuessState};

/// The guesser wins on a correct guess, and by forfeit once the holder has
/// no lives left.
#[instrument(skip(state), fields(lives = state.lives(), guesses = state.guesses()))]
pub fn status(state: &GuessState) -> Status<Seat> {
    if state.is_finished() {
        Status::Won(GUESSER)
    } else {
        Status::Ongoing
    }
}
