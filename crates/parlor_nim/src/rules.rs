//! Terminal-condition detection for the matchstick game.

use parlor_engine::{Seat, Status};
use tracing::instrument;

use crate::NimState;

/// True exactly when no matches are left.
#[instrument(skip(state), fields(remaining = state.remaining()))]
pub fn is_exhausted(state: &NimState) -> bool {
    state.remaining() == 0
}

/// Misère detector: whoever took the last match loses.
#[instrument(skip(state), fields(remaining = state.remaining()))]
pub fn status(state: &NimState, last_taker: Seat) -> Status<Seat> {
    if is_exhausted(state) {
        Status::Won(last_taker.opponent())
    } else {
        Status::Ongoing
    }
}
