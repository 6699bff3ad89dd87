//! Higher/lower: one side hides a number, the other bisects toward it.
//!
//! Side A holds the secret and answers; side B guesses and moves first.
//! Every answer that contradicts the truth costs the holder a life; the
//! match ends when the secret is found or the holder runs out of lives,
//! and the guesser wins either way. Only the guesser is scored.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod game;
pub mod rules;
mod types;

pub use bot::{BotState, GuessBot, KnownRange, holder_range, sample_setup};
pub use game::efficiency;
pub use types::{
    Exchange, GUESSER, GuessMove, GuessState, HOLDER, MIN_MAXIMUM, MoveError, Phase, Response,
    STARTING_LIVES,
};
