//! Misère matchstick game ("Nim-like"): players alternately take one to three
//! matches; whoever takes the last match loses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod game;
mod rules;
mod types;

pub use bot::{NimBot, choose_take, hard_take, random_take};
pub use rules::{is_exhausted, status};
pub use types::{MAX_TAKE, MoveError, NimState, START_RANGE, Take};
