//! Core domain types for the guessing game.

use std::cmp::Ordering;

use parlor_engine::Seat;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seat holding the secret.
pub const HOLDER: Seat = Seat::First;
/// Seat guessing.
pub const GUESSER: Seat = Seat::Second;
/// Smallest allowed maximum.
pub const MIN_MAXIMUM: u32 = 10;
/// Lives the holder starts with.
pub const STARTING_LIVES: u32 = 2;

/// How the secret compares to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Response {
    /// The secret is greater than the guess.
    #[display("+")]
    Greater,
    /// The secret is lower than the guess.
    #[display("-")]
    Lower,
    /// The guess is the secret.
    #[display("=")]
    Equal,
}

impl Response {
    /// The truthful response for `guess` against `secret`.
    pub fn truth(secret: u32, guess: u32) -> Self {
        match secret.cmp(&guess) {
            Ordering::Greater => Response::Greater,
            Ordering::Less => Response::Lower,
            Ordering::Equal => Response::Equal,
        }
    }

    /// Parses the `+`, `-` and `=` keys.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Response::Greater),
            '-' => Some(Response::Lower),
            '=' => Some(Response::Equal),
            _ => None,
        }
    }
}

/// A move: the guesser names a number, or the holder answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GuessMove {
    /// A guess.
    #[display("guessed {}", _0)]
    Guess(u32),
    /// The holder's answer to the pending guess.
    #[display("answered {}", _0)]
    Answer(Response),
}

/// One completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The number guessed.
    pub guess: u32,
    /// What the holder answered.
    pub answer: Response,
    /// How the secret actually compares; revealed to the guesser.
    pub truth: Response,
}

impl Exchange {
    /// Whether the holder answered truthfully.
    pub fn is_honest(&self) -> bool {
        self.answer == self.truth
    }
}

/// Whose input the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a guess.
    Guessing,
    /// Waiting for the holder to answer `guess`.
    Answering {
        /// The pending guess.
        guess: u32,
    },
}

/// Error that can occur when setting up a game or validating a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The maximum is below [`MIN_MAXIMUM`].
    #[display("The maximum must be at least {} (got {})", MIN_MAXIMUM, _0)]
    MaximumTooSmall(u32),

    /// The secret is above the maximum.
    #[display("The number cannot exceed the maximum ({})", _0)]
    SecretAboveMaximum(u32),

    /// A guess arrived while an answer was expected, or vice versa.
    #[display("It is not the moment to {}", _0)]
    OutOfPhase(GuessMove),

    /// The move came from the wrong side of the table.
    #[display("{} cannot play {}", seat, mv)]
    WrongSide {
        /// The seat that tried to move.
        seat: Seat,
        /// What it tried.
        mv: GuessMove,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Secret, bounds, lives and round bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessState {
    secret: u32,
    maximum: u32,
    lives: u32,
    guesses: u32,
    phase: Phase,
    history: Vec<Exchange>,
}

impl GuessState {
    /// Creates a game; `secret` must lie in `[0, maximum]` and `maximum`
    /// must be at least [`MIN_MAXIMUM`].
    #[instrument(skip(secret))]
    pub fn new(maximum: u32, secret: u32) -> Result<Self, MoveError> {
        if maximum < MIN_MAXIMUM {
            return Err(MoveError::MaximumTooSmall(maximum));
        }
        if secret > maximum {
            return Err(MoveError::SecretAboveMaximum(maximum));
        }
        debug!(maximum, "Secret chosen");
        Ok(Self {
            secret,
            maximum,
            lives: STARTING_LIVES,
            guesses: 0,
            phase: Phase::Guessing,
            history: Vec::new(),
        })
    }

    /// The hidden number.
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Upper bound agreed at setup.
    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Lives the holder has left.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Guesses made so far.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed rounds, in order.
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    /// The most recent completed round.
    pub fn last_exchange(&self) -> Option<&Exchange> {
        self.history.last()
    }

    /// True once the secret was found or the holder ran out of lives.
    pub fn is_finished(&self) -> bool {
        self.lives == 0 || self.last_exchange().is_some_and(|e| e.guess == self.secret)
    }

    /// Legality predicate for `seat` playing `mv`.
    #[instrument(skip(self))]
    pub fn validate(&self, seat: Seat, mv: GuessMove) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        let expected = match mv {
            GuessMove::Guess(_) => GUESSER,
            GuessMove::Answer(_) => HOLDER,
        };
        if seat != expected {
            return Err(MoveError::WrongSide { seat, mv });
        }
        match (self.phase, mv) {
            (Phase::Guessing, GuessMove::Guess(_))
            | (Phase::Answering { .. }, GuessMove::Answer(_)) => Ok(()),
            _ => Err(MoveError::OutOfPhase(mv)),
        }
    }

    pub(crate) fn play(&mut self, mv: GuessMove) {
        match (self.phase, mv) {
            (Phase::Guessing, GuessMove::Guess(guess)) => {
                self.guesses += 1;
                self.phase = Phase::Answering { guess };
            }
            (Phase::Answering { guess }, GuessMove::Answer(answer)) => {
                let exchange = Exchange {
                    guess,
                    answer,
                    truth: Response::truth(self.secret, guess),
                };
                if !exchange.is_honest() {
                    self.lives = self.lives.saturating_sub(1);
                    debug!(lives = self.lives, "Wrong answer, life lost");
                }
                self.history.push(exchange);
                self.phase = Phase::Guessing;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_bounds() {
        assert!(GuessState::new(10, 10).is_ok());
        assert_eq!(GuessState::new(9, 3), Err(MoveError::MaximumTooSmall(9)));
        assert_eq!(
            GuessState::new(100, 101),
            Err(MoveError::SecretAboveMaximum(100))
        );
        assert_eq!(
            MoveError::SecretAboveMaximum(100).to_string(),
            "The number cannot exceed the maximum (100)"
        );
    }

    #[test]
    fn test_truth() {
        assert_eq!(Response::truth(60, 50), Response::Greater);
        assert_eq!(Response::truth(40, 50), Response::Lower);
        assert_eq!(Response::truth(50, 50), Response::Equal);
    }

    #[test]
    fn test_dishonest_answer_costs_a_life() {
        let mut state = GuessState::new(100, 60).unwrap();
        state.play(GuessMove::Guess(50));
        state.play(GuessMove::Answer(Response::Lower));
        assert_eq!(state.lives(), 1);
        let last = state.last_exchange().unwrap();
        assert!(!last.is_honest());
        assert_eq!(last.truth, Response::Greater);
    }

    #[test]
    fn test_phase_and_side_checks() {
        let state = GuessState::new(100, 60).unwrap();
        assert_eq!(
            state.validate(GUESSER, GuessMove::Answer(Response::Equal)),
            Err(MoveError::WrongSide {
                seat: GUESSER,
                mv: GuessMove::Answer(Response::Equal)
            })
        );
        assert!(state.validate(GUESSER, GuessMove::Guess(1_000)).is_ok());
    }
}
