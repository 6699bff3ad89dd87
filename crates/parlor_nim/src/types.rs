//! Core domain types for the matchstick game.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Allowed starting counts.
pub const START_RANGE: RangeInclusive<u32> = 15..=30;

/// Most matches a single turn may take.
pub const MAX_TAKE: u32 = 3;

/// A move: the number of matches taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take(pub u32);

impl Take {
    /// Number of matches taken.
    pub fn count(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "took 1 match")
        } else {
            write!(f, "took {} matches", self.0)
        }
    }
}

/// Error that can occur when setting up a game or validating a take.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The take is zero, above three, or above what is left.
    #[display("Cannot take {} (between 1 and {} allowed)", take, max)]
    InvalidTake {
        /// Requested count.
        take: u32,
        /// Largest legal count right now.
        max: u32,
    },

    /// The starting count is outside [15, 30].
    #[display("Cannot start with {} matches (between 15 and 30 allowed)", _0)]
    InvalidStart(u32),

    /// No matches are left.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Matches remaining on the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimState {
    remaining: u32,
    history: Vec<u32>,
}

impl NimState {
    /// Creates a game with a starting count in [`START_RANGE`].
    #[instrument]
    pub fn new(start: u32) -> Result<Self, MoveError> {
        if !START_RANGE.contains(&start) {
            return Err(MoveError::InvalidStart(start));
        }
        Ok(Self::with_remaining(start))
    }

    /// Creates a game with a random starting count, used when no human is
    /// at the table to choose one.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = rng.gen_range(START_RANGE);
        debug!(start, "Random starting count");
        Self::with_remaining(start)
    }

    /// Creates a position with an arbitrary count, e.g. to resume or study
    /// a mid-game position.
    pub fn with_remaining(remaining: u32) -> Self {
        Self {
            remaining,
            history: Vec::new(),
        }
    }

    /// Matches left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Takes applied so far, in order.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Largest legal take right now.
    pub fn max_take(&self) -> u32 {
        MAX_TAKE.min(self.remaining)
    }

    /// Legality predicate: `1 <= take <= min(3, remaining)`.
    #[instrument(skip(self), fields(remaining = self.remaining))]
    pub fn validate(&self, take: Take) -> Result<(), MoveError> {
        if self.remaining == 0 {
            return Err(MoveError::GameOver);
        }
        let max = self.max_take();
        if take.0 == 0 || take.0 > max {
            return Err(MoveError::InvalidTake { take: take.0, max });
        }
        Ok(())
    }

    /// Removes matches (validate first; over-takes saturate at zero).
    pub(crate) fn take(&mut self, take: Take) {
        self.remaining = self.remaining.saturating_sub(take.0);
        self.history.push(take.0);
    }
}
