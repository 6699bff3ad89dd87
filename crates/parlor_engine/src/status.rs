//! Terminal-condition results and match outcomes.

use serde::{Deserialize, Serialize};

use crate::Seat;

/// Result of a terminal-condition detector.
///
/// Detectors are pure functions returning one of these three states;
/// engines branch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status<S> {
    /// The game goes on.
    Ongoing,
    /// The given side has won.
    Won(S),
    /// The game ended without a winner.
    Tie,
}

impl<S> Status<S> {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// Maps the winning side to another type (e.g. a mark to a seat).
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Status<T> {
        match self {
            Status::Ongoing => Status::Ongoing,
            Status::Won(side) => Status::Won(f(side)),
            Status::Tie => Status::Tie,
        }
    }
}

/// Final result of a match, in terms of seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One seat won, the other lost.
    Decided {
        /// The winning seat.
        winner: Seat,
        /// The losing seat.
        loser: Seat,
    },
    /// Nobody won.
    Tie,
}

impl Outcome {
    /// Converts a finished detector status into an outcome.
    ///
    /// Returns `None` while the game is ongoing.
    pub fn from_status(status: Status<Seat>) -> Option<Self> {
        match status {
            Status::Ongoing => None,
            Status::Won(winner) => Some(Outcome::Decided {
                winner,
                loser: winner.opponent(),
            }),
            Status::Tie => Some(Outcome::Tie),
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Decided { winner, .. } => Some(*winner),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the match was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// What a finished match contributes to the score store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scoring {
    /// Win/tie games: both seats get a match played, the winner a win
    /// unless `tie` is set.
    Match {
        /// Winning seat (side A on a tie).
        winner: Seat,
        /// Losing seat (side B on a tie).
        loser: Seat,
        /// True when nobody won.
        tie: bool,
    },
    /// A single efficiency metric for one seat (lower is better).
    Metric {
        /// The seat receiving the score.
        seat: Seat,
        /// The score value.
        score: f64,
    },
}

impl Scoring {
    /// The win/tie scoring of an outcome.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Decided { winner, loser } => Scoring::Match {
                winner: *winner,
                loser: *loser,
                tie: false,
            },
            Outcome::Tie => Scoring::Match {
                winner: Seat::First,
                loser: Seat::Second,
                tie: true,
            },
        }
    }
}
