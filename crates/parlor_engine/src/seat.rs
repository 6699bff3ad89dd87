//! The two seats at the table.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two participants in a match.
///
/// `First` is side A (the player listed first when the match is set up),
/// `Second` is side B. Which seat actually moves first is a per-game
/// convention, see [`TurnGame::opening_seat`](crate::TurnGame::opening_seat).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Seat {
    /// Side A.
    #[display("side A")]
    First,
    /// Side B.
    #[display("side B")]
    Second,
}

impl Seat {
    /// Both seats, side A first.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// Returns the other seat.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element array of per-seat data.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for seat in Seat::BOTH {
            assert_ne!(seat, seat.opponent());
            assert_eq!(seat, seat.opponent().opponent());
        }
    }

    #[test]
    fn test_index_matches_both_order() {
        for (i, seat) in Seat::BOTH.iter().enumerate() {
            assert_eq!(seat.index(), i);
        }
    }
}
