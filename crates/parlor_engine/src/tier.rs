//! Bot difficulty tiers and the policy each tier resolves to.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bot difficulty level.
///
/// A bot's tier is fixed for the whole match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Level 0: random legal moves.
    #[default]
    Easy,
    /// Level 1: a coin flip between easy and hard every move.
    Medium,
    /// Level 2: the game's heuristic or optimal strategy.
    Hard,
}

/// The move-generation algorithm a tier resolves to for a single move.
///
/// Each game implements exactly these two algorithms; [`Tier::Medium`] has no
/// algorithm of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Uniformly random among legal moves.
    Random,
    /// The game's hard strategy.
    Strategic,
}

impl Tier {
    /// Creates a tier from its numeric level (0, 1 or 2).
    #[instrument]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Tier::Easy),
            1 => Some(Tier::Medium),
            2 => Some(Tier::Hard),
            _ => None,
        }
    }

    /// Returns the numeric level (0, 1 or 2).
    pub fn level(self) -> u8 {
        match self {
            Tier::Easy => 0,
            Tier::Medium => 1,
            Tier::Hard => 2,
        }
    }

    /// Returns the next tier, wrapping from hard back to easy.
    pub fn cycle(self) -> Self {
        match self {
            Tier::Easy => Tier::Medium,
            Tier::Medium => Tier::Hard,
            Tier::Hard => Tier::Easy,
        }
    }

    /// Resolves the policy for one move.
    ///
    /// Medium flips a fair coin on every call: heads plays easy, tails plays
    /// hard.
    #[instrument(skip(rng))]
    pub fn policy<R: Rng + ?Sized>(self, rng: &mut R) -> Policy {
        let policy = match self {
            Tier::Easy => Policy::Random,
            Tier::Hard => Policy::Strategic,
            Tier::Medium => {
                if rng.gen_bool(0.5) {
                    Policy::Random
                } else {
                    Policy::Strategic
                }
            }
        };
        debug!(tier = %self, ?policy, "Resolved bot policy");
        policy
    }
}
