//! Guessing-game bots: a bisecting guesser and a truthful holder.

use std::ops::RangeInclusive;

use parlor_engine::{EngineError, MoveSource, Policy, Seat, Tier};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Exchange, GuessMove, GuessState, Phase, Response};

/// Interval the secret is known to lie in. Only ever narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownRange {
    /// Smallest candidate.
    pub min: u32,
    /// Largest candidate.
    pub max: u32,
}

impl KnownRange {
    /// The full range `[0, maximum]`.
    pub fn full(maximum: u32) -> Self {
        Self { min: 0, max: maximum }
    }

    /// Binary-search midpoint, `min + (max - min) / 2`.
    pub fn midpoint(&self) -> u32 {
        self.min + self.max.saturating_sub(self.min) / 2
    }

    /// Narrows with what was revealed about `guess`.
    ///
    /// Bounds move monotonically; a reveal that would push them past each
    /// other leaves the range as it was.
    #[instrument]
    pub fn narrow(&mut self, guess: u32, truth: Response) {
        let (min, max) = match truth {
            Response::Greater => (self.min.max(guess.saturating_add(1)), self.max),
            Response::Lower => match guess.checked_sub(1) {
                Some(below) => (self.min, self.max.min(below)),
                None => return,
            },
            Response::Equal => return,
        };
        if min <= max {
            self.min = min;
            self.max = max;
        } else {
            debug!(guess, ?truth, "Ignoring reveal that would empty the range");
        }
    }
}

/// A guessing bot's strategy state: its tier plus what it knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotState {
    /// Fixed for the whole match.
    pub tier: Tier,
    /// Narrowed after every round.
    pub range: KnownRange,
}

impl BotState {
    /// Fresh state for a game with the given maximum.
    pub fn new(tier: Tier, maximum: u32) -> Self {
        Self {
            tier,
            range: KnownRange::full(maximum),
        }
    }

    /// Folds a completed round into the known range.
    pub fn observe(&mut self, exchange: &Exchange) {
        self.range.narrow(exchange.guess, exchange.truth);
    }

    /// Picks the next guess under `policy`.
    pub fn next_guess<R: Rng + ?Sized>(&self, policy: Policy, rng: &mut R) -> u32 {
        match policy {
            Policy::Strategic => self.range.midpoint(),
            Policy::Random => rng.gen_range(self.range.min..=self.range.max),
        }
    }
}

/// Maximum range a bot holder samples from, per tier.
pub fn holder_range(tier: Tier) -> RangeInclusive<u32> {
    match tier {
        Tier::Easy => 10..=50,
        Tier::Medium => 10..=100,
        Tier::Hard => 100..=1000,
    }
}

/// Samples `(maximum, secret)` for a bot holder.
#[instrument(skip(rng))]
pub fn sample_setup<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> (u32, u32) {
    let maximum = rng.gen_range(holder_range(tier));
    let secret = rng.gen_range(0..=maximum);
    debug!(maximum, "Bot holder picked a secret");
    (maximum, secret)
}

/// In-process guessing bot, able to sit on either side.
///
/// As guesser it keeps a [`BotState`]; as holder it answers truthfully.
#[derive(Debug)]
pub struct GuessBot {
    tier: Tier,
    state: Option<BotState>,
    seen: usize,
    rng: StdRng,
}

impl GuessBot {
    /// Creates a bot with an entropy-seeded RNG.
    #[instrument]
    pub fn new(tier: Tier) -> Self {
        Self::with_rng(tier, StdRng::from_entropy())
    }

    /// Creates a bot with a seeded RNG.
    #[instrument]
    pub fn with_seed(tier: Tier, seed: u64) -> Self {
        Self::with_rng(tier, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tier: Tier, rng: StdRng) -> Self {
        Self {
            tier,
            state: None,
            seen: 0,
            rng,
        }
    }

    /// The bot's tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Current strategy state, once the bot has guessed.
    pub fn state(&self) -> Option<&BotState> {
        self.state.as_ref()
    }

    /// Samples `(maximum, secret)` for a match where this bot holds.
    pub fn choose_setup(&mut self) -> (u32, u32) {
        sample_setup(self.tier, &mut self.rng)
    }

    fn guess(&mut self, game: &GuessState) -> u32 {
        let state = self
            .state
            .get_or_insert_with(|| BotState::new(self.tier, game.maximum()));
        for exchange in &game.history()[self.seen.min(game.history().len())..] {
            state.observe(exchange);
        }
        self.seen = game.history().len();
        let policy = self.tier.policy(&mut self.rng);
        state.next_guess(policy, &mut self.rng)
    }
}

impl MoveSource<GuessState> for GuessBot {
    fn get_move(&mut self, game: &GuessState, seat: Seat) -> Result<GuessMove, EngineError> {
        let mv = match game.phase() {
            Phase::Guessing => GuessMove::Guess(self.guess(game)),
            Phase::Answering { guess } => {
                GuessMove::Answer(Response::truth(game.secret(), guess))
            }
        };
        info!(%seat, tier = %self.tier, %mv, "Bot move");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisection_example() {
        let mut state = BotState::new(Tier::Hard, 100);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(state.next_guess(Policy::Strategic, &mut rng), 50);
        state.range.narrow(50, Response::Greater);
        assert_eq!(state.range, KnownRange { min: 51, max: 100 });
        assert_eq!(state.next_guess(Policy::Strategic, &mut rng), 75);
    }

    #[test]
    fn test_narrow_lower_and_equal() {
        let mut range = KnownRange::full(100);
        range.narrow(50, Response::Lower);
        assert_eq!(range, KnownRange { min: 0, max: 49 });
        range.narrow(20, Response::Equal);
        assert_eq!(range, KnownRange { min: 0, max: 49 });
    }

    #[test]
    fn test_narrow_never_widens_or_inverts() {
        let mut range = KnownRange { min: 40, max: 60 };
        range.narrow(10, Response::Greater);
        assert_eq!(range, KnownRange { min: 40, max: 60 });
        range.narrow(0, Response::Lower);
        assert_eq!(range, KnownRange { min: 40, max: 60 });
        range.narrow(70, Response::Greater);
        assert_eq!(range, KnownRange { min: 40, max: 60 });
    }

    #[test]
    fn test_random_guess_stays_in_range() {
        let state = BotState {
            tier: Tier::Easy,
            range: KnownRange { min: 30, max: 35 },
        };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let guess = state.next_guess(Policy::Random, &mut rng);
            assert!((30..=35).contains(&guess));
        }
    }

    #[test]
    fn test_sample_setup_ranges() {
        let mut rng = StdRng::seed_from_u64(8);
        for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
            for _ in 0..50 {
                let (maximum, secret) = sample_setup(tier, &mut rng);
                assert!(holder_range(tier).contains(&maximum));
                assert!(secret <= maximum);
            }
        }
    }
}
