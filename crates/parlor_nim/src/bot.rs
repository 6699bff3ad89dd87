//! Matchstick bot strategies.

use parlor_engine::{EngineError, MoveSource, Policy, Seat, Tier};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::{MAX_TAKE, NimState, Take};

/// Hard strategy: leave the opponent on `4k + 1` matches.
///
/// On a multiple of four it takes three. Otherwise it aims at
/// `(remaining / 4) * 4 + 1`; when that target is unreachable in one legal
/// take (which happens exactly when `remaining % 4 == 1`, a lost position)
/// it takes one.
#[instrument]
pub fn hard_take(remaining: u32) -> Take {
    if remaining % 4 == 0 {
        return Take(MAX_TAKE);
    }
    let target = (remaining / 4) * 4 + 1;
    match remaining.checked_sub(target) {
        Some(take) if (1..=MAX_TAKE).contains(&take) => Take(take),
        _ => {
            debug!(remaining, target, "Target unreachable, taking one");
            Take(1)
        }
    }
}

/// Easy strategy: a uniformly random legal take.
#[instrument(skip(state, rng), fields(remaining = state.remaining()))]
pub fn random_take<R: Rng + ?Sized>(state: &NimState, rng: &mut R) -> Take {
    Take(rng.gen_range(1..=state.max_take().max(1)))
}

/// Picks a take for the given policy.
pub fn choose_take<R: Rng + ?Sized>(state: &NimState, policy: Policy, rng: &mut R) -> Take {
    match policy {
        Policy::Random => random_take(state, rng),
        Policy::Strategic => hard_take(state.remaining()),
    }
}

/// In-process matchstick bot.
#[derive(Debug)]
pub struct NimBot {
    tier: Tier,
    rng: StdRng,
}

impl NimBot {
    /// Creates a bot with an entropy-seeded RNG.
    #[instrument]
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a bot with a seeded RNG (for deterministic play).
    #[instrument]
    pub fn with_seed(tier: Tier, seed: u64) -> Self {
        Self {
            tier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The bot's tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

impl MoveSource<NimState> for NimBot {
    fn get_move(&mut self, game: &NimState, seat: Seat) -> Result<Take, EngineError> {
        let policy = self.tier.policy(&mut self.rng);
        let take = choose_take(game, policy, &mut self.rng);
        info!(%seat, tier = %self.tier, remaining = game.remaining(), take = take.0, "Bot move");
        Ok(take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_examples() {
        assert_eq!(hard_take(7), Take(2));
        assert_eq!(hard_take(8), Take(3));
        assert_eq!(hard_take(6), Take(1));
        assert_eq!(hard_take(2), Take(1));
        assert_eq!(hard_take(3), Take(2));
    }

    #[test]
    fn test_hard_falls_back_on_lost_positions() {
        for remaining in [1, 5, 9, 13, 17, 21, 25, 29] {
            assert_eq!(hard_take(remaining), Take(1), "remaining = {}", remaining);
        }
    }

    #[test]
    fn test_hard_always_legal() {
        for remaining in 1..=30 {
            let state = NimState::with_remaining(remaining);
            assert!(state.validate(hard_take(remaining)).is_ok(), "remaining = {}", remaining);
        }
    }

    #[test]
    fn test_random_always_legal() {
        let mut rng = StdRng::seed_from_u64(11);
        for remaining in 1..=30 {
            let state = NimState::with_remaining(remaining);
            for _ in 0..20 {
                assert!(state.validate(random_take(&state, &mut rng)).is_ok());
            }
        }
    }
}
