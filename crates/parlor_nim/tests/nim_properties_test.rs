//! Property tests for the matchstick strategies.

use parlor_engine::{Policy, Seat, Status, TurnGame};
use parlor_nim::{MAX_TAKE, NimState, Take, choose_take, hard_take};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

proptest! {
    #[test]
    fn hard_take_leaves_four_k_plus_one(remaining in 1u32..=200) {
        let Take(take) = hard_take(remaining);
        prop_assert!((1..=MAX_TAKE).contains(&take));
        if remaining % 4 != 1 {
            prop_assert_eq!((remaining - take) % 4, 1);
        } else {
            prop_assert_eq!(take, 1);
        }
    }

    #[test]
    fn every_policy_picks_a_legal_take(remaining in 1u32..=30, seed in any::<u64>()) {
        let state = NimState::with_remaining(remaining);
        let mut rng = StdRng::seed_from_u64(seed);
        for policy in [Policy::Random, Policy::Strategic] {
            let take = choose_take(&state, policy, &mut rng);
            prop_assert!(state.validate(take).is_ok(), "{:?} from {}", take, remaining);
        }
    }

    #[test]
    fn every_match_ends_with_the_last_taker_losing(start in 15u32..=30, seed in any::<u64>()) {
        let mut state = NimState::new(start).expect("start in range");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seat = Seat::First;
        for _ in 0..start {
            let before = state.remaining();
            let policy = if rng.gen_bool(0.5) { Policy::Random } else { Policy::Strategic };
            let take = choose_take(&state, policy, &mut rng);
            state.apply(seat, take);
            prop_assert!(state.remaining() < before);
            if let Status::Won(winner) = state.status(seat) {
                prop_assert_eq!(state.remaining(), 0);
                prop_assert_eq!(winner, seat.opponent());
                return Ok(());
            }
            seat = seat.opponent();
        }
        prop_assert!(false, "match from {} did not end", start);
    }
}
