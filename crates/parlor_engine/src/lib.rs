//! Parlor engine - the shared turn engine for two-sided parlor games.
//!
//! Every game in the suite plugs into the same contract:
//!
//! - **[`TurnGame`]**: state model with a legality predicate, a mutator and a
//!   terminal-condition detector.
//! - **[`MoveSource`]**: where a seat's moves come from (a human collaborator
//!   or an in-process bot).
//! - **[`Renderer`]**: side-effect-only presentation hook.
//! - **[`Session`]**: the controller that alternates seats until the detector
//!   reports a result, then produces a [`MatchReport`].
//! - **[`report`]**: the score reporting adapter feeding a [`ScoreSink`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod identity;
mod seat;
mod session;
mod status;
mod tier;

pub use error::{EngineError, RosterError};
pub use game::{Annotations, MoveSource, Renderer, ScoreSink, TraceRenderer, TurnGame};
pub use identity::{Identity, PlayerIdentity, Roster};
pub use seat::Seat;
pub use session::{MAX_ILLEGAL_ATTEMPTS, MatchReport, Session, report};
pub use status::{Outcome, Scoring, Status};
pub use tier::{Policy, Tier};
