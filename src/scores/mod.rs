//! Flat-file score store.
//!
//! One tab-separated file per game: `name<TAB>number<TAB>number…`.

mod error;
mod sink;
mod store;

pub use error::ScoreError;
pub use sink::FileScoreSink;
pub use store::{Ranking, ScoreLine, ScoreStore};
