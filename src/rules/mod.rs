//! Turn sequencing and match rules.
//!
//! `TurnEngine` is the single owner of match state. The computer's card
//! choices go through the `OpponentPolicy` trait; renderers read a
//! `MatchSnapshot`. A `SessionState` saves and resumes a whole session.

pub mod engine;
pub mod policy;
pub mod session;
pub mod snapshot;

pub use engine::{MatchResult, Outcome, TurnEngine};
pub use policy::{GreedyOpponent, OpponentPolicy};
pub use session::SessionState;
pub use snapshot::MatchSnapshot;
