//! Match state machine: scoring, match setup and throw handling. No I/O.

mod scoring;
mod setup;
mod throws;

pub use scoring::{compute_score, BULL};
pub use setup::{create_match, match_state};
pub use throws::{record_throw, ThrowOutcome, DARTS_PER_TURN, LEGS_PER_SET};
