//! Data structures for the scoreboard: players, the match, throws and events.

mod event;
mod game;
mod player;
mod throw;

pub use event::MatchEvent;
pub use game::{GameMode, Match, MatchError, MatchId};
pub use player::{Player, PlayerId};
pub use throw::{MatchSession, ThrowEntry, ThrowReply};
