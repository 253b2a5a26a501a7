//! Live x01 darts scoreboard: library with models, the match state machine, and the gateway
//! that serves it over HTTP and pushes changes to websocket viewers.

pub mod api;
pub mod config;
pub mod gateway;
pub mod logic;
pub mod models;
pub mod ws;

pub use config::ServerConfig;
pub use gateway::{Gateway, ObserverId, ObserverRegistry};
pub use logic::{
    compute_score, create_match, match_state, record_throw, ThrowOutcome, DARTS_PER_TURN,
    LEGS_PER_SET,
};
pub use models::{
    GameMode, Match, MatchError, MatchEvent, MatchId, MatchSession, Player, PlayerId, ThrowEntry,
    ThrowReply,
};
