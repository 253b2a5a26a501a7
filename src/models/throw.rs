//! Throw log entries and the per-leg session state.

use crate::models::game::Match;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded dart.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowEntry {
    pub id: Uuid,
    pub player_id: PlayerId,
    /// Segment as submitted (1-20, or 25 for the bull).
    pub value: i32,
    pub mult: i32,
    /// Points applied to the player's score.
    pub score: i32,
    /// Visit number this dart belongs to.
    pub turn: u32,
    /// Position within the visit (1, 2 or 3).
    pub dart_in_turn: u32,
}

/// A match together with the throw log of its current leg.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSession {
    #[serde(rename = "match")]
    pub game: Match,
    pub throws: Vec<ThrowEntry>,
}

impl MatchSession {
    pub fn new(game: Match) -> Self {
        Self {
            game,
            throws: Vec::new(),
        }
    }
}

/// Reply to a recorded throw: the entry plus the match after it was applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowReply {
    pub entry: ThrowEntry,
    #[serde(rename = "match")]
    pub game: Match,
}
