//! Match, GameMode and MatchError.

use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Errors reported by match commands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// No match has been created yet.
    NoActiveMatch,
    /// The throw names a player that is not on the roster (raw reference as submitted).
    UnknownPlayer(String),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::NoActiveMatch => write!(f, "no match"),
            MatchError::UnknownPlayer(_) => write!(f, "player not found"),
        }
    }
}

impl std::error::Error for MatchError {}

/// x01 variant: decides the starting score of every leg.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "301")]
    ThreeOhOne,
    #[default]
    #[serde(rename = "501")]
    FiveOhOne,
}

impl GameMode {
    /// Parse a mode label. Only the exact label "301" selects 301; anything else is 501.
    pub fn from_label(label: &str) -> Self {
        if label == "301" {
            GameMode::ThreeOhOne
        } else {
            GameMode::FiveOhOne
        }
    }

    pub fn starting_score(self) -> i32 {
        match self {
            GameMode::ThreeOhOne => 301,
            GameMode::FiveOhOne => 501,
        }
    }
}

/// Snapshot of the match: roster plus whose throw it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub mode: GameMode,
    /// Roster in throwing order; immutable after creation.
    pub players: Vec<Player>,
    /// Index into `players` of the player on throw.
    pub current_index: usize,
    /// 1-based visit counter within the current leg.
    pub current_turn: u32,
    /// Darts already thrown in the current visit (0..=2 between throws).
    pub darts_in_turn: u32,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// New match at the start of its first leg.
    pub fn new(mode: GameMode, players: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            players,
            current_index: 0,
            current_turn: 1,
            darts_in_turn: 0,
            created_at: Utc::now(),
        }
    }

    pub fn player_position(&self, id: &Uuid) -> Option<usize> {
        self.players.iter().position(|p| p.id == *id)
    }
}
