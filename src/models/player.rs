//! Player on the scoreboard.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used by throw submissions).
pub type PlayerId = Uuid;

/// A player in the current match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Position in throwing order, fixed at match creation.
    pub order: usize,
    /// Points left in the current leg. Never negative.
    pub score: i32,
    /// Legs won in the current set.
    pub legs: u32,
    pub sets: u32,
}

impl Player {
    /// Create a player at the given position with a fresh starting score.
    pub fn new(name: impl Into<String>, order: usize, starting_score: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            order,
            score: starting_score,
            legs: 0,
            sets: 0,
        }
    }

    /// Subtract points, clamping at zero (no bust rule).
    pub fn deduct(&mut self, points: i32) {
        self.score = self.score.saturating_sub(points).max(0);
    }

    /// True once the player has counted down to exactly zero.
    pub fn has_checked_out(&self) -> bool {
        self.score == 0
    }
}
