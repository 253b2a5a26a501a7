//! Events pushed to observers after each state transition.

use crate::models::game::Match;
use crate::models::throw::{MatchSession, ThrowReply};
use serde::{Deserialize, Serialize};

/// State change description. Serialized as `{"event": "<kind>", "data": ...}`.
#[derive(actix::Message, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A new match replaced whatever was in the slot.
    MatchCreated(Match),
    /// A dart was applied without finishing the leg.
    ThrowAdded(ThrowReply),
    /// Full state: sent to new observers and after a leg is won.
    MatchState(MatchSession),
}

impl MatchEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::MatchCreated(_) => "match_created",
            MatchEvent::ThrowAdded(_) => "throw_added",
            MatchEvent::MatchState(_) => "match_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameMode, Player, ThrowEntry};
    use serde_json::json;
    use uuid::Uuid;

    fn sample_match() -> Match {
        Match::new(GameMode::ThreeOhOne, vec![Player::new("A", 0, 301)])
    }

    fn sample_entry(game: &Match) -> ThrowEntry {
        ThrowEntry {
            id: Uuid::new_v4(),
            player_id: game.players[0].id,
            value: 20,
            mult: 3,
            score: 60,
            turn: 1,
            dart_in_turn: 1,
        }
    }

    #[test]
    fn match_created_carries_the_snapshot() {
        let game = sample_match();
        let v = serde_json::to_value(MatchEvent::MatchCreated(game.clone())).unwrap();
        assert_eq!(v["event"], "match_created");
        assert_eq!(v["data"]["id"], json!(game.id));
        assert_eq!(v["data"]["mode"], "301");
        assert_eq!(v["data"]["dartsInTurn"], 0);
        assert_eq!(v["data"]["players"][0]["name"], "A");
    }

    #[test]
    fn throw_added_carries_entry_and_match() {
        let game = sample_match();
        let entry = sample_entry(&game);
        let event = MatchEvent::ThrowAdded(ThrowReply {
            entry: entry.clone(),
            game: game.clone(),
        });
        let v = serde_json::to_value(&event).unwrap();
        assert_eq!(v["event"], "throw_added");
        assert_eq!(v["data"]["entry"]["playerId"], json!(entry.player_id));
        assert_eq!(v["data"]["entry"]["dartInTurn"], 1);
        assert_eq!(v["data"]["match"]["id"], json!(game.id));
        assert_eq!(v["data"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn match_state_carries_match_and_throws() {
        let game = sample_match();
        let mut session = MatchSession::new(game.clone());
        session.throws.push(sample_entry(&game));
        let v = serde_json::to_value(MatchEvent::MatchState(session)).unwrap();
        assert_eq!(v["event"], "match_state");
        assert_eq!(v["data"]["match"]["currentTurn"], 1);
        assert_eq!(v["data"]["throws"][0]["score"], 60);
        assert_eq!(v.as_object().unwrap().len(), 2);
    }

    #[test]
    fn kind_matches_the_wire_tag() {
        let game = sample_match();
        let events = [
            MatchEvent::MatchCreated(game.clone()),
            MatchEvent::MatchState(MatchSession::new(game)),
        ];
        for event in events {
            let v = serde_json::to_value(&event).unwrap();
            assert_eq!(v["event"], event.kind());
        }
    }
}
