//! Session gateway: owns the single match slot and the connected observers.
//!
//! Every command runs the state machine against the slot, then pushes the resulting event to
//! all observers before returning the same payload to the caller. Callers share the gateway
//! behind a lock, so commands and their fan-out are serialized.

use crate::logic::{self, ThrowOutcome};
use crate::models::{GameMode, Match, MatchError, MatchEvent, MatchSession, PlayerId, ThrowReply};
use actix::Recipient;
use std::collections::HashMap;
use uuid::Uuid;

/// Handle returned on subscription, used to unsubscribe.
pub type ObserverId = Uuid;

/// Connected observers by id.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: HashMap<ObserverId, Recipient<MatchEvent>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, recipient: Recipient<MatchEvent>) -> ObserverId {
        let id = Uuid::new_v4();
        self.observers.insert(id, recipient);
        id
    }

    pub fn unregister(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Queue `event` on every live observer, dropping observers whose mailbox is gone.
    pub fn broadcast(&mut self, event: &MatchEvent) {
        let before = self.observers.len();
        self.observers.retain(|_, r| r.connected());
        let pruned = before - self.observers.len();
        if pruned > 0 {
            log::debug!("Dropped {} disconnected observer(s)", pruned);
        }
        for recipient in self.observers.values() {
            recipient.do_send(event.clone());
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

/// The one match slot plus its observers.
#[derive(Default)]
pub struct Gateway {
    session: Option<MatchSession>,
    observers: ObserverRegistry,
}

impl Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing match (its throw log is discarded) and announce the new one.
    pub fn create_match<S: AsRef<str>>(&mut self, mode: GameMode, names: &[S]) -> Match {
        let session = logic::create_match(mode, names);
        let game = session.game.clone();
        if let Some(old) = self.session.replace(session) {
            log::info!("Match {} replaced", old.game.id);
        }
        log::info!(
            "Match {} created: mode {:?}, {} player(s)",
            game.id,
            game.mode,
            game.players.len()
        );
        self.observers.broadcast(&MatchEvent::MatchCreated(game.clone()));
        game
    }

    pub fn has_match(&self) -> bool {
        self.session.is_some()
    }

    /// Current match and current-leg throws.
    pub fn state(&self) -> Result<MatchSession, MatchError> {
        logic::match_state(self.session.as_ref())
    }

    /// Apply one dart and broadcast the outcome. On error the slot is left untouched.
    pub fn record_throw(
        &mut self,
        player_id: PlayerId,
        value: i32,
        mult: i32,
    ) -> Result<ThrowReply, MatchError> {
        let outcome = match logic::record_throw(self.session.as_mut(), player_id, value, mult) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Throw rejected for player {}: {}", player_id, e);
                return Err(e);
            }
        };
        let reply = outcome.reply();
        log::debug!(
            "Throw {}x{} = {} by {} (turn {}, dart {})",
            reply.entry.value,
            reply.entry.mult,
            reply.entry.score,
            player_id,
            reply.entry.turn,
            reply.entry.dart_in_turn
        );
        if let ThrowOutcome::LegWon { winner, set_won, .. } = &outcome {
            log::info!("Leg won by {}", winner);
            if *set_won {
                log::info!("Set won by {}", winner);
            }
        }
        self.observers.broadcast(&outcome.event());
        Ok(outcome.reply().clone())
    }

    /// Register an observer. If a match exists it first receives the full current state, so
    /// nothing broadcast later can overtake it.
    pub fn subscribe(&mut self, recipient: Recipient<MatchEvent>) -> ObserverId {
        if let Some(session) = &self.session {
            recipient.do_send(MatchEvent::MatchState(session.clone()));
        }
        let id = self.observers.register(recipient);
        log::info!("Observer {} subscribed ({} connected)", id, self.observers.len());
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        if self.observers.unregister(id) {
            log::info!("Observer {} unsubscribed ({} connected)", id, self.observers.len());
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
