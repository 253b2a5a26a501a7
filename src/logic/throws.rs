//! Recording throws: score deduction, visit rotation, leg and set completion.

use crate::logic::scoring::compute_score;
use crate::models::{MatchError, MatchEvent, MatchSession, PlayerId, ThrowEntry, ThrowReply};
use uuid::Uuid;

/// Darts per visit before the next player is on throw.
pub const DARTS_PER_TURN: u32 = 3;

/// Legs needed to take a set.
pub const LEGS_PER_SET: u32 = 3;

/// Result of applying one dart.
#[derive(Clone, Debug, PartialEq)]
pub enum ThrowOutcome {
    /// Score applied; the leg goes on.
    Scored(ThrowReply),
    /// The dart finished the leg and the next leg has already been set up.
    LegWon {
        reply: ThrowReply,
        winner: PlayerId,
        /// The leg also completed a set for the winner.
        set_won: bool,
    },
}

impl ThrowOutcome {
    /// Payload returned to the submitting client.
    pub fn reply(&self) -> &ThrowReply {
        match self {
            ThrowOutcome::Scored(reply) | ThrowOutcome::LegWon { reply, .. } => reply,
        }
    }

    /// Event for observers: incremental on a plain throw, full state after a leg.
    pub fn event(&self) -> MatchEvent {
        match self {
            ThrowOutcome::Scored(reply) => MatchEvent::ThrowAdded(reply.clone()),
            ThrowOutcome::LegWon { reply, .. } => {
                MatchEvent::MatchState(MatchSession::new(reply.game.clone()))
            }
        }
    }
}

/// Apply one dart for `player_id`.
///
/// The player does not have to be the one on throw. Overshooting clamps the score to 0, which
/// counts as winning the leg.
pub fn record_throw(
    slot: Option<&mut MatchSession>,
    player_id: PlayerId,
    value: i32,
    mult: i32,
) -> Result<ThrowOutcome, MatchError> {
    let session = slot.ok_or(MatchError::NoActiveMatch)?;
    let idx = session
        .game
        .player_position(&player_id)
        .ok_or_else(|| MatchError::UnknownPlayer(player_id.to_string()))?;

    let score = compute_score(value, mult);
    let game = &mut session.game;
    game.players[idx].deduct(score);

    let entry = ThrowEntry {
        id: Uuid::new_v4(),
        player_id,
        value,
        mult,
        score,
        turn: game.current_turn,
        dart_in_turn: game.darts_in_turn + 1,
    };
    session.throws.push(entry.clone());
    game.darts_in_turn += 1;

    if game.players[idx].has_checked_out() {
        let set_won = complete_leg(session, idx);
        return Ok(ThrowOutcome::LegWon {
            reply: ThrowReply {
                entry,
                game: session.game.clone(),
            },
            winner: player_id,
            set_won,
        });
    }

    if game.darts_in_turn >= DARTS_PER_TURN {
        game.darts_in_turn = 0;
        game.current_turn += 1;
        game.current_index = (game.current_index + 1) % game.players.len();
    }

    Ok(ThrowOutcome::Scored(ThrowReply {
        entry,
        game: session.game.clone(),
    }))
}

/// Credit the leg to `winner_idx` and reset for the next leg. Returns true if a set was won.
///
/// On a set win every player's legs go back to 0. The next leg always opens with the first
/// player in roster order, and the finished leg's throws are discarded.
fn complete_leg(session: &mut MatchSession, winner_idx: usize) -> bool {
    let game = &mut session.game;
    let winner = &mut game.players[winner_idx];
    winner.legs += 1;
    let set_won = winner.legs >= LEGS_PER_SET;
    if set_won {
        winner.sets += 1;
        for p in &mut game.players {
            p.legs = 0;
        }
    }

    let start = game.mode.starting_score();
    for p in &mut game.players {
        p.score = start;
    }
    game.current_turn = 1;
    game.darts_in_turn = 0;
    game.current_index = 0;
    session.throws.clear();
    set_won
}
