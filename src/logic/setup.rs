//! Match creation and state queries.

use crate::models::{GameMode, Match, MatchError, MatchSession, Player};

/// Build a fresh match: one player per name in the given order, everyone on the mode's
/// starting score, first player on throw, empty throw log. An empty roster is accepted.
pub fn create_match<S: AsRef<str>>(mode: GameMode, names: &[S]) -> MatchSession {
    let start = mode.starting_score();
    let players = names
        .iter()
        .enumerate()
        .map(|(order, name)| Player::new(name.as_ref(), order, start))
        .collect();
    MatchSession::new(Match::new(mode, players))
}

/// Current match and its current-leg throws.
pub fn match_state(slot: Option<&MatchSession>) -> Result<MatchSession, MatchError> {
    slot.cloned().ok_or(MatchError::NoActiveMatch)
}
