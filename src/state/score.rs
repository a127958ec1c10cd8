use super::{GameState, VoteTally};
use crate::types::*;

/// Plurality pick from a tally.
///
/// Walks the tally in order and keeps the first entry that strictly beats the
/// running maximum, so ties stay with the earlier player. Returns `None` when
/// nobody has a vote.
pub fn eliminated(tally: &VoteTally) -> Option<PlayerId> {
    let mut max_votes = 0;
    let mut eliminated = None;
    for (id, count) in tally.iter() {
        if count > max_votes {
            max_votes = count;
            eliminated = Some(id.clone());
        }
    }
    eliminated
}

/// Who won, given the mode and the eliminated player's role.
///
/// Catching the liar or the spy is a citizen win. Eliminating a citizen hands
/// the round to the hidden side; in hybrid mode that is always the liar.
pub fn classify_winner(mode: GameMode, eliminated_role: Option<Role>) -> Winner {
    match eliminated_role {
        Some(Role::Liar) | Some(Role::Spy) => Winner::Citizen,
        Some(Role::Citizen) => match mode {
            GameMode::Liar | GameMode::Hybrid => Winner::Liar,
            GameMode::Spy => Winner::Spy,
        },
        None => Winner::None,
    }
}

impl GameState {
    /// Score the current round without recording it
    pub fn compute_result(&self) -> RoundHistory {
        let eliminated_id = eliminated(&self.tally());
        let eliminated_role = eliminated_id
            .as_deref()
            .and_then(|id| self.role_of(id))
            .map(|r| r.role);
        let winner = classify_winner(self.settings.mode, eliminated_role);

        let find_role = |role: Role| {
            self.roles
                .iter()
                .find(|r| r.role == role)
                .map(|r| r.player_id.clone())
        };

        RoundHistory {
            round_no: self.round.as_ref().map_or(1, |r| r.round_no),
            liar_id: find_role(Role::Liar),
            spy_id: find_role(Role::Spy),
            main_word: self
                .round
                .as_ref()
                .map(|r| r.main_word.clone())
                .unwrap_or_default(),
            spy_word: self.round.as_ref().and_then(|r| r.spy_word.clone()),
            eliminated_id,
            winner,
            votes: self.votes.clone(),
        }
    }

    pub(super) fn show_result(&mut self) {
        let record = self.compute_result();
        tracing::debug!(
            round_no = record.round_no,
            winner = ?record.winner,
            eliminated = ?record.eliminated_id,
            votes = record.votes.len(),
            "Round closed"
        );
        self.history.push(record);
        self.step = GameStep::Result;
    }

    /// The record of the round that just ended
    pub fn last_result(&self) -> Option<&RoundHistory> {
        self.history.last()
    }
}
