use super::GameState;
use crate::types::*;

/// Vote counts per player, in roster order.
///
/// Every roster player is present (possibly with zero). Targets that are not
/// on the roster are appended in the order their first vote arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<(PlayerId, u32)>,
}

impl VoteTally {
    pub fn new(players: &[Player], votes: &[Vote]) -> Self {
        let mut entries: Vec<(PlayerId, u32)> =
            players.iter().map(|p| (p.id.clone(), 0)).collect();

        for vote in votes {
            match entries.iter_mut().find(|(id, _)| *id == vote.target_id) {
                Some((_, count)) => *count += 1,
                None => entries.push((vote.target_id.clone(), 1)),
            }
        }

        Self { entries }
    }

    pub fn get(&self, id: &str) -> u32 {
        self.entries
            .iter()
            .find(|(pid, _)| pid == id)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, u32)> {
        self.entries.iter().map(|(id, count)| (id, *count))
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl GameState {
    pub(super) fn start_vote(&mut self) {
        self.votes.clear();
        self.step = GameStep::Vote;
    }

    /// Record a vote. Duplicates and self-votes are the caller's business.
    pub(super) fn cast_vote(&mut self, voter_id: VoterId, target_id: PlayerId) {
        self.votes.push(Vote {
            voter_id,
            target_id,
        });
    }

    /// Tally of the votes cast so far this round
    pub fn tally(&self) -> VoteTally {
        VoteTally::new(&self.players, &self.votes)
    }
}
