mod game;
mod player;
mod round;
mod score;
mod timer;
mod vote;

pub use round::{assign_roles, Assignment};
pub use score::{classify_winner, eliminated};
pub use vote::VoteTally;

use crate::protocol::Action;
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The whole session: roster, settings, the current round and all history.
///
/// Values are never mutated in place by [`apply`]; every action yields a new
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub step: GameStep,
    pub players: Vec<Player>,
    pub settings: Settings,
    pub roles: Vec<RoleAssignment>,
    pub round: Option<Round>,
    /// Position in `players` of whoever is looking at their role card
    pub reveal_index: usize,
    pub votes: Vec<Vote>,
    pub history: Vec<RoundHistory>,
    pub timer_started: bool,
    pub timer_paused: bool,
    /// Whole seconds of discussion so far
    pub elapsed_time: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Apply one action, returning the next state
    pub fn apply<R: Rng + ?Sized>(&self, action: Action, rng: &mut R) -> GameState {
        apply(self, action, rng)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn role_of(&self, id: &str) -> Option<&RoleAssignment> {
        self.roles.iter().find(|r| r.player_id == id)
    }

    /// Clear everything tied to the round in progress (reveal, votes, timer)
    fn reset_round_progress(&mut self) {
        self.reveal_index = 0;
        self.votes.clear();
        self.timer_started = false;
        self.timer_paused = false;
        self.elapsed_time = 0;
    }
}

/// The single state-transition function.
///
/// Total: every action produces a state, nothing is rejected here. Hosts
/// that want the screens' preconditions enforced run [`crate::guard::check`]
/// first.
pub fn apply<R: Rng + ?Sized>(state: &GameState, action: Action, rng: &mut R) -> GameState {
    tracing::trace!(action = action.name(), step = %state.step, "Applying action");

    let mut next = state.clone();
    match action {
        Action::AddPlayer { name } => next.add_player(name, rng),
        Action::RemovePlayer { id } => next.remove_player(&id),
        Action::UpdatePlayerName { id, name } => next.rename_player(&id, name),
        Action::UpdateSettings { settings } => next.settings = next.settings.merged(&settings),
        Action::StartGame => next.start_game(rng),
        Action::NextReveal => next.next_reveal(),
        Action::StartDiscuss => next.step = GameStep::Discuss,
        Action::StartTimer => next.start_timer(),
        Action::PauseTimer => next.toggle_pause(),
        Action::ResetTimer => next.reset_timer(),
        Action::UpdateTimer { elapsed } => next.elapsed_time = elapsed,
        Action::StartVote => next.start_vote(),
        Action::CastVote {
            voter_id,
            target_id,
        } => next.cast_vote(voter_id, target_id),
        Action::ShowResult => next.show_result(),
        Action::NextRound => next.next_round(rng),
        Action::ViewHistory => next.step = GameStep::History,
        Action::BackToSetup => next = state.back_to_setup(),
        Action::LiarGuess { word_index } => {
            tracing::debug!(word_index, "Liar guess received; guessing is not scored");
        }
    }
    next
}
