//! Host-side preconditions.
//!
//! The state machine accepts every action. The screens of a real table never
//! let some of them through (starting with two players, voting twice, ...);
//! this module is that gate, for hosts that want it.

use crate::protocol::Action;
use crate::state::GameState;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{action} is not allowed during {step}")]
    WrongStep {
        action: &'static str,
        step: GameStep,
    },

    #[error("need at least {min} players, have {0}", min = MIN_PLAYERS)]
    NotEnoughPlayers(usize),

    #[error("player name cannot be empty")]
    EmptyName,

    #[error("player {0} not found")]
    UnknownPlayer(PlayerId),

    #[error(
        "discussion must be {min}-{max}s in steps of {step}, got {0}",
        min = MIN_DURATION_SEC,
        max = MAX_DURATION_SEC,
        step = DURATION_STEP_SEC
    )]
    InvalidDuration(u32),

    #[error("player {0} has already voted")]
    AlreadyVoted(VoterId),

    #[error("self-voting is disabled")]
    SelfVote,

    #[error("voting is incomplete ({cast} of {expected} votes cast)")]
    VotingIncomplete { cast: usize, expected: usize },

    #[error("no rounds have been played yet")]
    NoHistory,
}

impl Rejection {
    /// Machine-readable error code for host messages
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::WrongStep { .. } => "WRONG_STEP",
            Rejection::NotEnoughPlayers(_) => "NOT_ENOUGH_PLAYERS",
            Rejection::EmptyName => "EMPTY_NAME",
            Rejection::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            Rejection::InvalidDuration(_) => "INVALID_DURATION",
            Rejection::AlreadyVoted(_) => "ALREADY_VOTED",
            Rejection::SelfVote => "SELF_VOTE",
            Rejection::VotingIncomplete { .. } => "VOTING_INCOMPLETE",
            Rejection::NoHistory => "NO_HISTORY",
        }
    }
}

/// Macro to reject an action outside the steps it belongs to
macro_rules! require_step {
    ($state:expr, $action:expr, $($step:pat_param)|+) => {
        if !matches!($state.step, $($step)|+) {
            return Err(Rejection::WrongStep {
                action: $action.name(),
                step: $state.step,
            });
        }
    };
}

/// Check whether `action` may be dispatched against `state`
pub fn check(state: &GameState, action: &Action) -> Result<(), Rejection> {
    use GameStep::*;

    match action {
        Action::AddPlayer { name } => {
            require_step!(state, action, Setup);
            if name.trim().is_empty() {
                return Err(Rejection::EmptyName);
            }
        }

        Action::RemovePlayer { id } | Action::UpdatePlayerName { id, .. } => {
            require_step!(state, action, Setup);
            require_player(state, id)?;
        }

        Action::UpdateSettings { settings } => {
            require_step!(state, action, Setup);
            if let Some(sec) = settings.duration_sec {
                if !Settings::is_valid_duration(sec) {
                    return Err(Rejection::InvalidDuration(sec));
                }
            }
        }

        Action::StartGame => {
            require_step!(state, action, Setup);
            if state.players.len() < MIN_PLAYERS {
                return Err(Rejection::NotEnoughPlayers(state.players.len()));
            }
        }

        Action::NextReveal | Action::StartDiscuss => {
            require_step!(state, action, Reveal);
        }

        Action::StartTimer
        | Action::PauseTimer
        | Action::ResetTimer
        | Action::UpdateTimer { .. }
        | Action::StartVote => {
            require_step!(state, action, Discuss);
        }

        Action::CastVote {
            voter_id,
            target_id,
        } => {
            require_step!(state, action, Vote);
            require_player(state, voter_id)?;
            require_player(state, target_id)?;
            if state.votes.iter().any(|v| v.voter_id == *voter_id) {
                return Err(Rejection::AlreadyVoted(voter_id.clone()));
            }
            if voter_id == target_id && !state.settings.allow_self_vote {
                return Err(Rejection::SelfVote);
            }
        }

        Action::ShowResult => {
            require_step!(state, action, Vote);
            if state.votes.len() < state.players.len() {
                return Err(Rejection::VotingIncomplete {
                    cast: state.votes.len(),
                    expected: state.players.len(),
                });
            }
        }

        Action::NextRound => {
            require_step!(state, action, Result);
        }

        Action::ViewHistory => {
            require_step!(state, action, Setup | Result);
            if state.history.is_empty() {
                return Err(Rejection::NoHistory);
            }
        }

        Action::BackToSetup => {
            require_step!(state, action, Reveal | Discuss | Vote | Result | History);
        }

        // Accepted and ignored by the state machine
        Action::LiarGuess { .. } => {}
    }

    Ok(())
}

fn require_player(state: &GameState, id: &str) -> Result<(), Rejection> {
    match state.player(id) {
        Some(_) => Ok(()),
        None => Err(Rejection::UnknownPlayer(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use crate::state::apply;

    fn setup_with(n: usize) -> GameState {
        let mut rng = GameRng::new(8);
        (0..n).fold(GameState::new(), |state, i| {
            apply(
                &state,
                Action::AddPlayer {
                    name: format!("P{}", i),
                },
                &mut rng,
            )
        })
    }

    fn voting(n: usize) -> GameState {
        let mut state = setup_with(n);
        state.step = GameStep::Vote;
        state
    }

    #[test]
    fn test_start_requires_three_players() {
        assert_eq!(
            check(&setup_with(2), &Action::StartGame),
            Err(Rejection::NotEnoughPlayers(2))
        );
        assert!(check(&setup_with(3), &Action::StartGame).is_ok());
    }

    #[test]
    fn test_roster_edits_only_in_setup() {
        let mut state = setup_with(3);
        let id = state.players[0].id.clone();
        assert!(check(&state, &Action::RemovePlayer { id: id.clone() }).is_ok());

        state.step = GameStep::Discuss;
        let err = check(&state, &Action::RemovePlayer { id }).unwrap_err();
        assert_eq!(err.code(), "WRONG_STEP");
        assert_eq!(err.to_string(), "REMOVE_PLAYER is not allowed during discuss");
    }

    #[test]
    fn test_add_player_rejects_blank_names() {
        let state = setup_with(0);
        assert_eq!(
            check(
                &state,
                &Action::AddPlayer {
                    name: "   ".to_string()
                }
            ),
            Err(Rejection::EmptyName)
        );
    }

    #[test]
    fn test_rename_unknown_player() {
        let state = setup_with(1);
        let result = check(
            &state,
            &Action::UpdatePlayerName {
                id: "nope".to_string(),
                name: "x".to_string(),
            },
        );
        assert_eq!(result, Err(Rejection::UnknownPlayer("nope".to_string())));
    }

    #[test]
    fn test_duration_must_be_on_the_slider() {
        let state = setup_with(0);
        let patch = |sec| Action::UpdateSettings {
            settings: SettingsPatch {
                duration_sec: Some(sec),
                ..Default::default()
            },
        };
        assert!(check(&state, &patch(240)).is_ok());
        assert_eq!(
            check(&state, &patch(45)),
            Err(Rejection::InvalidDuration(45))
        );
        assert_eq!(
            check(&state, &patch(605)),
            Err(Rejection::InvalidDuration(605))
        );
    }

    #[test]
    fn test_vote_rules() {
        let state = voting(3);
        let a = state.players[0].id.clone();
        let b = state.players[1].id.clone();
        let cast = |voter: &str, target: &str| Action::CastVote {
            voter_id: voter.to_string(),
            target_id: target.to_string(),
        };

        assert!(check(&state, &cast(&a, &b)).is_ok());
        assert_eq!(check(&state, &cast(&a, &a)), Err(Rejection::SelfVote));
        assert_eq!(
            check(&state, &cast(&a, "ghost")),
            Err(Rejection::UnknownPlayer("ghost".to_string()))
        );

        let mut rng = GameRng::new(1);
        let voted = apply(&state, cast(&a, &b), &mut rng);
        assert_eq!(
            check(&voted, &cast(&a, &b)),
            Err(Rejection::AlreadyVoted(a.clone()))
        );
    }

    #[test]
    fn test_self_vote_when_allowed() {
        let mut state = voting(3);
        state.settings.allow_self_vote = true;
        let a = state.players[0].id.clone();
        let action = Action::CastVote {
            voter_id: a.clone(),
            target_id: a,
        };
        assert!(check(&state, &action).is_ok());
    }

    #[test]
    fn test_show_result_waits_for_every_vote() {
        let state = voting(3);
        assert_eq!(
            check(&state, &Action::ShowResult),
            Err(Rejection::VotingIncomplete {
                cast: 0,
                expected: 3
            })
        );
    }

    #[test]
    fn test_view_history_needs_a_played_round() {
        let mut rng = GameRng::new(2);
        let state = apply(&voting(3), Action::ShowResult, &mut rng);
        assert!(check(&state, &Action::ViewHistory).is_ok());

        let setup = apply(&state, Action::BackToSetup, &mut rng);
        assert_eq!(setup.history.len(), 1);
        assert!(check(&setup, &Action::ViewHistory).is_ok());
    }

    #[test]
    fn test_step_gates() {
        let setup = setup_with(3);
        assert!(check(&setup, &Action::NextReveal).is_err());
        assert!(check(&setup, &Action::StartTimer).is_err());
        assert!(check(&setup, &Action::NextRound).is_err());
        assert!(check(&setup, &Action::BackToSetup).is_err());
        assert_eq!(
            check(&setup, &Action::ViewHistory),
            Err(Rejection::NoHistory)
        );
        assert!(check(&setup, &Action::LiarGuess { word_index: 0 }).is_ok());

        let mut discuss = setup_with(3);
        discuss.step = GameStep::Discuss;
        assert!(check(&discuss, &Action::StartTimer).is_ok());
        assert!(check(&discuss, &Action::UpdateTimer { elapsed: 1 }).is_ok());
        assert!(check(&discuss, &Action::StartVote).is_ok());
        assert!(check(&discuss, &Action::BackToSetup).is_ok());
        assert!(check(&discuss, &Action::ViewHistory).is_err());
    }
}
