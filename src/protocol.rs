use crate::state::GameState;
use crate::types::*;
use crate::view::{ResultSummary, TimerView};
use serde::{Deserialize, Serialize};

/// Everything a host can ask the state machine to do
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddPlayer {
        name: String,
    },
    RemovePlayer {
        id: PlayerId,
    },
    UpdatePlayerName {
        id: PlayerId,
        name: String,
    },
    UpdateSettings {
        settings: SettingsPatch,
    },
    StartGame,
    NextReveal,
    /// Skip the rest of the reveal and go straight to discussion
    StartDiscuss,
    StartTimer,
    PauseTimer,
    ResetTimer,
    UpdateTimer {
        elapsed: u32,
    },
    StartVote,
    CastVote {
        voter_id: VoterId,
        target_id: PlayerId,
    },
    ShowResult,
    NextRound,
    ViewHistory,
    BackToSetup,
    /// Liar's final guess at the citizens' word. Accepted, not scored.
    LiarGuess {
        word_index: usize,
    },
}

impl Action {
    /// Stable name used in logs and rejection messages
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "ADD_PLAYER",
            Action::RemovePlayer { .. } => "REMOVE_PLAYER",
            Action::UpdatePlayerName { .. } => "UPDATE_PLAYER_NAME",
            Action::UpdateSettings { .. } => "UPDATE_SETTINGS",
            Action::StartGame => "START_GAME",
            Action::NextReveal => "NEXT_REVEAL",
            Action::StartDiscuss => "START_DISCUSS",
            Action::StartTimer => "START_TIMER",
            Action::PauseTimer => "PAUSE_TIMER",
            Action::ResetTimer => "RESET_TIMER",
            Action::UpdateTimer { .. } => "UPDATE_TIMER",
            Action::StartVote => "START_VOTE",
            Action::CastVote { .. } => "CAST_VOTE",
            Action::ShowResult => "SHOW_RESULT",
            Action::NextRound => "NEXT_ROUND",
            Action::ViewHistory => "VIEW_HISTORY",
            Action::BackToSetup => "BACK_TO_SETUP",
            Action::LiarGuess { .. } => "LIAR_GUESS",
        }
    }
}

/// Messages a session publishes to whatever is rendering it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum HostMessage {
    Welcome {
        protocol: String,
        seed: u64,
        state: Box<GameState>,
        valid_transitions: Vec<GameStep>,
    },
    State {
        state: Box<GameState>,
        valid_transitions: Vec<GameStep>,
    },
    /// One discussion second elapsed
    Timer(TimerView),
    /// Round just closed
    Result(ResultSummary),
    Error {
        code: String,
        msg: String,
    },
}
