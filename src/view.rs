//! Read-only projections of [`GameState`] for whatever renders a step.
//!
//! Nothing here changes state; these are the numbers and lists each screen
//! of the pass-the-device flow shows.

use crate::state::{GameState, VoteTally};
use crate::types::*;
use serde::{Deserialize, Serialize};

// ========== Reveal ==========

/// Whose turn it is to look at their card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealView<'a> {
    pub player: &'a Player,
    pub role: Option<&'a RoleAssignment>,
    /// 1-based position in the reveal order
    pub position: usize,
    pub total: usize,
}

pub fn reveal_view(state: &GameState) -> Option<RevealView<'_>> {
    if state.step != GameStep::Reveal {
        return None;
    }
    let player = state.players.get(state.reveal_index)?;
    Some(RevealView {
        player,
        role: state.role_of(&player.id),
        position: state.reveal_index + 1,
        total: state.players.len(),
    })
}

// ========== Discussion ==========

/// Discussion clock as shown on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    pub elapsed: u32,
    pub remaining: u32,
    /// `mm:ss` of the remaining time
    pub clock: String,
    /// Share of the discussion used up, capped at 100
    pub progress_percent: u32,
    pub running: bool,
}

pub fn timer_view(state: &GameState) -> TimerView {
    let duration = state.settings.duration_sec;
    let remaining = duration.saturating_sub(state.elapsed_time);
    let progress_percent = if duration == 0 {
        100
    } else {
        let percent = u64::from(state.elapsed_time) * 100 / u64::from(duration);
        u32::try_from(percent.min(100)).unwrap_or(100)
    };

    TimerView {
        elapsed: state.elapsed_time,
        remaining,
        clock: format!("{:02}:{:02}", remaining / 60, remaining % 60),
        progress_percent,
        running: state.timer_running(),
    }
}

/// The citizens' word, unless the table chose to hide it during discussion
pub fn discussion_word(state: &GameState) -> Option<&str> {
    if state.settings.hide_word_during_discuss {
        return None;
    }
    state.round.as_ref().map(|r| r.main_word.as_str())
}

// ========== Voting ==========

/// Players `voter_id` may vote for
pub fn available_targets<'a>(state: &'a GameState, voter_id: &str) -> Vec<&'a Player> {
    state
        .players
        .iter()
        .filter(|p| state.settings.allow_self_vote || p.id != voter_id)
        .collect()
}

pub fn has_voted(state: &GameState, voter_id: &str) -> bool {
    state.votes.iter().any(|v| v.voter_id == voter_id)
}

/// First player in roster order who has not voted yet
pub fn next_voter(state: &GameState) -> Option<&Player> {
    state.players.iter().find(|p| !has_voted(state, &p.id))
}

// ========== Results ==========

/// One line of the post-round role reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedRole {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Option<Role>,
    pub votes: u32,
}

/// Everything the result screen shows for the round that just closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub round_no: u32,
    pub winner: Winner,
    pub eliminated_id: Option<PlayerId>,
    pub eliminated_name: Option<String>,
    pub eliminated_role: Option<Role>,
    pub eliminated_votes: u32,
    pub main_word: String,
    pub spy_word: Option<String>,
    pub liar_name: Option<String>,
    pub spy_name: Option<String>,
    pub roles: Vec<RevealedRole>,
}

/// Summarize the latest history entry against the current roster and roles
pub fn result_summary(state: &GameState) -> Option<ResultSummary> {
    let record = state.last_result()?;
    let tally = VoteTally::new(&state.players, &record.votes);
    let name_of = |id: &Option<PlayerId>| {
        id.as_deref()
            .and_then(|id| state.player(id))
            .map(|p| p.name.clone())
    };

    let roles = state
        .players
        .iter()
        .map(|p| RevealedRole {
            player_id: p.id.clone(),
            name: p.name.clone(),
            role: state.role_of(&p.id).map(|r| r.role),
            votes: tally.get(&p.id),
        })
        .collect();

    Some(ResultSummary {
        round_no: record.round_no,
        winner: record.winner,
        eliminated_id: record.eliminated_id.clone(),
        eliminated_name: name_of(&record.eliminated_id),
        eliminated_role: record
            .eliminated_id
            .as_deref()
            .and_then(|id| state.role_of(id))
            .map(|r| r.role),
        eliminated_votes: record
            .eliminated_id
            .as_deref()
            .map_or(0, |id| tally.get(id)),
        main_word: record.main_word.clone(),
        spy_word: record.spy_word.clone(),
        liar_name: name_of(&record.liar_id),
        spy_name: name_of(&record.spy_id),
        roles,
    })
}

// ========== History ==========

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub rounds: usize,
    pub citizen_wins: usize,
    pub liar_wins: usize,
    pub spy_wins: usize,
    pub draws: usize,
}

pub fn history_summary(history: &[RoundHistory]) -> HistorySummary {
    history
        .iter()
        .fold(HistorySummary::default(), |mut summary, record| {
            summary.rounds += 1;
            match record.winner {
                Winner::Citizen => summary.citizen_wins += 1,
                Winner::Liar => summary.liar_wins += 1,
                Winner::Spy => summary.spy_wins += 1,
                Winner::None => summary.draws += 1,
            }
            summary
        })
}
