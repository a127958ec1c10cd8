use super::GameState;
use crate::types::*;

impl GameState {
    /// Start over from setup, keeping roster, settings and history
    pub(super) fn back_to_setup(&self) -> GameState {
        GameState {
            players: self.players.clone(),
            settings: self.settings.clone(),
            history: self.history.clone(),
            ..GameState::default()
        }
    }

    /// Steps reachable from `step` through the normal game flow
    pub fn valid_transitions(step: GameStep) -> Vec<GameStep> {
        use GameStep::*;

        let mut next = match step {
            Setup => vec![Reveal, History],
            Reveal => vec![Discuss],
            Discuss => vec![Vote],
            Vote => vec![Result],
            // Next round deals again and reveals
            Result => vec![Reveal, History],
            History => vec![],
        };

        // Back to setup works from anywhere but setup itself
        if step != Setup {
            next.push(Setup);
        }
        next
    }

    /// Check if moving from one step to another follows the game flow
    pub fn is_valid_transition(from: GameStep, to: GameStep) -> bool {
        Self::valid_transitions(from).contains(&to)
    }
}
