use super::GameState;
use crate::types::*;
use rand::Rng;

/// Generate a fresh player id.
///
/// All 128 bits of the ULID come from the session RNG, so a seed replays the
/// same ids. The timestamp field carries no wall-clock meaning.
fn generate_player_id<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
    ulid::Ulid::from(rng.random::<u128>()).to_string()
}

impl GameState {
    /// Append a player; names are taken as-is
    pub(super) fn add_player<R: Rng + ?Sized>(&mut self, name: String, rng: &mut R) {
        let id = loop {
            let id = generate_player_id(rng);
            if self.player(&id).is_none() {
                break id;
            }
        };
        tracing::debug!(player_id = %id, name = %name, "Adding player");
        self.players.push(Player { id, name });
    }

    pub(super) fn remove_player(&mut self, id: &str) {
        self.players.retain(|p| p.id != id);
    }

    pub(super) fn rename_player(&mut self, id: &str, name: String) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            player.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::Action;
    use crate::rng::GameRng;
    use crate::state::tests::with_players;
    use crate::state::{apply, GameState};
    use std::collections::HashSet;

    #[test]
    fn test_add_player_generates_unique_ids() {
        let mut rng = GameRng::new(5);
        let state = with_players(&["Alice", "Bob", "Alice", "Dora", "Eve"], &mut rng);

        assert_eq!(state.players.len(), 5);
        let ids: HashSet<_> = state.players.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 5);
        // Duplicate names are fine
        assert_eq!(state.players[0].name, state.players[2].name);
    }

    #[test]
    fn test_add_player_keeps_roster_order() {
        let mut rng = GameRng::new(5);
        let state = with_players(&["Alice", "Bob", "Carol"], &mut rng);
        let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_remove_player() {
        let mut rng = GameRng::new(5);
        let state = with_players(&["Alice", "Bob", "Carol"], &mut rng);
        let bob = state.players[1].id.clone();

        let state = apply(&state, Action::RemovePlayer { id: bob.clone() }, &mut rng);
        assert_eq!(state.players.len(), 2);
        assert!(state.player(&bob).is_none());
    }

    #[test]
    fn test_remove_unknown_player_is_harmless() {
        let mut rng = GameRng::new(5);
        let state = with_players(&["Alice"], &mut rng);
        let after = apply(
            &state,
            Action::RemovePlayer {
                id: "nobody".to_string(),
            },
            &mut rng,
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_rename_player_in_place() {
        let mut rng = GameRng::new(5);
        let state = with_players(&["Alice", "Bob"], &mut rng);
        let id = state.players[0].id.clone();

        let state = apply(
            &state,
            Action::UpdatePlayerName {
                id: id.clone(),
                name: String::new(),
            },
            &mut rng,
        );
        assert_eq!(state.players[0].id, id);
        assert_eq!(state.players[0].name, "");
        assert_eq!(state.players[1].name, "Bob");
    }

    #[test]
    fn test_add_player_on_empty_state() {
        let mut rng = GameRng::new(5);
        let state = apply(
            &GameState::new(),
            Action::AddPlayer {
                name: "Solo".to_string(),
            },
            &mut rng,
        );
        assert_eq!(state.players.len(), 1);
        assert_eq!(state.players[0].id.len(), 26);
    }

    #[test]
    fn test_player_ids_replay_from_seed() {
        let roster = |seed| {
            let mut rng = GameRng::new(seed);
            with_players(&["Alice", "Bob", "Carol"], &mut rng)
        };

        assert_eq!(roster(21), roster(21));
        assert_ne!(roster(21).players[0].id, roster(22).players[0].id);
    }
}
