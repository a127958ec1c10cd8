use super::GameState;
use crate::types::*;
use crate::words;
use rand::seq::SliceRandom;
use rand::Rng;

/// Roles and round metadata produced for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub roles: Vec<RoleAssignment>,
    pub round: Round,
}

/// Deal roles for a round.
///
/// The roster is shuffled (Fisher-Yates), words are drawn, then the liar
/// and/or spy seats are picked uniformly. Roles come back in shuffled order.
/// An empty roster gets no roles; hybrid mode with a single player has no
/// second seat for the spy, so only the liar is dealt.
pub fn assign_roles<R: Rng + ?Sized>(
    players: &[Player],
    settings: &Settings,
    round_no: u32,
    rng: &mut R,
) -> Assignment {
    let mut shuffled: Vec<&Player> = players.iter().collect();
    shuffled.shuffle(rng);

    let draw = words::draw_words(settings.category, settings.spy_similarity, rng);

    let (liar_index, spy_index) = if shuffled.is_empty() {
        (None, None)
    } else {
        let n = shuffled.len();
        match settings.mode {
            GameMode::Liar => (Some(rng.random_range(0..n)), None),
            GameMode::Spy => (None, Some(rng.random_range(0..n))),
            GameMode::Hybrid => {
                let liar = rng.random_range(0..n);
                let spy = (n > 1).then(|| loop {
                    let candidate = rng.random_range(0..n);
                    if candidate != liar {
                        break candidate;
                    }
                });
                (Some(liar), spy)
            }
        }
    };

    let roles = shuffled
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let (role, word) = if Some(index) == liar_index {
                (Role::Liar, None)
            } else if Some(index) == spy_index {
                (Role::Spy, Some(draw.spy_word.clone()))
            } else {
                (Role::Citizen, Some(draw.main_word.clone()))
            };
            RoleAssignment {
                player_id: player.id.clone(),
                role,
                word,
            }
        })
        .collect();

    let round = Round {
        round_no,
        main_word: draw.main_word.clone(),
        spy_word: settings.mode.has_spy().then(|| draw.spy_word.clone()),
        category: draw.category,
    };

    Assignment { roles, round }
}

impl GameState {
    pub(super) fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deal_round(1, rng);
    }

    pub(super) fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let round_no = self.round.as_ref().map_or(0, |r| r.round_no) + 1;
        self.deal_round(round_no, rng);
    }

    fn deal_round<R: Rng + ?Sized>(&mut self, round_no: u32, rng: &mut R) {
        let Assignment { roles, round } = assign_roles(&self.players, &self.settings, round_no, rng);
        tracing::debug!(
            round_no,
            mode = %self.settings.mode,
            category = %round.category,
            players = self.players.len(),
            "Dealt roles"
        );

        self.roles = roles;
        self.round = Some(round);
        self.step = GameStep::Reveal;
        self.reset_round_progress();
    }

    /// Move the reveal cursor to the next player, or on to discussion after the last one
    pub(super) fn next_reveal(&mut self) {
        if self.reveal_index + 1 < self.players.len() {
            self.reveal_index += 1;
        } else {
            self.step = GameStep::Discuss;
        }
    }
}
