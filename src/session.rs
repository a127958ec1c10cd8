use crate::config::SessionConfig;
use crate::guard::{self, Rejection};
use crate::protocol::{Action, HostMessage};
use crate::rng::GameRng;
use crate::state::{apply, GameState};
use crate::types::GameStep;
use crate::view;
use tokio::sync::{broadcast, Mutex, RwLock};

pub const PROTOCOL_VERSION: &str = "1";

/// One table's game, shared between the action reader and the timer task
pub struct Session {
    state: RwLock<GameState>,
    rng: Mutex<GameRng>,
    config: SessionConfig,
    /// Every state change and timer tick is published here; slow
    /// subscribers may miss messages
    pub broadcast: broadcast::Sender<HostMessage>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::info!(seed = rng.seed(), strict = config.strict, "Session created");

        let (tx, _rx) = broadcast::channel(100);
        Self {
            state: RwLock::new(GameState::with_settings(config.settings.clone())),
            rng: Mutex::new(rng),
            config,
            broadcast: tx,
        }
    }

    pub async fn seed(&self) -> u64 {
        self.rng.lock().await.seed()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn snapshot(&self) -> GameState {
        self.state.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HostMessage> {
        self.broadcast.subscribe()
    }

    /// Greeting for a newly attached renderer
    pub async fn welcome(&self) -> HostMessage {
        let state = self.snapshot().await;
        HostMessage::Welcome {
            protocol: PROTOCOL_VERSION.to_string(),
            seed: self.seed().await,
            valid_transitions: GameState::valid_transitions(state.step),
            state: Box::new(state),
        }
    }

    /// Apply an action, checking the screen preconditions first when strict.
    ///
    /// New player names are trimmed the way the setup screen enters them;
    /// renames are stored as typed.
    pub async fn dispatch(&self, action: Action) -> Result<GameState, Rejection> {
        let action = match action {
            Action::AddPlayer { name } => Action::AddPlayer {
                name: name.trim().to_string(),
            },
            other => other,
        };
        let mut state = self.state.write().await;

        if self.config.strict {
            if let Err(rejection) = guard::check(&state, &action) {
                tracing::warn!(
                    action = action.name(),
                    step = %state.step,
                    code = rejection.code(),
                    "Action rejected: {}",
                    rejection
                );
                return Err(rejection);
            }
        }

        Ok(self.commit(&mut state, action).await)
    }

    /// Apply an action without any precondition checks
    pub async fn dispatch_unchecked(&self, action: Action) -> GameState {
        let mut state = self.state.write().await;
        self.commit(&mut state, action).await
    }

    async fn commit(&self, state: &mut GameState, action: Action) -> GameState {
        let name = action.name();
        let closes_round = matches!(action, Action::ShowResult);

        let next = {
            let mut rng = self.rng.lock().await;
            apply(state, action, &mut *rng)
        };

        if next.step != state.step {
            tracing::info!(action = name, from = %state.step, to = %next.step, "Step changed");
        } else {
            tracing::debug!(action = name, step = %next.step, "Action applied");
        }
        *state = next.clone();

        // Ignore send errors (nobody listening is fine)
        let _ = self.broadcast.send(HostMessage::State {
            state: Box::new(next.clone()),
            valid_transitions: GameState::valid_transitions(next.step),
        });
        if closes_round {
            if let Some(summary) = view::result_summary(&next) {
                tracing::info!(
                    round_no = summary.round_no,
                    winner = ?summary.winner,
                    "Round result"
                );
                let _ = self.broadcast.send(HostMessage::Result(summary));
            }
        }

        next
    }

    /// Advance the discussion clock by one second.
    ///
    /// Does nothing outside discussion or while the timer is stopped or
    /// paused. Returns the new elapsed time when a tick was applied.
    pub async fn tick(&self) -> Option<u32> {
        let mut state = self.state.write().await;
        if state.step != GameStep::Discuss || !state.timer_running() {
            return None;
        }

        let elapsed = state.elapsed_time.saturating_add(1);
        let next = {
            let mut rng = self.rng.lock().await;
            apply(&state, Action::UpdateTimer { elapsed }, &mut *rng)
        };
        *state = next;

        let timer = view::timer_view(&state);
        if elapsed == state.settings.duration_sec {
            tracing::info!(elapsed, "Discussion time is up");
        }
        let _ = self.broadcast.send(HostMessage::Timer(timer));

        Some(elapsed)
    }
}
