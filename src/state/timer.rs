use super::GameState;

impl GameState {
    pub(super) fn start_timer(&mut self) {
        self.timer_started = true;
        self.timer_paused = false;
    }

    /// Pause and resume share one action
    pub(super) fn toggle_pause(&mut self) {
        self.timer_paused = !self.timer_paused;
    }

    pub(super) fn reset_timer(&mut self) {
        self.elapsed_time = 0;
        self.timer_started = false;
        self.timer_paused = false;
    }

    /// Whether a discussion tick should advance the clock
    pub fn timer_running(&self) -> bool {
        self.timer_started && !self.timer_paused
    }
}
