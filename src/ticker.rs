use crate::session::Session;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn a background task that advances the discussion timer once per tick.
///
/// The task wakes up every `tick_interval` for the lifetime of the session;
/// [`Session::tick`] decides whether the clock actually moves.
pub fn spawn_discussion_ticker(session: Arc<Session>) -> JoinHandle<()> {
    let interval = session.config().tick_interval;
    tracing::debug!(interval_ms = interval.as_millis() as u64, "Discussion ticker started");

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            session.tick().await;
        }
    })
}
