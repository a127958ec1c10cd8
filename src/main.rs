use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liarspy::{config::SessionConfig, host, session::Session, ticker};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr, stdout carries the host messages
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liarspy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting liarspy...");

    let session = Arc::new(Session::new(SessionConfig::from_env()));
    let ticker = ticker::spawn_discussion_ticker(session.clone());

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    if let Err(e) = host::serve(&session, input, &mut output).await {
        tracing::error!("Host loop failed: {}", e);
    }

    ticker.abort();
}
