//! JSON-lines host loop: one [`Action`] per input line, [`HostMessage`]s out.
//!
//! Replies to an action are written straight from the result of
//! [`Session::dispatch`], so every line read gets its answer even when the
//! output drains slowly. Only timer ticks arrive through the session's
//! broadcast channel; a lagging reader skips stale ticks.

use crate::protocol::{Action, HostMessage};
use crate::session::Session;
use crate::state::GameState;
use crate::view;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::error::RecvError;

/// Serve `session` until `input` is exhausted
pub async fn serve<R, W>(session: &Session, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut timers = session.subscribe();
    let mut lines = input.lines();

    write_message(output, &session.welcome().await).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                for msg in respond(session, &line).await {
                    write_message(output, &msg).await?;
                }
            }
            msg = timers.recv() => match msg {
                Ok(msg @ HostMessage::Timer(_)) => write_message(output, &msg).await?,
                // State and result lines are written from the dispatch result
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Skipped stale broadcast messages");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("Input closed, ending session");
    Ok(())
}

/// Messages answering one input line
pub async fn respond(session: &Session, line: &str) -> Vec<HostMessage> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let action: Action = match serde_json::from_str(line) {
        Ok(action) => action,
        Err(e) => {
            tracing::warn!("Unparseable action: {}", e);
            return vec![error("PARSE_ERROR", e.to_string())];
        }
    };
    let closes_round = matches!(action, Action::ShowResult);

    match session.dispatch(action).await {
        Ok(state) => {
            let summary = closes_round
                .then(|| view::result_summary(&state))
                .flatten();
            let mut replies = vec![HostMessage::State {
                valid_transitions: GameState::valid_transitions(state.step),
                state: Box::new(state),
            }];
            replies.extend(summary.map(HostMessage::Result));
            replies
        }
        Err(rejection) => vec![error(rejection.code(), rejection.to_string())],
    }
}

fn error(code: &str, msg: String) -> HostMessage {
    HostMessage::Error {
        code: code.to_string(),
        msg,
    }
}

async fn write_message<W: AsyncWrite + Unpin>(output: &mut W, msg: &HostMessage) -> io::Result<()> {
    let mut line = serde_json::to_string(msg)?;
    line.push('\n');
    output.write_all(line.as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn session(strict: bool) -> Session {
        Session::new(SessionConfig {
            seed: Some(17),
            strict,
            ..SessionConfig::default()
        })
    }

    async fn run_lines(session: &Session, input: &str) -> Vec<serde_json::Value> {
        let mut output = Vec::new();
        serve(session, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_every_action_gets_a_state_line() {
        let session = session(false);
        let input: String = (0..300)
            .map(|i| format!("{{\"type\":\"ADD_PLAYER\",\"name\":\"P{}\"}}\n", i))
            .collect();

        let messages = run_lines(&session, &input).await;
        assert_eq!(messages[0]["t"], "welcome");
        let states = messages.iter().filter(|m| m["t"] == "state").count();
        assert_eq!(states, 300);
        assert_eq!(session.snapshot().await.players.len(), 300);
    }

    #[tokio::test]
    async fn test_errors_answer_their_own_lines() {
        let session = session(true);
        let input = "not json\n\n{\"type\":\"START_GAME\"}\n{\"type\":\"ADD_PLAYER\",\"name\":\"A\"}\n";

        let messages = run_lines(&session, input).await;
        let kinds: Vec<_> = messages
            .iter()
            .map(|m| m["t"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["welcome", "error", "error", "state"]);
        assert_eq!(messages[1]["code"], "PARSE_ERROR");
        assert_eq!(messages[2]["code"], "NOT_ENOUGH_PLAYERS");
        assert_eq!(messages[3]["state"]["players"][0]["name"], "A");
    }

    #[tokio::test]
    async fn test_show_result_is_followed_by_summary() {
        let session = session(false);
        let messages = respond(&session, "{\"type\":\"SHOW_RESULT\"}").await;

        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], HostMessage::State { .. }));
        match &messages[1] {
            HostMessage::Result(summary) => assert_eq!(summary.round_no, 1),
            other => panic!("Expected Result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_lines_are_ignored() {
        let session = session(true);
        assert!(respond(&session, "   ").await.is_empty());
    }
}
