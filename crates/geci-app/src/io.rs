use std::sync::Arc;
use std::time::Duration;

use geci_core::script::contains_cjk;
use geci_types::{AppEvent, TextSource};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// One `:` prefixed control line from the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdinCommand {
    Detail(String),
    Speak(usize),
    Redraw,
    Quit,
}

/// Parse a control line. Returns None for ordinary text.
pub fn parse_command(line: &str) -> Option<StdinCommand> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(":d ") {
        let character = rest.trim();
        if character.is_empty() {
            return None;
        }
        return Some(StdinCommand::Detail(character.to_string()));
    }
    if let Some(rest) = trimmed.strip_prefix(":s ") {
        return rest.trim().parse().ok().map(StdinCommand::Speak);
    }

    match trimmed {
        ":r" => Some(StdinCommand::Redraw),
        ":q" => Some(StdinCommand::Quit),
        _ => None,
    }
}

pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (watch_clipboard, poll_interval) = {
        let config = state.config.read().await;
        (
            config.watch_clipboard,
            Duration::from_millis(config.poll_interval_ms),
        )
    };

    if watch_clipboard {
        tracing::info!("Starting clipboard watcher");

        let tx = event_tx.clone();
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = geci_io::clipboard::watch_clipboard(poll_interval, move |text| {
                    // Only Chinese text is worth annotating
                    if !contains_cjk(&text) {
                        return;
                    }
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let event = AppEvent::TextInput {
                            text,
                            source: TextSource::Clipboard,
                        };
                        if let Err(e) = tx.send(event).await {
                            tracing::error!("Failed to send clipboard text to app: {}", e);
                        }
                    });
                }) => {
                    if let Err(e) = result {
                        tracing::error!("Clipboard watcher error: {}", e);
                    }
                }
                _ = cancel_clone.cancelled() => {
                    tracing::info!("Clipboard watcher stopping");
                }
            }
        });
    }

    stdin_loop(cancel, event_tx).await
}

/// Interactive stdin: `:` lines are commands, anything else accumulates
/// until a blank line submits it as one text.
async fn stdin_loop(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = geci_io::stdin::stdin_lines();
    let mut buffer: Vec<String> = Vec::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Stdin reader stopping");
                return Ok(());
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(command) = parse_command(&line) {
                            dispatch_command(command, &cancel, &event_tx).await?;
                        } else if line.trim().is_empty() {
                            flush_buffer(&mut buffer, &event_tx).await?;
                        } else {
                            buffer.push(line);
                        }
                    }
                    None => {
                        // EOF on piped stdin; the session stays up for
                        // clipboard input until cancelled
                        flush_buffer(&mut buffer, &event_tx).await?;
                        cancel.cancelled().await;
                        return Ok(());
                    }
                }
            }
        }
    }
}

async fn dispatch_command(
    command: StdinCommand,
    cancel: &CancellationToken,
    event_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match command {
        StdinCommand::Detail(character) => {
            event_tx
                .send(AppEvent::CharacterDetailRequest(character))
                .await?;
        }
        StdinCommand::Speak(index) => {
            event_tx.send(AppEvent::SpeakLine(index)).await?;
        }
        StdinCommand::Redraw => {
            event_tx.send(AppEvent::Redraw).await?;
        }
        StdinCommand::Quit => {
            cancel.cancel();
        }
    }
    Ok(())
}

async fn flush_buffer(
    buffer: &mut Vec<String>,
    event_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if buffer.is_empty() {
        return Ok(());
    }
    let text = buffer.join("\n");
    buffer.clear();
    event_tx
        .send(AppEvent::TextInput {
            text,
            source: TextSource::Stdin,
        })
        .await?;
    Ok(())
}
