use std::sync::Arc;

use geci_speech::SpeechEngine;
use geci_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_speak_line(
    state: Arc<AppState>,
    index: usize,
    speech: Option<&SpeechEngine>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(engine) = speech else {
        tracing::warn!("Speech requested but no engine is configured");
        return Ok(());
    };

    let (line, total) = {
        let lines = state.lines.read().await;
        (lines.get(index).cloned(), lines.len())
    };

    let Some(line) = line else {
        tracing::warn!("Speech requested for line {index}, but only {total} lines are loaded");
        return Ok(());
    };
    if line.trim().is_empty() {
        return Ok(());
    }

    app_to_ui_tx.send(AppEvent::SpeechStarted { index }).await?;

    let engine = engine.clone();
    let tx = app_to_ui_tx.clone();
    tokio::spawn(async move {
        let ok = match engine.speak(&line).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Speech failed: {}", e);
                false
            }
        };
        if let Err(e) = tx.send(AppEvent::SpeechFinished { index, ok }).await {
            tracing::error!("Failed to send speech status: {}", e);
        }
    });

    Ok(())
}
