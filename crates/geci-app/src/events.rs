use std::sync::Arc;

use geci_core::annotate::LanguageAnnotator;
use geci_speech::SpeechEngine;
use geci_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod char_detail;
pub mod speak_line;
pub mod text_input;

use char_detail::handle_character_detail;
use speak_line::handle_speak_line;
use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    annotator: Arc<dyn LanguageAnnotator>,
    speech: Option<SpeechEngine>,
) -> anyhow::Result<()> {
    tracing::debug!(
        "Event loop started for language '{}'",
        annotator.language_code()
    );

    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(
            state.clone(),
            &annotator,
            speech.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    annotator: &Arc<dyn LanguageAnnotator>,
    speech: Option<&SpeechEngine>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput { text, source } => {
            tracing::info!(
                "Processing {} chars from {:?}",
                text.chars().count(),
                source
            );
            handle_text_input(state, text, annotator, app_to_ui_tx).await?;
        }
        AppEvent::CharacterDetailRequest(character) => {
            tracing::debug!("Detail requested for '{character}'");
            handle_character_detail(character, annotator, app_to_ui_tx).await?;
        }
        AppEvent::SpeakLine(index) => {
            handle_speak_line(state, index, speech, app_to_ui_tx).await?;
        }
        AppEvent::Redraw => {
            app_to_ui_tx.send(AppEvent::Redraw).await?;
        }
        // Emitted by the handlers above, consumed by the view side
        AppEvent::ShowAnnotation { .. }
        | AppEvent::PhoneticResolved { .. }
        | AppEvent::LineTranslated { .. }
        | AppEvent::ShowCharacterDetail(_)
        | AppEvent::SpeechStarted { .. }
        | AppEvent::SpeechFinished { .. } => {}
    }

    Ok(())
}
