use std::sync::Arc;

use geci_core::annotate::LanguageAnnotator;
use geci_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// Gloss the text from local data, paint immediately, then fan out one
/// task per missing phonetic and per unique untranslated line.
pub async fn handle_text_input(
    state: Arc<AppState>,
    text: String,
    annotator: &Arc<dyn LanguageAnnotator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let generation = state.next_generation();
    let annotation = annotator.gloss(&text);

    {
        let mut lines = state.lines.write().await;
        *lines = annotation
            .lines
            .iter()
            .map(|line| line.source.clone())
            .collect();
    }

    let pending_characters = annotation.pending_characters();
    let pending_lines = annotation.pending_lines();
    tracing::debug!(
        "Glossed {} lines ({} characters, {} translations pending)",
        annotation.lines.len(),
        pending_characters.len(),
        pending_lines.len()
    );

    app_to_ui_tx
        .send(AppEvent::ShowAnnotation {
            generation,
            annotation,
        })
        .await?;

    for character in pending_characters {
        let annotator = annotator.clone();
        let tx = app_to_ui_tx.clone();
        tokio::spawn(async move {
            let phonetic = annotator.resolve_phonetic(&character).await;
            if phonetic.is_empty() {
                // Failed lookup, cell keeps its unresolved marker
                return;
            }
            let event = AppEvent::PhoneticResolved {
                character,
                phonetic,
            };
            if let Err(e) = tx.send(event).await {
                tracing::error!("Failed to send phonetic result: {}", e);
            }
        });
    }

    // Repeated lines share one lookup and fan out to every index
    for (source, indexes) in pending_lines {
        let annotator = annotator.clone();
        let tx = app_to_ui_tx.clone();
        tokio::spawn(async move {
            let translation = annotator.translate_line(&source).await;
            for index in indexes {
                let event = AppEvent::LineTranslated {
                    generation,
                    index,
                    translation: translation.clone(),
                };
                if let Err(e) = tx.send(event).await {
                    tracing::error!("Failed to send line translation: {}", e);
                    return;
                }
            }
        });
    }

    Ok(())
}
