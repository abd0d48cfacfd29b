use std::sync::Arc;

use geci_core::annotate::LanguageAnnotator;
use geci_types::AppEvent;
use kanal::AsyncSender;

/// Resolve a single character off the event loop so a slow lookup
/// never blocks new text input.
pub async fn handle_character_detail(
    character: String,
    annotator: &Arc<dyn LanguageAnnotator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let annotator = annotator.clone();
    let tx = app_to_ui_tx.clone();

    tokio::spawn(async move {
        let detail = annotator.character_detail(&character).await;
        if let Err(e) = tx.send(AppEvent::ShowCharacterDetail(detail)).await {
            tracing::error!("Failed to send character detail: {}", e);
        }
    });

    Ok(())
}
