use std::io::Write;
use std::sync::Arc;

use geci_config::Config;
use geci_types::AppEvent;
use kanal::AsyncReceiver;
use tokio::sync::RwLock;

use crate::render::RenderState;

/// Terminal view loop: fold display events into the render state and
/// repaint stdout whenever something visible changed.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (ui, colors) = {
        let config = config.read().await;
        let colors = config.ui.colors && atty::is(atty::Stream::Stdout);
        (config.ui.clone(), colors)
    };

    let mut view = RenderState::new();

    loop {
        let event = app_to_ui_rx.recv().await?;

        if let AppEvent::SpeechFinished { index, ok: false } = &event {
            tracing::warn!("Speech for line {index} did not finish cleanly");
        }

        if view.apply(&event) {
            let frame = view.render(&ui, colors);
            let mut stdout = std::io::stdout();
            if colors {
                // Repaint in place on a real terminal
                write!(stdout, "\x1b[2J\x1b[H{frame}")?;
            } else {
                write!(stdout, "{frame}")?;
            }
            stdout.flush()?;
        }
    }
}
