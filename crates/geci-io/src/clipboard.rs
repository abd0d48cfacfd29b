use std::time::Duration;

use arboard::Clipboard;
use tokio::time;

/// Poll the system clipboard and hand every new non-empty text to the
/// callback. Repeated reads of the same content fire only once.
pub async fn watch_clipboard<F>(poll_interval: Duration, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut last_text = String::new();

    let mut interval = time::interval(poll_interval);

    loop {
        interval.tick().await;
        if let Ok(text) = clipboard.get_text()
            && !text.is_empty()
            && text != last_text
        {
            last_text = text.clone();
            on_text(text);
        }
    }
}
