use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;
use self::vocabulary::VocabularyConfig;

pub mod lookup;
pub mod speech;
pub mod ui;
pub mod vocabulary;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub lookup: LookupConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,

    /// Watch the system clipboard for Chinese text
    pub watch_clipboard: bool,
    /// Clipboard poll interval
    pub poll_interval_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let watch_clipboard = env::var("GECI_WATCH_CLIPBOARD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let poll_interval_ms = env::var("GECI_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500); // 500ms default

        Config {
            vocabulary: VocabularyConfig::new(),
            lookup: LookupConfig::new(),
            speech: SpeechConfig::new(),
            ui: UiConfig::new(),

            watch_clipboard,
            poll_interval_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
