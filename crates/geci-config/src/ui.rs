use serde::{Deserialize, Serialize};

fn default_colors() -> bool {
    true
}

fn default_show_phonetics() -> bool {
    true
}

fn default_show_tiers() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// ANSI tier colors (only applied when stdout is a terminal)
    #[serde(default = "default_colors")]
    pub colors: bool,
    #[serde(default = "default_show_phonetics")]
    pub show_phonetics: bool,
    #[serde(default = "default_show_tiers")]
    pub show_tiers: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            colors: default_colors(),
            show_phonetics: default_show_phonetics(),
            show_tiers: default_show_tiers(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}
