use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak-ng".to_string()
    }
}

fn default_args() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["-v".to_string(), "Tingting".to_string()]
    } else {
        vec!["-v".to_string(), "cmn".to_string()]
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Text-to-speech command; receives `args` then the line to speak
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            args: default_args(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self::new()
    }
}
