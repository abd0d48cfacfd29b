use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_source_lang() -> String {
    "zh-CN".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        let enabled = env::var("GECI_LOOKUP_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let api_url = env::var("GECI_LOOKUP_URL").unwrap_or_else(|_| default_api_url());
        let source_lang = env::var("GECI_SOURCE_LANG").unwrap_or_else(|_| default_source_lang());
        let target_lang = env::var("GECI_TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        Self {
            enabled,
            api_url,
            source_lang,
            target_lang,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}
