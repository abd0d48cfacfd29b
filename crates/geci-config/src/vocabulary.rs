use std::env;

use serde::{Deserialize, Serialize};

fn default_tier_order() -> Vec<u8> {
    vec![1, 2, 3, 4, 5, 6]
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Directory of hsk<N>.tsv files overriding the embedded data
    pub data_dir: Option<String>,
    /// Tier load order. Later tiers overwrite earlier ones on collision,
    /// so reverse this to give low tiers precedence.
    #[serde(default = "default_tier_order")]
    pub tier_order: Vec<u8>,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        let data_dir = env::var("GECI_VOCAB_DIR").ok();

        Self {
            data_dir,
            tier_order: default_tier_order(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tier_order: default_tier_order(),
        }
    }
}
