use std::collections::HashMap;
use std::path::Path;

use geci_core::vocabulary::{LoadError, Vocabulary, VocabularyEntry};

/// Character store assembled from HSK tier files. Tiers are merged in
/// the order given; on collision the later tier's record wins.
pub struct HskVocabulary {
    entries: HashMap<String, VocabularyEntry>,
}

impl HskVocabulary {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load the tier data bundled with the crate
    pub fn load_embedded(tier_order: &[u8]) -> Self {
        let mut vocab = Self::new();

        for &tier in tier_order {
            let Some(data) = embedded_tier(tier) else {
                tracing::warn!("No embedded data for tier {tier}, skipping");
                continue;
            };
            vocab.merge_tier(tier, data);
        }

        tracing::info!("Loaded {} characters from embedded tiers", vocab.entries.len());
        vocab
    }

    /// Load hsk<N>.tsv files from a directory. A missing or unreadable
    /// tier file is skipped; it shrinks coverage but never fails the load.
    pub fn load_dir(dir: &Path, tier_order: &[u8]) -> Result<Self, LoadError> {
        if !dir.is_dir() {
            return Err(LoadError::FileNotFound(dir.display().to_string()));
        }

        let mut vocab = Self::new();

        for &tier in tier_order {
            let path = dir.join(format!("hsk{tier}.tsv"));
            match std::fs::read_to_string(&path) {
                Ok(data) => vocab.merge_tier(tier, &data),
                Err(e) => {
                    tracing::warn!("Skipping tier {tier} ({}): {e}", path.display());
                }
            }
        }

        if vocab.entries.is_empty() {
            return Err(LoadError::InvalidFormat(format!(
                "no usable tier files in {}",
                dir.display()
            )));
        }

        tracing::info!(
            "Loaded {} characters from {}",
            vocab.entries.len(),
            dir.display()
        );
        Ok(vocab)
    }

    /// Parse one tier's records into the store. Record format is
    /// tab-delimited: character, numbered pinyin, accented pinyin,
    /// definition, part of speech. Blank lines and lines with fewer
    /// than five fields are skipped.
    fn merge_tier(&mut self, tier: u8, data: &str) {
        let mut loaded = 0usize;
        let mut skipped = 0usize;

        for line in data.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 5 {
                skipped += 1;
                continue;
            }

            let entry = VocabularyEntry {
                character: parts[0].to_string(),
                phonetic_plain: parts[1].to_string(),
                phonetic: parts[2].to_string(),
                definition: parts[3].to_string(),
                tier,
            };
            self.entries.insert(entry.character.clone(), entry);
            loaded += 1;
        }

        if skipped > 0 {
            tracing::warn!("Tier {tier}: skipped {skipped} malformed records");
        }
        tracing::debug!("Tier {tier}: loaded {loaded} records");
    }
}

impl Default for HskVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary for HskVocabulary {
    fn entry(&self, character: &str) -> Option<&VocabularyEntry> {
        self.entries.get(character)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn embedded_tier(tier: u8) -> Option<&'static str> {
    match tier {
        1 => Some(include_str!("../data/hsk1.tsv")),
        2 => Some(include_str!("../data/hsk2.tsv")),
        3 => Some(include_str!("../data/hsk3.tsv")),
        4 => Some(include_str!("../data/hsk4.tsv")),
        5 => Some(include_str!("../data/hsk5.tsv")),
        6 => Some(include_str!("../data/hsk6.tsv")),
        _ => None,
    }
}
