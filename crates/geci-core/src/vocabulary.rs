use serde::{Deserialize, Serialize};

/// One character record from a tier file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub character: String,
    /// Reading with tone marks ("nǐ")
    pub phonetic: String,
    /// Reading with tone numbers ("ni3")
    pub phonetic_plain: String,
    pub definition: String,
    /// Proficiency band, 1 = most common
    pub tier: u8,
}

/// Read-only character store built from tier files at startup
pub trait Vocabulary: Send + Sync {
    /// Look up the entry for a single character
    fn entry(&self, character: &str) -> Option<&VocabularyEntry>;

    /// Tier of a character, None if absent from every loaded tier
    fn tier(&self, character: &str) -> Option<u8> {
        self.entry(character).map(|e| e.tier)
    }

    /// Number of distinct characters loaded
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
