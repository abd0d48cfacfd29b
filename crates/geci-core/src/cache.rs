use std::collections::HashMap;
use std::sync::RwLock;

/// Per-character lookup results, each field resolved independently
#[derive(Debug, Clone, Default)]
pub struct CharacterResolution {
    pub phonetic: Option<String>,
    pub translation: Option<String>,
}

/// Session-scoped memo for external lookups. Two independent tables:
/// per-character sub-lookups and whole-line translations. Entries only
/// grow; puts merge field-wise and never replace a partial entry.
/// Empty values are not stored, so a failed lookup can be retried.
pub struct ResolutionCache {
    characters: RwLock<HashMap<String, CharacterResolution>>,
    lines: RwLock<HashMap<String, String>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self {
            characters: RwLock::new(HashMap::new()),
            lines: RwLock::new(HashMap::new()),
        }
    }

    /// Preload line translations known ahead of time
    pub fn seed_lines<'a, I>(&self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut lines = self.lines.write().unwrap();
        for (line, translation) in pairs {
            lines.insert(line.to_string(), translation.to_string());
        }
    }

    pub fn phonetic(&self, character: &str) -> Option<String> {
        self.characters
            .read()
            .unwrap()
            .get(character)
            .and_then(|r| r.phonetic.clone())
    }

    pub fn char_translation(&self, character: &str) -> Option<String> {
        self.characters
            .read()
            .unwrap()
            .get(character)
            .and_then(|r| r.translation.clone())
    }

    pub fn resolution(&self, character: &str) -> Option<CharacterResolution> {
        self.characters.read().unwrap().get(character).cloned()
    }

    pub fn line(&self, line: &str) -> Option<String> {
        self.lines.read().unwrap().get(line).cloned()
    }

    pub fn put_phonetic(&self, character: &str, phonetic: &str) {
        if phonetic.is_empty() {
            return;
        }
        let mut characters = self.characters.write().unwrap();
        characters.entry(character.to_string()).or_default().phonetic =
            Some(phonetic.to_string());
    }

    pub fn put_char_translation(&self, character: &str, translation: &str) {
        if translation.is_empty() {
            return;
        }
        let mut characters = self.characters.write().unwrap();
        characters
            .entry(character.to_string())
            .or_default()
            .translation = Some(translation.to_string());
    }

    pub fn put_line(&self, line: &str, translation: &str) {
        if translation.is_empty() {
            return;
        }
        let mut lines = self.lines.write().unwrap();
        lines.insert(line.to_string(), translation.to_string());
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}
