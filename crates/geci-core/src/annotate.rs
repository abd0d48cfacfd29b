use std::collections::HashSet;

use futures_util::future::join_all;
use serde::Serialize;

/// One glossed character cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedCharacter {
    pub character: String,
    /// Empty until resolved for characters outside the vocabulary
    pub phonetic: String,
    pub definition: String,
    /// None means unknown: absent from the vocabulary at resolution time
    pub tier: Option<u8>,
}

/// A character cell or a run of layout whitespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineItem {
    Layout(String),
    Annotated(AnnotatedCharacter),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTranslation {
    pub text: String,
    /// True when the text is a fallback (the untranslated original)
    pub degraded: bool,
}

impl LineTranslation {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            degraded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    pub source: String,
    pub items: Vec<LineItem>,
    /// None until the line translation resolves; blank lines get an
    /// empty translation immediately
    pub translation: Option<LineTranslation>,
}

impl AnnotatedLine {
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }
}

/// Full annotation of one input text, one entry per input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedText {
    pub lines: Vec<AnnotatedLine>,
}

impl AnnotatedText {
    /// One translation string per input line, in input order.
    /// Unresolved lines yield an empty string.
    pub fn line_translations(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.translation
                    .as_ref()
                    .map(|t| t.text.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Unique characters still missing a phonetic, in first-seen order
    pub fn pending_characters(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        for line in &self.lines {
            for item in &line.items {
                if let LineItem::Annotated(ch) = item
                    && ch.tier.is_none()
                    && ch.phonetic.is_empty()
                    && seen.insert(ch.character.clone())
                {
                    pending.push(ch.character.clone());
                }
            }
        }
        pending
    }

    /// Unique untranslated non-blank lines with the indexes they occupy,
    /// in first-seen order
    pub fn pending_lines(&self) -> Vec<(String, Vec<usize>)> {
        let mut order: Vec<(String, Vec<usize>)> = Vec::new();
        for (index, line) in self.lines.iter().enumerate() {
            if line.is_blank() || line.translation.is_some() {
                continue;
            }
            match order.iter_mut().find(|(source, _)| source == &line.source) {
                Some((_, indexes)) => indexes.push(index),
                None => order.push((line.source.clone(), vec![index])),
            }
        }
        order
    }

    /// Fill the phonetic of every unknown cell holding `character`.
    /// Returns true if any cell changed.
    pub fn apply_phonetic(&mut self, character: &str, phonetic: &str) -> bool {
        if phonetic.is_empty() {
            return false;
        }
        let mut changed = false;
        for line in &mut self.lines {
            for item in &mut line.items {
                if let LineItem::Annotated(ch) = item
                    && ch.tier.is_none()
                    && ch.character == character
                    && ch.phonetic != phonetic
                {
                    ch.phonetic = phonetic.to_string();
                    changed = true;
                }
            }
        }
        changed
    }

    /// Set the translation slot of one line. Returns true if the slot changed.
    pub fn apply_line_translation(&mut self, index: usize, translation: &LineTranslation) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                let changed = line.translation.as_ref() != Some(translation);
                line.translation = Some(translation.clone());
                changed
            }
            None => false,
        }
    }

    /// True when every non-blank line resolved to a fallback translation
    pub fn all_translations_degraded(&self) -> bool {
        let mut seen_degraded = false;
        for line in &self.lines {
            if line.is_blank() {
                continue;
            }
            match &line.translation {
                Some(t) if t.degraded => seen_degraded = true,
                _ => return false,
            }
        }
        seen_degraded
    }
}

/// Detail view for one character: reading plus standalone translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    pub character: String,
    pub phonetic: String,
    pub translation: String,
    pub tier: Option<u8>,
}

/// Text annotation interface for language implementations
#[async_trait::async_trait]
pub trait LanguageAnnotator: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", etc.)
    fn language_code(&self) -> &str;

    /// Normalize raw input before any splitting
    fn normalize(&self, text: &str) -> String;

    /// Annotate from local data only. Never touches the network:
    /// characters outside the vocabulary come back with tier None and
    /// whatever phonetic the session cache already holds.
    fn gloss(&self, text: &str) -> AnnotatedText;

    /// Resolve the reading of one character, cache first. Falls back to
    /// an empty string on lookup failure.
    async fn resolve_phonetic(&self, character: &str) -> String;

    /// Translate one line, cache first. Falls back to the original line
    /// text, marked degraded, on lookup failure.
    async fn translate_line(&self, line: &str) -> LineTranslation;

    /// Reading and translation for a single character, resolved in parallel
    async fn character_detail(&self, character: &str) -> CharacterDetail;

    /// Gloss plus concurrent resolution of every missing slot
    async fn annotate(&self, text: &str) -> AnnotatedText {
        let mut annotated = self.gloss(text);
        let characters = annotated.pending_characters();
        let lines = annotated.pending_lines();

        let (phonetics, translations) = tokio::join!(
            join_all(characters.iter().map(|c| self.resolve_phonetic(c))),
            join_all(lines.iter().map(|(source, _)| self.translate_line(source))),
        );

        for (character, phonetic) in characters.iter().zip(phonetics) {
            annotated.apply_phonetic(character, &phonetic);
        }
        for ((_, indexes), translation) in lines.iter().zip(translations) {
            for index in indexes {
                annotated.apply_line_translation(*index, &translation);
            }
        }

        annotated
    }
}
