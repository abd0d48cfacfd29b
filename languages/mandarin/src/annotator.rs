use std::sync::Arc;

use async_trait::async_trait;
use geci_core::annotate::{
    AnnotatedCharacter, AnnotatedLine, AnnotatedText, CharacterDetail, LanguageAnnotator,
    LineItem, LineTranslation,
};
use geci_core::cache::ResolutionCache;
use geci_core::preprocess::normalize_text;
use geci_core::vocabulary::Vocabulary;
use geci_lookup::LookupService;
use unicode_segmentation::UnicodeSegmentation;

use crate::lines::KNOWN_LINES;

/// Mandarin annotator: vocabulary first, then the session cache, then
/// the external lookup service. Lookup failures degrade single cells
/// and never fail an annotation.
pub struct MandarinAnnotator {
    vocabulary: Arc<dyn Vocabulary>,
    cache: ResolutionCache,
    lookup: Arc<dyn LookupService>,
}

impl MandarinAnnotator {
    pub fn new(vocabulary: Arc<dyn Vocabulary>, lookup: Arc<dyn LookupService>) -> Self {
        let cache = ResolutionCache::new();
        cache.seed_lines(KNOWN_LINES.iter().copied());

        Self {
            vocabulary,
            cache,
            lookup,
        }
    }

    fn gloss_character(&self, grapheme: &str) -> AnnotatedCharacter {
        if let Some(entry) = self.vocabulary.entry(grapheme) {
            return AnnotatedCharacter {
                character: entry.character.clone(),
                phonetic: entry.phonetic.clone(),
                definition: entry.definition.clone(),
                tier: Some(entry.tier),
            };
        }

        // Unknown character: reuse a phonetic the session already resolved
        let phonetic = self.cache.phonetic(grapheme).unwrap_or_default();
        AnnotatedCharacter {
            character: grapheme.to_string(),
            phonetic,
            definition: String::new(),
            tier: None,
        }
    }

    async fn resolve_char_translation(&self, character: &str) -> String {
        if let Some(hit) = self.cache.char_translation(character) {
            return hit;
        }

        match self.lookup.translation(character).await {
            Ok(text) if !text.is_empty() => {
                self.cache.put_char_translation(character, &text);
                text
            }
            Ok(_) => character.to_string(),
            Err(e) => {
                tracing::warn!("Translation failed for '{character}': {e}");
                character.to_string()
            }
        }
    }
}

#[async_trait]
impl LanguageAnnotator for MandarinAnnotator {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        normalize_text(text)
    }

    fn gloss(&self, text: &str) -> AnnotatedText {
        let normalized = self.normalize(text);
        let mut lines = Vec::new();

        for source in normalized.split('\n') {
            let mut items = Vec::new();
            for grapheme in source.graphemes(true) {
                if grapheme.chars().all(char::is_whitespace) {
                    items.push(LineItem::Layout(grapheme.to_string()));
                } else {
                    items.push(LineItem::Annotated(self.gloss_character(grapheme)));
                }
            }

            let translation = if source.trim().is_empty() {
                Some(LineTranslation::empty())
            } else {
                self.cache.line(source).map(|text| LineTranslation {
                    text,
                    degraded: false,
                })
            };

            lines.push(AnnotatedLine {
                source: source.to_string(),
                items,
                translation,
            });
        }

        AnnotatedText { lines }
    }

    async fn resolve_phonetic(&self, character: &str) -> String {
        if let Some(hit) = self.cache.phonetic(character) {
            return hit;
        }

        match self.lookup.romanization(character).await {
            Ok(phonetic) => {
                self.cache.put_phonetic(character, &phonetic);
                phonetic
            }
            Err(e) => {
                tracing::warn!("Romanization failed for '{character}': {e}");
                String::new()
            }
        }
    }

    async fn translate_line(&self, line: &str) -> LineTranslation {
        if line.trim().is_empty() {
            return LineTranslation::empty();
        }

        if let Some(hit) = self.cache.line(line) {
            return LineTranslation {
                text: hit,
                degraded: false,
            };
        }

        match self.lookup.translation(line).await {
            Ok(text) if !text.is_empty() => {
                self.cache.put_line(line, &text);
                LineTranslation {
                    text,
                    degraded: false,
                }
            }
            Ok(_) => LineTranslation {
                text: line.to_string(),
                degraded: true,
            },
            Err(e) => {
                tracing::warn!("Translation failed for line '{line}': {e}");
                LineTranslation {
                    text: line.to_string(),
                    degraded: true,
                }
            }
        }
    }

    async fn character_detail(&self, character: &str) -> CharacterDetail {
        // Vocabulary hits answer entirely from local data
        if let Some(entry) = self.vocabulary.entry(character) {
            return CharacterDetail {
                character: entry.character.clone(),
                phonetic: entry.phonetic.clone(),
                translation: entry.definition.clone(),
                tier: Some(entry.tier),
            };
        }

        let (phonetic, translation) = tokio::join!(
            self.resolve_phonetic(character),
            self.resolve_char_translation(character),
        );

        CharacterDetail {
            character: character.to_string(),
            phonetic,
            translation,
            tier: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use geci_core::vocabulary::VocabularyEntry;
    use geci_lookup::{LookupError, ProviderMetadata};

    use super::*;
    use crate::vocabulary::HskVocabulary;

    struct TestVocabulary(HashMap<String, VocabularyEntry>);

    impl TestVocabulary {
        fn with(entries: &[(&str, &str, &str, u8)]) -> Self {
            let map = entries
                .iter()
                .map(|(character, phonetic, definition, tier)| {
                    (
                        character.to_string(),
                        VocabularyEntry {
                            character: character.to_string(),
                            phonetic: phonetic.to_string(),
                            phonetic_plain: String::new(),
                            definition: definition.to_string(),
                            tier: *tier,
                        },
                    )
                })
                .collect();
            Self(map)
        }
    }

    impl Vocabulary for TestVocabulary {
        fn entry(&self, character: &str) -> Option<&VocabularyEntry> {
            self.0.get(character)
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    #[derive(Default)]
    struct CountingLookup {
        romanizations: AtomicUsize,
        translations: AtomicUsize,
        fail: bool,
    }

    impl CountingLookup {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl LookupService for CountingLookup {
        async fn translation(&self, text: &str) -> Result<String, LookupError> {
            self.translations.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LookupError::ApiError("endpoint down".to_string()));
            }
            Ok(format!("[en] {text}"))
        }

        async fn romanization(&self, text: &str) -> Result<String, LookupError> {
            self.romanizations.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LookupError::ApiError("endpoint down".to_string()));
            }
            Ok(format!("pin-{text}"))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "counting".to_string(),
                requires_api_key: false,
                free_tier_available: true,
            }
        }
    }

    fn two_entry_annotator(lookup: Arc<CountingLookup>) -> MandarinAnnotator {
        let vocabulary = TestVocabulary::with(&[
            ("你", "nǐ", "you", 1),
            ("好", "hǎo", "good; well", 1),
        ]);
        MandarinAnnotator::new(Arc::new(vocabulary), lookup)
    }

    fn cells(annotated: &AnnotatedText, line: usize) -> Vec<&AnnotatedCharacter> {
        annotated.lines[line]
            .items
            .iter()
            .filter_map(|item| match item {
                LineItem::Annotated(ch) => Some(ch),
                LineItem::Layout(_) => None,
            })
            .collect()
    }

    #[test]
    fn gloss_marks_store_hits_and_unknowns() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let annotated = annotator.gloss("你好吗");
        let cells = cells(&annotated, 0);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].character, "你");
        assert_eq!(cells[0].tier, Some(1));
        assert_eq!(cells[0].phonetic, "nǐ");
        assert_eq!(cells[1].character, "好");
        assert_eq!(cells[1].tier, Some(1));
        assert_eq!(cells[1].phonetic, "hǎo");
        assert_eq!(cells[2].character, "吗");
        assert_eq!(cells[2].tier, None);
        assert_eq!(cells[2].phonetic, "");

        assert_eq!(annotated.pending_characters(), vec!["吗"]);
        // gloss never touches the lookup service
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 0);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn annotate_resolves_unknowns_and_lines() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let annotated = annotator.annotate("你好吗").await;
        let cells = cells(&annotated, 0);

        assert_eq!(cells[2].phonetic, "pin-吗");
        assert_eq!(annotated.line_translations(), vec!["[en] 你好吗"]);
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 1);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_resolution_issues_at_most_one_call() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let first = annotator.resolve_phonetic("吗").await;
        let second = annotator.resolve_phonetic("吗").await;

        assert_eq!(first, "pin-吗");
        assert_eq!(second, first);
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 1);

        let first = annotator.translate_line("你好吗").await;
        let second = annotator.translate_line("你好吗").await;

        assert_eq!(first.text, "[en] 你好吗");
        assert_eq!(second, first);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_characters_resolve_once_per_annotate() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        annotator.annotate("吗吗吗").await;
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_translation_falls_back_to_source_line() {
        let lookup = Arc::new(CountingLookup::failing());
        let annotator = two_entry_annotator(lookup.clone());

        let translation = annotator.translate_line("你好吗").await;
        assert_eq!(translation.text, "你好吗");
        assert!(translation.degraded);

        // Fallbacks are not cached, so the next attempt may retry
        annotator.translate_line("你好吗").await;
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_romanization_falls_back_to_empty() {
        let lookup = Arc::new(CountingLookup::failing());
        let annotator = two_entry_annotator(lookup.clone());

        assert_eq!(annotator.resolve_phonetic("吗").await, "");

        let annotated = annotator.annotate("你好吗").await;
        let cells = cells(&annotated, 0);
        assert_eq!(cells[2].phonetic, "");
        assert!(annotated.lines[0].translation.as_ref().unwrap().degraded);
    }

    #[tokio::test]
    async fn seeded_line_translates_with_zero_calls() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let annotated = annotator.annotate("月亮代表我的心").await;

        assert_eq!(
            annotated.line_translations(),
            vec!["The moon represents my heart"]
        );
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn translation_slots_stay_in_input_order() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let annotated = annotator.annotate("你好\n\n月亮代表我的心\n你好").await;

        assert_eq!(
            annotated.line_translations(),
            vec![
                "[en] 你好",
                "",
                "The moon represents my heart",
                "[en] 你好",
            ]
        );
        // The repeated line is translated once
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn whitespace_is_layout_only() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup);

        let annotated = annotator.gloss("你 好");
        let items = &annotated.lines[0].items;

        assert_eq!(items.len(), 3);
        assert!(matches!(&items[1], LineItem::Layout(s) if s == " "));
        assert!(annotated.pending_characters().is_empty());
    }

    #[test]
    fn blank_lines_pass_through_as_empty_entries() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup);

        let annotated = annotator.gloss("你好\n\n  \n好你");

        assert_eq!(annotated.lines.len(), 4);
        assert!(annotated.lines[1].items.is_empty());
        assert_eq!(annotated.lines[1].translation, Some(LineTranslation::empty()));
        // Whitespace-only lines count as blank
        assert!(annotated.lines[2].is_blank());
        assert_eq!(annotated.lines[2].translation, Some(LineTranslation::empty()));
        assert!(annotated.pending_lines().iter().all(|(_, idx)| !idx.contains(&1)));
    }

    #[test]
    fn crlf_input_splits_like_lf() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup);

        let annotated = annotator.gloss("你好\r\n好你");
        assert_eq!(annotated.lines.len(), 2);
        assert_eq!(annotated.lines[1].source, "好你");
    }

    #[tokio::test]
    async fn cached_phonetic_shows_up_in_later_gloss() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup);

        annotator.resolve_phonetic("吗").await;

        let annotated = annotator.gloss("吗");
        let cells = cells(&annotated, 0);
        assert_eq!(cells[0].phonetic, "pin-吗");
        assert_eq!(cells[0].tier, None);
        assert!(annotated.pending_characters().is_empty());
    }

    #[tokio::test]
    async fn detail_for_known_character_stays_local() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let detail = annotator.character_detail("你").await;

        assert_eq!(detail.phonetic, "nǐ");
        assert_eq!(detail.translation, "you");
        assert_eq!(detail.tier, Some(1));
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 0);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn detail_for_unknown_character_resolves_both_fields() {
        let lookup = Arc::new(CountingLookup::default());
        let annotator = two_entry_annotator(lookup.clone());

        let detail = annotator.character_detail("吗").await;

        assert_eq!(detail.phonetic, "pin-吗");
        assert_eq!(detail.translation, "[en] 吗");
        assert_eq!(detail.tier, None);
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 1);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 1);

        // Both fields now served from cache
        annotator.character_detail("吗").await;
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 1);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sample_lyrics_annotate_without_any_lookup() {
        let lookup = Arc::new(CountingLookup::default());
        let vocabulary = HskVocabulary::load_embedded(&[1, 2, 3, 4, 5, 6]);
        let annotator = MandarinAnnotator::new(Arc::new(vocabulary), lookup.clone());

        let annotated = annotator.annotate(crate::lines::SAMPLE_LYRICS).await;

        assert_eq!(annotated.lines.len(), 5);
        assert!(annotated.pending_characters().is_empty());
        assert_eq!(
            annotated.line_translations()[4],
            "The moon represents my heart"
        );
        assert_eq!(lookup.romanizations.load(Ordering::SeqCst), 0);
        assert_eq!(lookup.translations.load(Ordering::SeqCst), 0);
    }
}
