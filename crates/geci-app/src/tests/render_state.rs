use geci_config::ui::UiConfig;
use geci_core::annotate::{
    AnnotatedCharacter, AnnotatedLine, AnnotatedText, CharacterDetail, LineItem, LineTranslation,
};
use geci_types::AppEvent;

use crate::render::{RenderState, render_annotation, render_detail};

fn known(character: &str, phonetic: &str, tier: u8) -> LineItem {
    LineItem::Annotated(AnnotatedCharacter {
        character: character.to_string(),
        phonetic: phonetic.to_string(),
        definition: String::new(),
        tier: Some(tier),
    })
}

fn unknown(character: &str) -> LineItem {
    LineItem::Annotated(AnnotatedCharacter {
        character: character.to_string(),
        phonetic: String::new(),
        definition: String::new(),
        tier: None,
    })
}

fn annotation() -> AnnotatedText {
    AnnotatedText {
        lines: vec![AnnotatedLine {
            source: "你好囍".to_string(),
            items: vec![known("你", "nǐ", 1), known("好", "hǎo", 1), unknown("囍")],
            translation: None,
        }],
    }
}

fn show(generation: u64) -> AppEvent {
    AppEvent::ShowAnnotation {
        generation,
        annotation: annotation(),
    }
}

#[test]
fn test_stale_translations_are_dropped() {
    let mut view = RenderState::new();
    assert!(view.apply(&show(2)));

    let translation = LineTranslation {
        text: "hello".to_string(),
        degraded: false,
    };

    // Generation 1 results race in after the text was replaced
    assert!(!view.apply(&AppEvent::LineTranslated {
        generation: 1,
        index: 0,
        translation: translation.clone(),
    }));
    assert!(view.apply(&AppEvent::LineTranslated {
        generation: 2,
        index: 0,
        translation,
    }));
}

#[test]
fn test_phonetic_repaints_only_on_change() {
    let mut view = RenderState::new();
    assert!(view.apply(&show(1)));

    let resolved = AppEvent::PhoneticResolved {
        character: "囍".to_string(),
        phonetic: "xǐ".to_string(),
    };
    assert!(view.apply(&resolved));
    // Same resolution again changes nothing on screen
    assert!(!view.apply(&resolved));

    // Vocabulary cells never repaint from lookup results
    assert!(!view.apply(&AppEvent::PhoneticResolved {
        character: "你".to_string(),
        phonetic: "ni".to_string(),
    }));
}

#[test]
fn test_speech_markers_toggle() {
    let mut view = RenderState::new();
    assert!(view.apply(&show(1)));

    assert!(view.apply(&AppEvent::SpeechStarted { index: 0 }));
    let ui = UiConfig::new();
    assert!(view.render(&ui, false).contains("♪"));

    // A finish for some other line leaves the marker alone
    assert!(!view.apply(&AppEvent::SpeechFinished { index: 5, ok: true }));
    assert!(view.apply(&AppEvent::SpeechFinished { index: 0, ok: true }));
    assert!(!view.render(&ui, false).contains("♪"));
}

#[test]
fn test_rows_carry_phonetics_characters_and_tiers() {
    let ui = UiConfig::new();
    let frame = render_annotation(&annotation(), &ui, false, None);

    assert!(frame.contains("nǐ"));
    assert!(frame.contains("你"));
    assert!(frame.contains("[1]"));
    assert!(frame.contains("[?]"));

    // Rows can be switched off independently
    let bare = UiConfig {
        colors: false,
        show_phonetics: false,
        show_tiers: false,
    };
    let frame = render_annotation(&annotation(), &bare, false, None);
    assert!(!frame.contains("nǐ"));
    assert!(!frame.contains("[1]"));
    assert!(frame.contains("你"));
}

#[test]
fn test_translations_render_with_degraded_marker() {
    let mut text = annotation();
    text.apply_line_translation(
        0,
        &LineTranslation {
            text: "hello".to_string(),
            degraded: false,
        },
    );
    let ui = UiConfig::new();
    let frame = render_annotation(&text, &ui, false, None);
    assert!(frame.contains("⇢ hello"));
    assert!(!frame.contains("(translations unavailable"));

    text.apply_line_translation(
        0,
        &LineTranslation {
            text: "你好囍".to_string(),
            degraded: true,
        },
    );
    let frame = render_annotation(&text, &ui, false, None);
    assert!(frame.contains("≈ 你好囍"));
    assert!(frame.contains("(translations unavailable, showing original lines)"));
}

#[test]
fn test_detail_panel_renders_after_event() {
    let mut view = RenderState::new();
    assert!(view.apply(&show(1)));
    assert!(view.apply(&AppEvent::ShowCharacterDetail(CharacterDetail {
        character: "你".to_string(),
        phonetic: "nǐ".to_string(),
        translation: "you".to_string(),
        tier: Some(1),
    })));

    let ui = UiConfig::new();
    let frame = view.render(&ui, false);
    assert!(frame.contains("你 [nǐ] you"));
    assert!(frame.contains("HSK1 (Beginner)"));
}

#[test]
fn test_detail_without_tier_reports_unlisted() {
    let frame = render_detail(
        &CharacterDetail {
            character: "囍".to_string(),
            phonetic: "xǐ".to_string(),
            translation: "double happiness".to_string(),
            tier: None,
        },
        false,
    );
    assert!(frame.contains("囍 [xǐ] double happiness"));
    assert!(frame.contains("not in the HSK lists"));
}

#[test]
fn test_color_codes_only_when_enabled() {
    let ui = UiConfig::new();
    let plain = render_annotation(&annotation(), &ui, false, None);
    assert!(!plain.contains("\x1b["));

    let colored = render_annotation(&annotation(), &ui, true, None);
    assert!(colored.contains("\x1b[32m"));
    assert!(colored.contains("\x1b[90m"));
}
