use geci_core::annotate::{AnnotatedText, CharacterDetail, LineTranslation};

/// Events flowing between the input watcher, the event loop, and the
/// renderer. Display updates carry the annotation generation they belong
/// to so late async results of an older text never land on a newer one.
#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput {
        text: String,
        source: TextSource,
    },
    ShowAnnotation {
        generation: u64,
        annotation: AnnotatedText,
    },
    PhoneticResolved {
        character: String,
        phonetic: String,
    },
    LineTranslated {
        generation: u64,
        index: usize,
        translation: LineTranslation,
    },
    CharacterDetailRequest(String),
    ShowCharacterDetail(CharacterDetail),
    SpeakLine(usize),
    SpeechStarted {
        index: usize,
    },
    SpeechFinished {
        index: usize,
        ok: bool,
    },
    Redraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    File,
    Stdin,
    Clipboard,
    Manual,
    Sample,
}
