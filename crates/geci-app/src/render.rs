use geci_config::ui::UiConfig;
use geci_core::annotate::{AnnotatedText, CharacterDetail, LineItem};
use geci_lang_mandarin::HskLevel;
use geci_types::AppEvent;
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const UNKNOWN_COLOR: &str = "\x1b[90m";

/// One ANSI color per tier, beginner green through proficient red
const TIER_COLORS: [&str; 6] = [
    "\x1b[32m", "\x1b[36m", "\x1b[34m", "\x1b[33m", "\x1b[35m", "\x1b[31m",
];

fn tier_color(tier: Option<u8>) -> &'static str {
    match tier {
        Some(tier @ 1..=6) => TIER_COLORS[(tier - 1) as usize],
        _ => UNKNOWN_COLOR,
    }
}

/// What the terminal currently shows. Events mutate it; `apply` reports
/// whether a repaint is needed.
pub struct RenderState {
    generation: u64,
    annotation: Option<AnnotatedText>,
    speaking: Option<usize>,
    detail: Option<CharacterDetail>,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            generation: 0,
            annotation: None,
            speaking: None,
            detail: None,
        }
    }

    /// Fold one event into the view. Returns true when the screen changed.
    pub fn apply(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::ShowAnnotation {
                generation,
                annotation,
            } => {
                self.generation = *generation;
                self.annotation = Some(annotation.clone());
                self.speaking = None;
                self.detail = None;
                true
            }
            AppEvent::PhoneticResolved {
                character,
                phonetic,
            } => match &mut self.annotation {
                Some(annotation) => annotation.apply_phonetic(character, phonetic),
                None => false,
            },
            AppEvent::LineTranslated {
                generation,
                index,
                translation,
            } => {
                // Results computed for a replaced text are dropped
                if *generation != self.generation {
                    return false;
                }
                match &mut self.annotation {
                    Some(annotation) => annotation.apply_line_translation(*index, translation),
                    None => false,
                }
            }
            AppEvent::ShowCharacterDetail(detail) => {
                self.detail = Some(detail.clone());
                true
            }
            AppEvent::SpeechStarted { index } => {
                self.speaking = Some(*index);
                true
            }
            AppEvent::SpeechFinished { index, .. } => {
                if self.speaking == Some(*index) {
                    self.speaking = None;
                    true
                } else {
                    false
                }
            }
            AppEvent::Redraw => true,
            // Input-side events never reach the view
            AppEvent::TextInput { .. }
            | AppEvent::CharacterDetailRequest(_)
            | AppEvent::SpeakLine(_) => false,
        }
    }

    pub fn render(&self, ui: &UiConfig, colors: bool) -> String {
        let mut out = match &self.annotation {
            Some(annotation) => render_annotation(annotation, ui, colors, self.speaking),
            None => "(waiting for text: pipe lyrics in, pass a file, or copy Chinese text)\n"
                .to_string(),
        };

        if let Some(detail) = &self.detail {
            out.push('\n');
            out.push_str(&render_detail(detail, colors));
        }

        out
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

fn push_cell(row: &mut String, text: &str, width: usize, color: Option<&str>) {
    let visible = UnicodeWidthStr::width(text);
    match color {
        Some(color) if !text.is_empty() => {
            row.push_str(color);
            row.push_str(text);
            row.push_str(RESET);
        }
        _ => row.push_str(text),
    }
    for _ in visible..width {
        row.push(' ');
    }
}

/// Lay one annotated text out as aligned rows per line: phonetics over
/// characters over tier markers, then the line translation.
pub fn render_annotation(
    annotation: &AnnotatedText,
    ui: &UiConfig,
    colors: bool,
    speaking: Option<usize>,
) -> String {
    let mut out = String::new();

    for (index, line) in annotation.lines.iter().enumerate() {
        if line.is_blank() {
            out.push('\n');
            continue;
        }

        let mut phonetic_row = String::new();
        let mut character_row = String::new();
        let mut tier_row = String::new();

        for item in &line.items {
            match item {
                LineItem::Layout(text) => {
                    let width = UnicodeWidthStr::width(text.as_str()).max(1);
                    push_cell(&mut phonetic_row, "", width, None);
                    push_cell(&mut character_row, text, width, None);
                    push_cell(&mut tier_row, "", width, None);
                }
                LineItem::Annotated(ch) => {
                    let marker = match ch.tier {
                        Some(tier) => format!("[{tier}]"),
                        None => "[?]".to_string(),
                    };
                    let width = [
                        UnicodeWidthStr::width(ch.phonetic.as_str()),
                        UnicodeWidthStr::width(ch.character.as_str()),
                        UnicodeWidthStr::width(marker.as_str()),
                    ]
                    .into_iter()
                    .max()
                    .unwrap_or(0)
                        + 1;
                    let color = colors.then(|| tier_color(ch.tier));
                    push_cell(&mut phonetic_row, &ch.phonetic, width, None);
                    push_cell(&mut character_row, &ch.character, width, color);
                    push_cell(&mut tier_row, &marker, width, color);
                }
            }
        }

        let gutter = if speaking == Some(index) { "♪ " } else { "  " };

        if ui.show_phonetics && !phonetic_row.trim_end().is_empty() {
            out.push_str("  ");
            out.push_str(phonetic_row.trim_end());
            out.push('\n');
        }
        out.push_str(gutter);
        out.push_str(character_row.trim_end());
        out.push('\n');
        if ui.show_tiers && !tier_row.trim_end().is_empty() {
            out.push_str("  ");
            out.push_str(tier_row.trim_end());
            out.push('\n');
        }

        if let Some(translation) = &line.translation
            && !translation.text.is_empty()
        {
            // Fallback translations repeat the source line, flagged "≈"
            let arrow = if translation.degraded { "≈" } else { "⇢" };
            if colors {
                out.push_str(&format!("  {DIM}{arrow} {}{RESET}\n", translation.text));
            } else {
                out.push_str(&format!("  {arrow} {}\n", translation.text));
            }
        }
        out.push('\n');
    }

    if annotation.all_translations_degraded() {
        out.push_str("(translations unavailable, showing original lines)\n");
    }

    out
}

pub fn render_detail(detail: &CharacterDetail, colors: bool) -> String {
    let level_text = match detail.tier.and_then(HskLevel::from_tier) {
        Some(level) => level.description().to_string(),
        None => "not in the HSK lists".to_string(),
    };

    let phonetic = if detail.phonetic.is_empty() {
        "?"
    } else {
        detail.phonetic.as_str()
    };

    if colors {
        let color = tier_color(detail.tier);
        format!(
            "{color}{}{RESET} [{phonetic}] {}\n  {DIM}{level_text}{RESET}\n",
            detail.character, detail.translation
        )
    } else {
        format!(
            "{} [{phonetic}] {}\n  {level_text}\n",
            detail.character, detail.translation
        )
    }
}
