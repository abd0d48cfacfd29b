use unicode_normalization::UnicodeNormalization;

/// Normalize raw input for annotation: unify line endings and apply NFC
/// so composed characters compare equal to their vocabulary keys. Line
/// structure is preserved; lines are the unit of translation.
pub fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.nfc().collect()
}
