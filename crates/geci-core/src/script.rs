/// CJK Unified Ideographs plus extension A, compatibility ideographs,
/// and the ideographic zero
pub fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF | 0x20000..=0x2A6DF | 0x3007
    )
}

/// True if any character of the text is an ideograph
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}
