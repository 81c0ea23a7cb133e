//! Script classification and kana normalization

/// First katakana codepoint with a hiragana equivalent (ァ, U+30A1).
const KATAKANA_FIRST: char = '\u{30A1}';
/// Last katakana codepoint with a hiragana equivalent (ヶ, U+30F6).
const KATAKANA_LAST: char = '\u{30F6}';
/// The katakana and hiragana blocks are offset by exactly 0x60 in this range.
const KANA_BLOCK_OFFSET: u32 = 0x60;

/// Converts every katakana character in [ァ, ヶ] to its hiragana
/// equivalent, leaving all other characters untouched.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(hiragana_equivalent).collect()
}

fn hiragana_equivalent(c: char) -> char {
    if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&c) {
        char::from_u32(c as u32 - KANA_BLOCK_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Reports whether the text contains at least one CJK Unified Ideograph
/// (U+4E00..=U+9FFF).
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c))
}
