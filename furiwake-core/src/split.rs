//! Okurigana splitting
//!
//! Separates a kanji root from its trailing kana suffix by matching the
//! surface and the reading from their ends. The shared suffix is emitted as
//! single-character units so that a timing engine can target individual
//! syllables; the root keeps whatever reading is left. The only input
//! beyond the surface is the tokenizer's reading, covering the common
//! inflection pattern where a kanji stem is followed by okurigana identical
//! to the tail of its own reading.

use crate::annotate::Unit;

/// Splits a kanji-bearing surface and its full (hiragana) reading into
/// aligned units.
///
/// The surfaces of the returned units concatenate back to `surface`, in
/// order. Words written entirely in kana, or whose reading shares no
/// trailing characters with the surface, come back as a single unit.
pub fn split_okurigana(surface: &str, reading: &str) -> Vec<Unit> {
    if surface.is_empty() || reading.is_empty() || surface == reading {
        return vec![Unit::new(surface, reading)];
    }

    let surface_chars: Vec<char> = surface.chars().collect();
    let reading_chars: Vec<char> = reading.chars().collect();

    let match_count = surface_chars
        .iter()
        .rev()
        .zip(reading_chars.iter().rev())
        .take_while(|(s, r)| s == r)
        .count();

    if match_count == 0 {
        return vec![Unit::new(surface, reading)];
    }

    let root_surface: String = surface_chars[..surface_chars.len() - match_count]
        .iter()
        .collect();
    let root_reading: String = reading_chars[..reading_chars.len() - match_count]
        .iter()
        .collect();
    let suffix = &surface_chars[surface_chars.len() - match_count..];

    let mut units = Vec::with_capacity(match_count + 1);
    if !root_surface.is_empty() {
        units.push(Unit::new(root_surface, root_reading));
    }
    for &c in suffix {
        let syllable = c.to_string();
        units.push(Unit::new(syllable.clone(), syllable));
    }
    units
}
