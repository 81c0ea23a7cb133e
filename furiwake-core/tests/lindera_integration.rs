//! Integration tests against the real lindera backend
#![cfg(feature = "lindera")]

use furiwake_core::{annotate_text, Annotator, LinderaTokenizer};

#[test]
fn annotates_a_dictionary_word() {
    let units = annotate_text("猫").unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].surface, "猫");
    assert_eq!(units[0].furigana, "ねこ");
}

#[test]
fn splits_okurigana_from_a_real_reading() {
    let units = annotate_text("食べる").unwrap();
    let pairs: Vec<(&str, &str)> = units
        .iter()
        .map(|u| (u.surface.as_str(), u.furigana.as_str()))
        .collect();
    assert_eq!(pairs, vec![("食", "た"), ("べ", "べ"), ("る", "る")]);
}

#[test]
fn surfaces_round_trip_through_the_real_tokenizer() {
    let text = "猫を食べるのは犬だ。";
    let units = annotate_text(text).unwrap();
    let joined: String = units.iter().map(|u| u.surface.as_str()).collect();
    assert_eq!(joined, text);
}

#[test]
fn kana_only_text_passes_through() {
    let units = annotate_text("こんにちは").unwrap();
    let joined: String = units.iter().map(|u| u.surface.as_str()).collect();
    assert_eq!(joined, "こんにちは");
    for unit in &units {
        assert_eq!(unit.surface, unit.furigana);
    }
}

#[test]
fn empty_text_is_empty() {
    assert!(annotate_text("").unwrap().is_empty());
}

#[test]
fn annotator_is_reusable_across_texts() {
    let annotator = Annotator::new(LinderaTokenizer::new().unwrap());
    let first = annotator.annotate("猫").unwrap();
    let second = annotator.annotate("猫").unwrap();
    assert_eq!(first, second);
}
