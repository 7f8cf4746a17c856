//! Tests pinning the embedded corpus and its published encodings.

use mnemo_core::{EncodeOptions, Value};
use mnemo_corpus::{CorpusDocument, embedded::EMBEDDED_CORPUS, load_embedded};

#[test]
fn embedded_corpus_is_coherent() {
    let active = load_embedded().expect("embedded corpus");
    assert_eq!(active.version_id, "cloudy_cobalt");
    assert!(active.drift.is_none());
    assert_eq!(active.words.version_id(), active.version_id);
}

#[test]
fn embedded_word_counts() {
    let active = load_embedded().expect("embedded corpus");
    assert_eq!(active.words.adjectives().len(), 173);
    assert_eq!(active.words.nouns().len(), 194);
    assert_eq!(active.words.combinations(), 33_562);
}

#[test]
fn embedded_document_is_normalized() {
    let document: CorpusDocument = toml::from_str(EMBEDDED_CORPUS).expect("parse embedded");
    assert_eq!(document.latest_version(), Some("cloudy_cobalt"));
    let set = document
        .word_lists
        .get("cloudy_cobalt")
        .expect("embedded word set");
    assert!(set.adjectives.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(set.nouns.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn embedded_text_vectors() {
    let active = load_embedded().expect("embedded corpus");
    let words = &active.words;
    assert_eq!(words.encode("hello").expect("encode"), "decorous_block");
    assert_eq!(words.encode("world").expect("encode"), "late_kevin");
    assert_eq!(words.encode("").expect("encode"), "lucent_curb");
    assert_eq!(words.encode("HELLO").expect("encode"), "benign_patio");
}

#[test]
fn embedded_scalar_vectors() {
    let active = load_embedded().expect("embedded corpus");
    let words = &active.words;
    assert_eq!(words.encode(5.0_f64).expect("encode"), "live_drum");
    assert_eq!(words.encode(0.1_f64).expect("encode"), "optimal_camel");
    assert_eq!(words.encode(42_i64).expect("encode"), "benign_cat");
    assert_eq!(words.encode(7_i64).expect("encode"), "dormant_aspen");
    assert_eq!(words.encode(-3_i64).expect("encode"), "compact_cinder");
}

#[test]
fn embedded_sequence_vectors() {
    let active = load_embedded().expect("embedded corpus");
    let words = &active.words;
    assert_eq!(
        words.encode(vec!["hello", "world"]).expect("encode"),
        "limber_chest"
    );
    assert_eq!(
        words.encode(("a", 1_i64, 2.5_f64)).expect("encode"),
        "orderly_dock"
    );
    assert_eq!(
        words.encode(Value::from(["hello", "world"])).expect("encode"),
        "limber_chest"
    );
}

#[test]
fn embedded_option_vectors() {
    let active = load_embedded().expect("embedded corpus");
    let words = &active.words;
    let dashed = EncodeOptions::default().with_separator("-").with_digits(5);
    assert_eq!(
        words.encode_with("world", &dashed).expect("encode"),
        "peppy-gabriel"
    );
    for (digits, expected) in [
        (1, "alert_abbey"),
        (32, "handy_coil"),
        (33, "grave_heath"),
        (64, "ivory_depot"),
    ] {
        let options = EncodeOptions::default().with_digits(digits);
        assert_eq!(
            words.encode_with("world", &options).expect("encode"),
            expected
        );
    }
}
