//! Integration tests for the stream and interactive loops.

use std::fs;
use std::path::PathBuf;

use mnemo_cli::run::{encode_stream, interactive_session, run_stream, write_banner};
use mnemo_corpus::{ActiveWordList, load_embedded};

fn embedded() -> ActiveWordList {
    load_embedded().expect("embedded corpus")
}

fn as_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf8 output")
}

fn temp_path(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("mnemo_cli_{stamp}_{name}.txt"));
    dir
}

#[test]
fn stream_emits_one_mnemonic_per_line() {
    let active = embedded();
    let mut output = Vec::new();
    encode_stream(&active.words, &b"hello\nworld\n"[..], &mut output).expect("encode stream");
    assert_eq!(as_text(output), "decorous_block\nlate_kevin\n");
}

#[test]
fn stream_strips_trailing_whitespace_only() {
    let active = embedded();
    let mut output = Vec::new();
    encode_stream(&active.words, &b"world \t\n\thello\n"[..], &mut output).expect("encode stream");
    // "world \t" trims to "world"; the leading tab before "hello" survives
    assert_eq!(as_text(output), "late_kevin\ndesert_boat\n");
}

#[test]
fn stream_skips_lines_that_trim_to_nothing() {
    let active = embedded();
    let mut output = Vec::new();
    encode_stream(&active.words, &b"hello\n\n   \nworld\n"[..], &mut output)
        .expect("encode stream");
    assert_eq!(as_text(output), "decorous_block\nlate_kevin\n");
}

#[test]
fn stream_handles_a_missing_final_newline() {
    let active = embedded();
    let mut output = Vec::new();
    encode_stream(&active.words, &b"hello"[..], &mut output).expect("encode stream");
    assert_eq!(as_text(output), "decorous_block\n");
}

#[test]
fn stream_with_empty_input_writes_nothing() {
    let active = embedded();
    let mut output = Vec::new();
    encode_stream(&active.words, &b""[..], &mut output).expect("encode stream");
    assert!(output.is_empty());
}

#[test]
fn stream_encodes_file_to_file() {
    let active = embedded();
    let input = temp_path("input");
    let output = temp_path("output");
    fs::write(&input, "hello\nworld\n").expect("write input");
    run_stream(&active.words, Some(input.as_path()), Some(output.as_path())).expect("run stream");
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "decorous_block\nlate_kevin\n"
    );
}

#[test]
fn missing_input_leaves_existing_output_untouched() {
    let active = embedded();
    let input = temp_path("absent");
    let output = temp_path("kept");
    fs::write(&output, "previous run\n").expect("write output");
    let error = run_stream(&active.words, Some(input.as_path()), Some(output.as_path()))
        .expect_err("missing input");
    assert!(error.to_string().contains("failed to open input file"));
    assert_eq!(
        fs::read_to_string(&output).expect("reread output"),
        "previous run\n"
    );
}

#[test]
fn interactive_echoes_one_mnemonic_per_entry() {
    let active = embedded();
    let mut output = Vec::new();
    let mut control = Vec::new();
    interactive_session(&active.words, &b"hello\n\nworld\n"[..], &mut output, &mut control)
        .expect("interactive session");
    assert_eq!(as_text(output), "decorous_block\nlate_kevin\n");

    let control = as_text(control);
    assert!(control.contains("(Ctrl-C to exit.)"));
    assert!(control.contains("What would you like to encode?"));
    // one prompt per entry, plus the final prompt answered by end of input
    assert_eq!(control.matches("?> ").count(), 4);
}

#[test]
fn interactive_encodes_entries_verbatim() {
    let active = embedded();
    let mut output = Vec::new();
    let mut control = Vec::new();
    interactive_session(&active.words, &b" hello\n"[..], &mut output, &mut control)
        .expect("interactive session");
    assert_eq!(as_text(output), "sheer_azalea\n");
}

#[test]
fn banner_names_the_active_word_list() {
    let active = embedded();
    let mut control = Vec::new();
    write_banner(&mut control, &active).expect("banner");
    let banner = as_text(control);
    assert!(banner.contains("Word list version: cloudy_cobalt"));
    assert!(banner.contains(" - Adjectives: 173"));
    assert!(banner.contains(" - Nouns: 194"));
    assert!(banner.contains(" - Combinations: 33562"));
}
