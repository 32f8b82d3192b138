//! Integration tests for wrapping using the sample script
//!
//! These tests run the sample script through the wrap and unwrap pipelines, using
//! snapshot testing to catch regressions in the emitted tags.

use kswrap::config::Loader;
use kswrap::pipeline::{unwrap_text, wrap_text};
use kswrap::WrapOptions;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

/// Helper function to read a fixture script
fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

#[test]
fn test_prologue_wrapped() {
    let source = read_fixture("prologue.ks");
    let wrapped = wrap_text(&source, WrapOptions::default());

    assert!(wrapped.ends_with("\r\n"));
    assert_eq!(wrapped.matches("\r\n").count(), source.lines().count());

    insta::assert_snapshot!(wrapped.replace("\r\n", "\n"), @r###"
    *start|Prologue
    @bg storage="room"
    ; translator note: keep the pun
    [wrap text="Hello"]Hello [wrap text="there,"]there, [wrap text="Master."]Master.[l][r]
    [wrap text="------what?"][line3]what? [wrap text="You"]You [wrap text="can't"]can't [wrap text="be"]be [wrap text="serious----"]serious[line2]
    [wrap text="Well-"]Well-[wrap text="known"]known [wrap text="fact:"]fact: [wrap text="-swords-"]"swords" [wrap text="cut."]cut.[p]
    @iscript
    f.counter = f.counter + 1;
    @endscript
    This line continues\
    [ruby text="x"][wrap text="Kanji"]Kanji [wrap text="here"]here
    "###);
}

#[test]
fn test_prologue_round_trip() {
    let source = read_fixture("prologue.ks");
    let wrapped = wrap_text(&source, WrapOptions::default());
    let expected: String = source.lines().map(|l| format!("{}\r\n", l)).collect();

    assert_eq!(unwrap_text(&wrapped), expected);
}

#[test]
fn test_configured_line_units() {
    let options = Loader::new()
        .set_override("annotate.hyphens_per_line_unit", 1_i64)
        .expect("override to apply")
        .build()
        .expect("config to build")
        .wrap_options();

    assert_eq!(
        wrap_text("[line3]what?", options),
        "[wrap text=\"---what?\"][line3]what?\r\n"
    );
}

#[rstest]
#[case::plain("Hello world", "[wrap text=\"Hello\"]Hello [wrap text=\"world\"]world")]
#[case::command_kept("[cm]Next", "[cm][wrap text=\"Next\"]Next")]
#[case::glued_line("[line3]what?", "[wrap text=\"------what?\"][line3]what?")]
#[case::spaced_line(
    "[line3] what?",
    "[wrap text=\"------\"][line3] [wrap text=\"what?\"]what?"
)]
#[case::leading_space(" Hi", "[wrap text=\"\"] [wrap text=\"Hi\"]Hi")]
#[case::tab_after_space(
    "x \t \ty",
    "[wrap text=\"x\"]x [wrap text=\"\"]\t [wrap text=\"\ty\"]\ty"
)]
#[case::unclosed("Oh [ruby text=x", "[wrap text=\"Oh\"]Oh [ruby text=x")]
#[case::nested("[a [b]]x", "[a [b][wrap text=\"]x\"]]x")]
fn test_dialogue_lines(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(
        wrap_text(line, WrapOptions::default()),
        format!("{}\r\n", expected)
    );
}

#[rstest]
#[case::empty("")]
#[case::tag_line("@jump target=*next")]
#[case::label("*next|")]
#[case::comment(";Hello world")]
#[case::continuation("Hello world\\")]
fn test_passthrough_lines(#[case] line: &str) {
    assert_eq!(
        wrap_text(&format!("{}\n", line), WrapOptions::default()),
        format!("{}\r\n", line)
    );
}

#[test]
fn test_trailing_whitespace_trimmed() {
    assert_eq!(
        wrap_text("@l   \nword \t\n", WrapOptions::default()),
        "@l\r\n[wrap text=\"word\"]word\r\n"
    );
}
