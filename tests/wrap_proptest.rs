//! Property-based tests for tagging and tag removal
//!
//! Lines are assembled from script-like fragments (words, separators, plain commands and
//! `[lineN]` commands) so the interesting folding cases come up often.

use kswrap::annotate::{annotate_dialogue, needs_tag, AnnotateOptions};
use kswrap::lexing::{fold_line_commands, tokenize};
use kswrap::pipeline::annotate;
use kswrap::unwrap::{count_wrap_tags, strip_wrap_tags};
use kswrap::WrapOptions;
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z?!.,']{1,6}".prop_map(String::from),
        Just(" ".to_string()),
        Just("-".to_string()),
        Just("\"".to_string()),
        Just("\t".to_string()),
        (0u8..5).prop_map(|n| format!("[line{}]", n)),
        prop_oneof![Just("[r]"), Just("[l]"), Just("[cm]"), Just("[ruby text=\"a\"]")]
            .prop_map(String::from),
        Just("[".to_string()),
        Just("]".to_string()),
    ]
}

fn dialogue_line() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn segments_cover_the_line(line in "\\PC{0,60}") {
        let rebuilt: String = tokenize(&line).iter().map(|s| s.text).collect();
        prop_assert_eq!(rebuilt, line);
    }

    #[test]
    fn folding_keeps_all_text(line in dialogue_line()) {
        prop_assert_eq!(fold_line_commands(&tokenize(&line)).concat(), line);
    }

    #[test]
    fn one_tag_per_taggable_entry(line in dialogue_line()) {
        let expected = fold_line_commands(&tokenize(&line))
            .iter()
            .filter(|entry| needs_tag(entry))
            .count();
        let (out, tags) = annotate_dialogue(&line, &AnnotateOptions::default());
        prop_assert_eq!(tags, expected);
        prop_assert_eq!(count_wrap_tags(&out), expected);
    }

    #[test]
    fn unwrap_reverses_wrap(line in dialogue_line()) {
        let (out, _) = annotate_dialogue(&line, &AnnotateOptions::default());
        prop_assert_eq!(strip_wrap_tags(&out), line.as_str());
    }

    #[test]
    fn unwrap_reverses_processed_lines(lines in prop::collection::vec(dialogue_line(), 0..8)) {
        let wrapped: Vec<String> = annotate(&lines, WrapOptions::default()).collect();
        for (original, out) in lines.iter().zip(&wrapped) {
            prop_assert_eq!(
                strip_wrap_tags(out).into_owned(),
                format!("{}\r\n", original.trim_end())
            );
        }
    }

    #[test]
    fn unwrap_is_idempotent(line in "\\PC{0,60}") {
        let once = strip_wrap_tags(&line).into_owned();
        prop_assert_eq!(strip_wrap_tags(&once), once.as_str());
    }

    #[test]
    fn unwrap_is_idempotent_on_wrapped(line in dialogue_line()) {
        let (out, _) = annotate_dialogue(&line, &AnnotateOptions::default());
        let once = strip_wrap_tags(&out).into_owned();
        prop_assert_eq!(strip_wrap_tags(&once), once.as_str());
    }

    #[test]
    fn script_blocks_are_untouched(body in prop::collection::vec(dialogue_line(), 0..6)) {
        let body: Vec<String> = body.into_iter().filter(|l| l.trim_end() != "@endscript").collect();
        let mut lines = vec!["@iscript".to_string()];
        lines.extend(body.iter().cloned());
        lines.push("@endscript".to_string());

        let wrapped: Vec<String> = annotate(&lines, WrapOptions::default()).collect();
        for (original, out) in lines.iter().zip(&wrapped) {
            prop_assert_eq!(out, &format!("{}\r\n", original.trim_end()));
        }
    }
}
