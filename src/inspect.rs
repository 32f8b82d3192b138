//! Token view for debugging
//!
//! Shows, per line, how the classifier saw it and, for dialogue, the segments, the folded
//! entries and the display text each entry is announced with. Serialized as JSON by the
//! `tokens` action.

use crate::annotate::{display_text, needs_tag, WrapOptions};
use crate::classify::{LineClass, ScriptTracker};
use crate::error::WrapError;
use crate::lexing::{fold_line_commands, tokenize, SegmentKind};
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// 1-based line number
    pub line: usize,
    pub class: LineClass,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    pub kind: SegmentKind,
    pub text: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub text: String,
    /// None for entries copied without a tag
    pub display: Option<String>,
}

/// Build the report for every line of a decoded file.
pub fn inspect_text(text: &str, options: &WrapOptions) -> Vec<LineReport> {
    let mut tracker = ScriptTracker::new(options.classify.clone());
    let hyphens = options.annotate.hyphens_per_line_unit;

    text.lines()
        .enumerate()
        .map(|(index, raw)| {
            let line = raw.trim_end();
            let class = tracker.classify(line);
            if !class.is_dialogue() {
                return LineReport {
                    line: index + 1,
                    class,
                    segments: Vec::new(),
                    entries: Vec::new(),
                };
            }

            let segments = tokenize(line);
            let entries = fold_line_commands(&segments)
                .into_iter()
                .map(|entry| EntryReport {
                    display: needs_tag(&entry).then(|| display_text(&entry, hyphens)),
                    text: entry,
                })
                .collect();

            LineReport {
                line: index + 1,
                class,
                segments: segments
                    .into_iter()
                    .map(|s| SegmentReport {
                        kind: s.kind,
                        text: s.text.to_string(),
                        span: s.span,
                    })
                    .collect(),
                entries,
            }
        })
        .collect()
}

/// Serialize reports as pretty JSON
pub fn to_json(reports: &[LineReport]) -> Result<String, WrapError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
