//! Wrap tag annotation
//!
//!     Every folded entry of a dialogue line that is not a plain bracketed command gets
//!     exactly one tag in front of it:
//!
//!         [wrap text="<display text>"]<entry text>
//!
//!     The display text is the entry as the reader will see it: `[lineN]` commands become
//!     runs of hyphens, trailing whitespace is dropped and `"` becomes `-` so the tag's
//!     own quoting stays unambiguous. The entry text after the tag is left untouched.
//!
//!     Entries that start with `[` are commands and are copied verbatim, unless they start
//!     with a `[lineN]` command, which renders as text.

use crate::classify::{ClassifyOptions, LineClass, ScriptTracker};
use crate::lexing::{fold_line_commands, tokenize, LineCommand};
use serde::Deserialize;

/// Opening of a wrap tag, up to the display text
pub const WRAP_TAG_OPEN: &str = "[wrap text=\"";
/// Closing of a wrap tag, after the display text
pub const WRAP_TAG_CLOSE: &str = "\"]";

/// Knobs for tag generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnotateOptions {
    /// Hyphens drawn per unit of a `[lineN]` command
    pub hyphens_per_line_unit: usize,
    /// Terminator written after every output line
    pub line_ending: String,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions {
            hyphens_per_line_unit: 2,
            line_ending: "\r\n".to_string(),
        }
    }
}

/// Everything the line processor needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WrapOptions {
    pub classify: ClassifyOptions,
    pub annotate: AnnotateOptions,
}

/// True when `entry` should receive a wrap tag
pub fn needs_tag(entry: &str) -> bool {
    !entry.starts_with('[') || LineCommand::at_start(entry).is_some()
}

/// The text announced by the tag for `entry`
pub fn display_text(entry: &str, hyphens_per_line_unit: usize) -> String {
    LineCommand::expand_all(entry, hyphens_per_line_unit)
        .trim_end()
        .replace('"', "-")
}

/// Write the tag for `display` into `out`
pub fn push_wrap_tag(out: &mut String, display: &str) {
    out.push_str(WRAP_TAG_OPEN);
    out.push_str(display);
    out.push_str(WRAP_TAG_CLOSE);
}

/// Annotate a single dialogue line (no line ending added).
///
/// Returns the annotated text and the number of tags inserted.
pub fn annotate_dialogue(line: &str, options: &AnnotateOptions) -> (String, usize) {
    let entries = fold_line_commands(&tokenize(line));
    let mut out = String::with_capacity(line.len() * 2);
    let mut tags = 0;

    for entry in &entries {
        if needs_tag(entry) {
            push_wrap_tag(&mut out, &display_text(entry, options.hyphens_per_line_unit));
            tags += 1;
        }
        out.push_str(entry);
    }

    (out, tags)
}

/// Processes a file's lines in order, keeping the script-block state between them
#[derive(Debug, Clone)]
pub struct WrapProcessor {
    tracker: ScriptTracker,
    options: AnnotateOptions,
    tags_written: usize,
}

impl WrapProcessor {
    pub fn new(options: WrapOptions) -> Self {
        WrapProcessor {
            tracker: ScriptTracker::new(options.classify),
            options: options.annotate,
            tags_written: 0,
        }
    }

    /// Transform one input line (its line ending already removed).
    ///
    /// Trailing whitespace is trimmed, dialogue gets its wrap tags and the configured line
    /// ending is appended.
    pub fn process_line(&mut self, line: &str) -> String {
        let line = line.trim_end();
        let class = self.tracker.classify(line);

        let mut out = match class {
            LineClass::Dialogue => {
                let (annotated, tags) = annotate_dialogue(line, &self.options);
                self.tags_written += tags;
                annotated
            }
            _ => line.to_string(),
        };
        out.push_str(&self.options.line_ending);
        out
    }

    /// Total tags inserted so far
    pub fn tags_written(&self) -> usize {
        self.tags_written
    }

    pub fn in_script(&self) -> bool {
        self.tracker.in_script()
    }
}

impl Default for WrapProcessor {
    fn default() -> Self {
        Self::new(WrapOptions::default())
    }
}
