//! Line-command folding
//!
//!     Scripts use `[lineN]` to draw a dash N characters wide inside a sentence, e.g.
//!     `[line3]what?`. For wrapping purposes such a command is part of the word it touches,
//!     so it is folded into the neighbouring entry unless a space or hyphen separates them.
//!
//!     Folding rules, applied to each segment in order:
//!
//!     - `[lineN]`: appended as a new entry when the previous entry ends in a space or
//!       hyphen (or there is none), otherwise glued onto the previous entry. Folding stays
//!       pending for the next segment.
//!     - anything else: glued onto the previous entry when folding is pending and the
//!       previous entry does not end in a space or hyphen, otherwise appended. Clears the
//!       pending state.

use super::segments::Segment;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored match for a line command at the start of some text
static LINE_COMMAND_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[line([0-9]+)\]").unwrap());

/// Every line command inside some text
static LINE_COMMAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[line([0-9]+)\]").unwrap());

/// A recognized `[lineN]` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCommand {
    pub units: usize,
}

impl LineCommand {
    /// Parse a line command at the very start of `text`.
    pub fn at_start(text: &str) -> Option<Self> {
        let caps = LINE_COMMAND_START.captures(text)?;
        let units = caps[1].parse().ok()?;
        Some(LineCommand { units })
    }

    /// Replace every `[lineN]` in `text` with `N * hyphens_per_unit` hyphens.
    ///
    /// Commands whose count does not fit in a `usize` are left as they are.
    pub fn expand_all(text: &str, hyphens_per_unit: usize) -> String {
        LINE_COMMAND
            .replace_all(text, |caps: &regex::Captures<'_>| {
                match caps[1].parse::<usize>() {
                    Ok(units) => "-".repeat(units.saturating_mul(hyphens_per_unit)),
                    Err(_) => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Accumulates folded entries one segment at a time
#[derive(Debug, Default)]
pub struct LineCommandFolder {
    entries: Vec<String>,
    pending: bool,
}

impl LineCommandFolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: &Segment<'_>) {
        let glued = self
            .entries
            .last()
            .is_some_and(|last| !last.ends_with([' ', '-']));

        let is_line_command = segment.is_command() && LineCommand::at_start(segment.text).is_some();
        let fold = if is_line_command {
            glued
        } else {
            self.pending && glued
        };

        match self.entries.last_mut() {
            Some(last) if fold => last.push_str(segment.text),
            _ => self.entries.push(segment.text.to_string()),
        }
        self.pending = is_line_command;
    }

    pub fn finish(self) -> Vec<String> {
        self.entries
    }
}

/// Fold `[lineN]` commands into the entries they are glued to.
pub fn fold_line_commands(segments: &[Segment<'_>]) -> Vec<String> {
    let mut folder = LineCommandFolder::new();
    for segment in segments {
        folder.push(segment);
    }
    folder.finish()
}
