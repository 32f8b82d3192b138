//! Line Classification
//!
//! Decides whether a script line is dialogue that should receive wrap tags, and tracks
//! the `@iscript` ... `@endscript` blocks inside which nothing is tagged.
//!
//! Classification follows this order:
//! 1. Lines inside a script block
//! 2. Empty lines
//! 3. Lines starting with a command prefix (`@` tag line, `*` label, `;` comment)
//! 4. Lines ending with the continuation marker (`\`)
//! 5. Default to dialogue
//!
//! The script-block flag changes only after the marker line itself has been classified,
//! so the marker lines are always passed through.

use serde::{Deserialize, Serialize};

/// Rules that control classification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifyOptions {
    pub command_prefixes: Vec<char>,
    pub continuation_marker: char,
    pub script_start: String,
    pub script_end: String,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        ClassifyOptions {
            command_prefixes: vec!['@', '*', ';'],
            continuation_marker: '\\',
            script_start: "@iscript".to_string(),
            script_end: "@endscript".to_string(),
        }
    }
}

/// Why a line was, or was not, selected for annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineClass {
    Dialogue,
    Script,
    Empty,
    Command,
    Continuation,
}

impl LineClass {
    pub fn is_dialogue(&self) -> bool {
        matches!(self, LineClass::Dialogue)
    }
}

impl std::fmt::Display for LineClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineClass::Dialogue => write!(f, "dialogue"),
            LineClass::Script => write!(f, "script"),
            LineClass::Empty => write!(f, "empty"),
            LineClass::Command => write!(f, "command"),
            LineClass::Continuation => write!(f, "continuation"),
        }
    }
}

/// Classifies lines in file order, carrying the script-block flag between them
#[derive(Debug, Clone)]
pub struct ScriptTracker {
    options: ClassifyOptions,
    in_script: bool,
}

impl ScriptTracker {
    pub fn new(options: ClassifyOptions) -> Self {
        ScriptTracker {
            options,
            in_script: false,
        }
    }

    /// True while inside an `@iscript` block
    pub fn in_script(&self) -> bool {
        self.in_script
    }

    /// Classify `line` (already stripped of its line ending) and update the flag.
    pub fn classify(&mut self, line: &str) -> LineClass {
        let class = self.peek(line);

        if !class.is_dialogue() {
            if line == self.options.script_start {
                tracing::trace!("entering script block");
                self.in_script = true;
            } else if line == self.options.script_end {
                tracing::trace!("leaving script block");
                self.in_script = false;
            }
        }

        class
    }

    /// Classify `line` without touching the flag.
    pub fn peek(&self, line: &str) -> LineClass {
        if self.in_script {
            return LineClass::Script;
        }

        let (Some(first), Some(last)) = (line.chars().next(), line.chars().next_back()) else {
            return LineClass::Empty;
        };

        if self.options.command_prefixes.contains(&first) {
            LineClass::Command
        } else if last == self.options.continuation_marker {
            LineClass::Continuation
        } else {
            LineClass::Dialogue
        }
    }
}

impl Default for ScriptTracker {
    fn default() -> Self {
        Self::new(ClassifyOptions::default())
    }
}
