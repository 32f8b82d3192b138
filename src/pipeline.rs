//! Line-stream entry points and the file runner.
//!
//! [annotate] and [deannotate] work on already-decoded lines and yield one output line per
//! input line. [Job::run] wraps them with file I/O: the whole input is read and decoded,
//! transformed, encoded and only then written, so a decoding failure never leaves a
//! truncated output file behind.

use crate::annotate::{WrapOptions, WrapProcessor};
use crate::encoding::ScriptEncoding;
use crate::error::WrapError;
use crate::inspect;
use crate::unwrap::{remove_wrap_tags, strip_wrap_tags};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Annotate a stream of lines (line endings removed).
///
/// Each output line carries the configured line ending.
pub fn annotate<I, S>(lines: I, options: WrapOptions) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut processor = WrapProcessor::new(options);
    lines
        .into_iter()
        .map(move |line| processor.process_line(line.as_ref()))
}

/// Remove wrap tags from a stream of lines. Line endings, if present, are kept.
pub fn deannotate<I, S>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| strip_wrap_tags(line.as_ref()).into_owned())
}

/// Annotate a whole decoded file.
pub fn wrap_text(text: &str, options: WrapOptions) -> String {
    annotate(text.lines(), options).collect()
}

/// Strip a whole decoded file, leaving its line endings untouched.
pub fn unwrap_text(text: &str) -> String {
    deannotate(text.split_inclusive('\n')).collect()
}

/// What to do with the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wrap,
    Unwrap,
    /// Dump the token view as JSON
    Tokens,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Action::Wrap),
            "unwrap" => Ok(Action::Unwrap),
            "tokens" => Ok(Action::Tokens),
            other => Err(format!("Unknown action: {}", other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wrap => write!(f, "wrap"),
            Action::Unwrap => write!(f, "unwrap"),
            Action::Tokens => write!(f, "tokens"),
        }
    }
}

/// One file to process
#[derive(Debug, Clone)]
pub struct Job {
    pub action: Action,
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_encoding: String,
    pub output_encoding: String,
}

/// What a finished job did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    /// Tags inserted (wrap) or removed (unwrap)
    pub tags: usize,
}

impl Job {
    pub fn run(&self, options: WrapOptions) -> Result<Summary, WrapError> {
        let input_encoding = ScriptEncoding::resolve(&self.input_encoding)?;
        let output_encoding = ScriptEncoding::resolve_output(&self.output_encoding)?;
        tracing::debug!(
            action = %self.action,
            input = %self.input.display(),
            input_encoding = input_encoding.encoding.name(),
            output_encoding = output_encoding.encoding.name(),
            "starting job"
        );

        let bytes = fs::read(&self.input).map_err(|e| WrapError::io(&self.input, e))?;
        let text = input_encoding.decode(&bytes, &self.input)?;

        let (output, summary) = match self.action {
            Action::Wrap => {
                let mut processor = WrapProcessor::new(options);
                let mut output = String::with_capacity(text.len() * 2);
                let mut lines = 0;
                for line in text.lines() {
                    output.push_str(&processor.process_line(line));
                    lines += 1;
                }
                let tags = processor.tags_written();
                (output, Summary { lines, tags })
            }
            Action::Unwrap => {
                let mut output = String::with_capacity(text.len());
                let mut summary = Summary { lines: 0, tags: 0 };
                for line in text.split_inclusive('\n') {
                    let (stripped, removed) = remove_wrap_tags(line);
                    output.push_str(&stripped);
                    summary.lines += 1;
                    summary.tags += removed;
                }
                (output, summary)
            }
            Action::Tokens => {
                let reports = inspect::inspect_text(&text, &options);
                let lines = reports.len();
                (inspect::to_json(&reports)?, Summary { lines, tags: 0 })
            }
        };

        let encoded = output_encoding.encode(&output, &self.output)?;
        fs::write(&self.output, encoded).map_err(|e| WrapError::io(&self.output, e))?;
        tracing::debug!(lines = summary.lines, tags = summary.tags, "job finished");

        Ok(summary)
    }

    /// Message printed after a successful run
    pub fn completion_message(&self) -> String {
        let verb = match self.action {
            Action::Wrap => "Wrapping",
            Action::Unwrap => "Unwrapping",
            Action::Tokens => "Token dump",
        };
        format!(
            "{} finished! Output file saved as {} using {}.",
            verb,
            self.output.display(),
            self.output_encoding
        )
    }
}
