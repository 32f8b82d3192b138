//! Segment tokenization
//!
//! This module turns a dialogue line into [Segment]s using the logos lexer from
//! [tokens](super::tokens). Segments borrow from the line and carry their byte span, so
//! callers can always get back to the source text.

use super::tokens::Token;
use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// What a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// `[...]` including trailing whitespace, or an unclosed `[` running to end of line
    Command,
    /// A word plus the spaces or hyphens that follow it
    Word,
    /// Separators at the start of a text run
    Gap,
}

/// A slice of a line tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

impl<'a> Segment<'a> {
    pub fn is_command(&self) -> bool {
        self.kind == SegmentKind::Command
    }

    /// True when the segment ends in a space or hyphen
    pub fn ends_with_separator(&self) -> bool {
        self.text.ends_with([' ', '-'])
    }
}

/// Split a line into ordered segments.
///
/// Nothing is dropped: the segment texts concatenate back to `line`.
pub fn tokenize(line: &str) -> Vec<Segment<'_>> {
    let mut lexer = Token::lexer(line);
    let mut segments = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(token) if token.is_command() => SegmentKind::Command,
            Ok(Token::Gap) => SegmentKind::Gap,
            // Unmatched input is kept as plain text
            Ok(_) | Err(_) => SegmentKind::Word,
        };
        segments.push(Segment {
            kind,
            text: lexer.slice(),
            span: lexer.span(),
        });
    }

    segments
}
