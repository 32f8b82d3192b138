//! Token definitions for dialogue lines
//!
//! The tokens are defined using the logos derive macro. Every character of a line belongs
//! to exactly one token, so the lexer never reports an error for well-formed UTF-8.
use logos::Logos;

/// All possible tokens in a dialogue line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Bracketed command plus any whitespace right after the closing bracket
    #[regex(r"\[[^\]]*\]\s*")]
    Command,

    // `[` that is never closed; runs to the end of the line
    #[regex(r"\[[^\]]*")]
    UnclosedCommand,

    // Word with its trailing spaces/hyphens attached
    #[regex(r"[^ \-\[]+[ \-]*", priority = 3)]
    Word,

    // Separators at the start of a text run, before any word. Must open with a space or
    // hyphen; a leading tab belongs to the word that follows it.
    #[regex(r"[ \-][\s\-]*", priority = 2)]
    Gap,
}

impl Token {
    /// Check if this token opens with a bracket
    pub fn is_command(&self) -> bool {
        matches!(self, Token::Command | Token::UnclosedCommand)
    }
}
