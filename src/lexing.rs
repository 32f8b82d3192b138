//! Line lexing
//!
//!     A dialogue line is lexed in two passes:
//!
//!     1. [segments::tokenize] runs the logos lexer from [tokens] over the line and yields
//!        [Segment]s: bracketed commands, words (with their trailing spaces or hyphens
//!        attached) and leading separator gaps. Concatenating the segments reproduces the
//!        line exactly.
//!     2. [folding::fold_line_commands] merges `[lineN]` commands into the word they are
//!        glued to, producing the entries the annotator tags.
//!
//!     Bracket nesting is not supported: the first `]` closes a command. A `[` with no
//!     closing `]` makes a command that runs to the end of the line.

pub mod folding;
pub mod segments;
pub mod tokens;

pub use folding::{fold_line_commands, LineCommand, LineCommandFolder};
pub use segments::{tokenize, Segment, SegmentKind};
pub use tokens::Token;
