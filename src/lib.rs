//! # kswrap
//!
//! Word-wrap hint annotation for KAG (Kirikiri) visual-novel scripts.
//!
//! The engine's stock text layer cannot break English prose at word boundaries. Patched
//! system scripts can, provided every word in a dialogue line is preceded by a
//! `[wrap text="..."]` tag announcing the word that follows. This crate inserts those tags
//! ([annotate]) and removes them again ([unwrap]).
//!
//! Processing layers:
//!
//!     - [lexing]: splits a line into bracketed commands and words, then folds `[lineN]`
//!       commands into the words they are glued to.
//!     - [classify]: decides which lines are dialogue and tracks `@iscript` blocks.
//!     - [annotate]: emits exactly one wrap tag per word entry.
//!     - [unwrap]: strips wrap tags.
//!     - [pipeline]: line-stream entry points and the file runner (decode, transform,
//!       encode, write).
//!
//! Ambient pieces live in [config], [encoding], [error] and [inspect].

pub mod annotate;
pub mod classify;
pub mod config;
pub mod encoding;
pub mod error;
pub mod inspect;
pub mod lexing;
pub mod pipeline;
pub mod unwrap;

pub use annotate::{AnnotateOptions, WrapOptions, WrapProcessor};
pub use classify::{ClassifyOptions, LineClass, ScriptTracker};
pub use error::WrapError;
pub use pipeline::{annotate, deannotate, Action, Job, Summary};
