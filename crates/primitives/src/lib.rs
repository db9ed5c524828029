//! Core types for the nesC source model: positions, parse results, and style ranges.
//!
//! Everything in this crate is produced by the external compiler front end or
//! derived from its output. Values are immutable once published; a newer parse
//! supersedes an older one wholesale.

/// Comment records.
pub mod comment;
/// Preprocessor directive records.
pub mod directive;
/// Line resolution against a document buffer.
pub mod line;
/// Positions and single-line spans, measured in characters.
pub mod range;
/// Per-file and per-project parse results.
pub mod result;
/// Style categories and the ranges handed to the renderer.
pub mod style;
/// Lexical tokens.
pub mod token;

pub use comment::{Comment, CommentKind};
pub use directive::{Conditional, Directive, DirectiveKind};
pub use line::{LineSpan, LocationError, is_line_break};
pub use range::{CharIdx, CharLen, LineIdx, Position, Span};
pub use result::{FileResult, Problem, ProjectResult, Severity};
pub use ropey::{Rope, RopeSlice};
pub use style::{CategoryStyles, StyleCategory, StyleRange};
pub use token::{Token, TokenKind};
