use std::ops::RangeInclusive;

use crate::range::{LineIdx, Span};

/// Directive variants with the sub-spans relevant to each kind.
///
/// Matches over this enum are written without wildcard arms so a new kind
/// fails to compile until every consumer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
	Include { argument: Span },
	Define { name: Span },
	Undef { name: Span },
	If,
	Ifdef { name: Span },
	Ifndef { name: Span },
	Else,
	Elif,
	Endif,
	Error,
	Warning,
	Pragma,
	Line,
	Unknown,
}

/// Role of a directive in conditional compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
	/// Opens a conditional group (`#if`, `#ifdef`, `#ifndef`).
	Open,
	/// Starts another branch of the innermost group (`#elif`, `#else`).
	Branch,
	/// Closes the innermost group (`#endif`).
	Close,
}

impl DirectiveKind {
	/// The directive keyword as written after the hash mark.
	pub fn keyword(&self) -> &'static str {
		match self {
			Self::Include { .. } => "include",
			Self::Define { .. } => "define",
			Self::Undef { .. } => "undef",
			Self::If => "if",
			Self::Ifdef { .. } => "ifdef",
			Self::Ifndef { .. } => "ifndef",
			Self::Else => "else",
			Self::Elif => "elif",
			Self::Endif => "endif",
			Self::Error => "error",
			Self::Warning => "warning",
			Self::Pragma => "pragma",
			Self::Line => "line",
			Self::Unknown => "",
		}
	}

	pub fn conditional(&self) -> Option<Conditional> {
		match self {
			Self::If | Self::Ifdef { .. } | Self::Ifndef { .. } => Some(Conditional::Open),
			Self::Elif | Self::Else => Some(Conditional::Branch),
			Self::Endif => Some(Conditional::Close),
			Self::Include { .. }
			| Self::Define { .. }
			| Self::Undef { .. }
			| Self::Error
			| Self::Warning
			| Self::Pragma
			| Self::Line
			| Self::Unknown => None,
		}
	}
}

/// A preprocessor directive from a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
	pub kind: DirectiveKind,
	/// The `#` mark.
	pub hash: Span,
	pub keyword: Span,
	pub first_line: LineIdx,
	/// Last line of the directive, inclusive. Differs from `first_line` for
	/// directives continued with a trailing backslash.
	pub last_line: LineIdx,
	/// For conditional kinds, whether the block this directive introduces was taken.
	pub active: bool,
}

impl Directive {
	pub fn new(kind: DirectiveKind, hash: Span, keyword: Span, lines: RangeInclusive<LineIdx>, active: bool) -> Self {
		let (first_line, last_line) = lines.into_inner();
		Self {
			kind,
			hash,
			keyword,
			first_line,
			last_line: last_line.max(first_line),
			active,
		}
	}

	pub fn lines(&self) -> RangeInclusive<LineIdx> {
		self.first_line..=self.last_line
	}

	/// Returns true if `line` falls within the directive's own line range.
	pub fn owns(&self, line: LineIdx) -> bool {
		self.lines().contains(&line)
	}
}
