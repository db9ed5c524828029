use crate::range::{CharLen, Span};

/// Lexical class of a token as reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Identifier,
	Keyword,
	Number,
	/// String literal. The token text holds the value without its quotes.
	String,
	/// Character literal. The token text holds the value without its quotes.
	Character,
	Punctuation,
	Other,
}

/// A lexical token from a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	/// Source location. For literals this covers the delimiters too.
	pub span: Span,
	/// Raw text, or the literal's value for strings and characters.
	pub text: String,
}

impl Token {
	pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
		Self {
			kind,
			span,
			text: text.into(),
		}
	}

	/// Number of delimiter characters the source carries around [`Token::text`].
	pub fn delimiter_len(&self) -> CharLen {
		match self.kind {
			TokenKind::String | TokenKind::Character => 2,
			TokenKind::Identifier | TokenKind::Keyword | TokenKind::Number | TokenKind::Punctuation | TokenKind::Other => 0,
		}
	}

	/// Length of the token as it appears in the source.
	pub fn source_len(&self) -> CharLen {
		self.text.chars().count() + self.delimiter_len()
	}
}
