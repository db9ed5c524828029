//! Backward partition scanner.
//!
//! The scanner reads the character immediately before the current position,
//! feeds it to [`step`], and moves one character back whenever the transition
//! consumes it. Tokens are discovered back to front and reported in document
//! order.

use nesc_primitives::{CharIdx, CharLen};
use ropey::RopeSlice;

use crate::{is_identifier_char, is_newline};

/// Token class produced by the partition scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
	Identifier,
	/// A run of non-newline whitespace.
	Whitespace,
	/// Zero-length marker at a line boundary.
	Newline,
	/// `<-`
	LeftArrow,
	/// `->`
	RightArrow,
	/// `.`
	Dot,
	Unknown,
}

/// A scanned token with its document offset and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanToken {
	pub kind: PartitionKind,
	pub offset: CharIdx,
	pub len: CharLen,
	pub value: String,
}

impl ScanToken {
	fn from_text(text: RopeSlice, kind: PartitionKind, offset: CharIdx, len: CharLen) -> Self {
		Self {
			kind,
			offset,
			len,
			value: text.slice(offset..offset + len).to_string(),
		}
	}

	/// Offset one past the token's last character.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.offset + self.len
	}
}

/// Scanner state. Run lengths are carried by the states that accumulate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
	Initial,
	Identifier(CharLen),
	Whitespace(CharLen),
	/// Read `-`, waiting to see whether `<` precedes it.
	Minus,
	/// Read `>`, waiting to see whether `-` precedes it.
	Greater,
	Terminal,
}

/// Outcome of feeding one character to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub next: ScanState,
	/// Token completed by this step, as kind and length. It starts at the
	/// scan position after `consume` has been applied.
	pub emit: Option<(PartitionKind, CharLen)>,
	/// Whether the character was consumed (the position moves back by one).
	pub consume: bool,
}

impl Transition {
	const fn consume(next: ScanState) -> Self {
		Self {
			next,
			emit: None,
			consume: true,
		}
	}

	const fn emit(next: ScanState, kind: PartitionKind, len: CharLen, consume: bool) -> Self {
		Self {
			next,
			emit: Some((kind, len)),
			consume,
		}
	}

	const fn halt() -> Self {
		Self {
			next: ScanState::Terminal,
			emit: None,
			consume: false,
		}
	}
}

/// Single transition of the scanner. `ch` is the character before the current
/// position, or `None` at the start of the buffer.
pub fn step(state: ScanState, ch: Option<char>) -> Transition {
	use PartitionKind as K;
	use ScanState as S;

	match (state, ch) {
		(S::Terminal, _) | (S::Initial, None) => Transition::halt(),
		(S::Initial, Some(c)) if is_identifier_char(c) => Transition::consume(S::Identifier(1)),
		(S::Initial, Some(c)) if is_newline(c) => Transition::emit(S::Terminal, K::Newline, 0, false),
		(S::Initial, Some(c)) if c.is_whitespace() => Transition::consume(S::Whitespace(1)),
		(S::Initial, Some('-')) => Transition::consume(S::Minus),
		(S::Initial, Some('>')) => Transition::consume(S::Greater),
		(S::Initial, Some('.')) => Transition::emit(S::Initial, K::Dot, 1, true),
		(S::Initial, Some(_)) => Transition::emit(S::Terminal, K::Unknown, 1, true),

		(S::Identifier(len), Some(c)) if is_identifier_char(c) => Transition::consume(S::Identifier(len + 1)),
		(S::Identifier(len), _) => Transition::emit(S::Terminal, K::Identifier, len, false),

		(S::Whitespace(len), Some(c)) if c.is_whitespace() && !is_newline(c) => Transition::consume(S::Whitespace(len + 1)),
		(S::Whitespace(len), _) => Transition::emit(S::Initial, K::Whitespace, len, false),

		(S::Minus, Some('<')) => Transition::emit(S::Initial, K::LeftArrow, 2, true),
		(S::Minus, _) => Transition::emit(S::Terminal, K::Unknown, 1, false),

		(S::Greater, Some('-')) => Transition::emit(S::Initial, K::RightArrow, 2, true),
		(S::Greater, _) => Transition::emit(S::Terminal, K::Unknown, 1, false),
	}
}

/// Scans backward from `offset`, returning the recognized tokens in document order.
///
/// Offsets past the end of the buffer yield no tokens.
pub fn scan(text: RopeSlice, offset: CharIdx) -> Vec<ScanToken> {
	if offset > text.len_chars() {
		tracing::trace!(offset, len = text.len_chars(), "scan offset outside buffer");
		return Vec::new();
	}

	let mut tokens = Vec::new();
	let mut state = ScanState::Initial;
	let mut pos = offset;

	while state != ScanState::Terminal {
		let ch = match pos {
			0 => None,
			_ => text.get_char(pos - 1),
		};
		let transition = step(state, ch);
		if transition.consume {
			pos -= 1;
		}
		if let Some((kind, len)) = transition.emit {
			tokens.push(ScanToken::from_text(text, kind, pos, len));
		}
		state = transition.next;
	}

	tokens.reverse();
	tokens
}
