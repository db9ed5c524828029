/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// A 0-based line number.
pub type LineIdx = usize;

/// A line/column location in a source file. Both components are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	pub line: LineIdx,
	pub column: CharIdx,
}

impl Position {
	pub const fn new(line: LineIdx, column: CharIdx) -> Self {
		Self { line, column }
	}
}

/// A run of characters on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	pub start: Position,
	pub len: CharLen,
}

impl Span {
	/// Creates a span of `len` characters starting at `line:column`.
	pub const fn new(line: LineIdx, column: CharIdx, len: CharLen) -> Self {
		Self {
			start: Position::new(line, column),
			len,
		}
	}

	#[inline]
	pub fn line(&self) -> LineIdx {
		self.start.line
	}

	/// Returns the column one past the last character (exclusive).
	#[inline]
	pub fn end_column(&self) -> CharIdx {
		self.start.column + self.len
	}

	/// Returns true if the span lies on `line`.
	#[inline]
	pub fn is_on(&self, line: LineIdx) -> bool {
		self.start.line == line
	}
}
