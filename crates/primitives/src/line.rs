use ropey::RopeSlice;
use thiserror::Error;

use crate::range::{CharIdx, CharLen, LineIdx};

/// A line number that cannot be resolved against the current buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("line {line} is out of range for a buffer of {len_lines} lines")]
pub struct LocationError {
	pub line: LineIdx,
	pub len_lines: usize,
}

/// Document offsets of one line, excluding its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
	pub start: CharIdx,
	pub width: CharLen,
}

impl LineSpan {
	pub fn resolve(text: RopeSlice, line: LineIdx) -> Result<Self, LocationError> {
		let len_lines = text.len_lines();
		if line >= len_lines {
			return Err(LocationError { line, len_lines });
		}
		let start = text.try_line_to_char(line).map_err(|_| LocationError { line, len_lines })?;
		Ok(Self {
			start,
			width: content_width(text.line(line)),
		})
	}

	/// Offset one past the last content character.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.start + self.width
	}

	/// Clips a run starting at `column` to the line, returning its document
	/// offset and remaining length. Returns `None` if the run starts past the line.
	pub fn clip(&self, column: CharIdx, len: CharLen) -> Option<(CharIdx, CharLen)> {
		if column > self.width {
			return None;
		}
		Some((self.start + column, len.min(self.width - column)))
	}
}

/// Returns whether ropey treats `c` as a line break.
#[inline]
pub fn is_line_break(c: char) -> bool {
	matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Width of a rope line without its trailing line break.
fn content_width(line: RopeSlice) -> CharLen {
	let mut width = line.len_chars();
	if width > 0 && is_line_break(line.char(width - 1)) {
		width -= 1;
		if width > 0 && line.char(width) == '\n' && line.char(width - 1) == '\r' {
			width -= 1;
		}
	}
	width
}
