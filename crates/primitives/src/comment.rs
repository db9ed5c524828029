use crate::range::{LineIdx, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
	/// `/* ... */`, possibly spanning several lines.
	Block,
	/// `// ...` up to the end of its line.
	Line,
}

/// A comment from a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
	pub kind: CommentKind,
	pub start: Position,
	/// Number of physical lines the comment occupies (at least 1).
	pub line_count: usize,
	/// Raw comment text including delimiters.
	pub body: String,
}

impl Comment {
	pub fn block(start: Position, body: impl Into<String>) -> Self {
		let body = body.into();
		let line_count = body.split('\n').count();
		Self {
			kind: CommentKind::Block,
			start,
			line_count,
			body,
		}
	}

	pub fn line(start: Position, body: impl Into<String>) -> Self {
		Self {
			kind: CommentKind::Line,
			start,
			line_count: 1,
			body: body.into(),
		}
	}

	/// Last line the comment occupies (inclusive).
	pub fn last_line(&self) -> LineIdx {
		self.start.line + self.line_count.max(1) - 1
	}

	/// Returns true if the comment occupies `line`.
	pub fn covers(&self, line: LineIdx) -> bool {
		match self.kind {
			CommentKind::Line => line == self.start.line,
			CommentKind::Block => (self.start.line..=self.last_line()).contains(&line),
		}
	}

	/// Returns the portion of the body that sits on `line`, without its line terminator.
	pub fn body_line(&self, line: LineIdx) -> Option<&str> {
		if !self.covers(line) {
			return None;
		}
		let part = self.body.split('\n').nth(line - self.start.line)?;
		Some(part.strip_suffix('\r').unwrap_or(part))
	}
}
