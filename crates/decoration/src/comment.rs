use nesc_primitives::{Comment, CommentKind, LineIdx, LineSpan, StyleCategory, StyleRange};

/// Pushes the portion of every comment that sits on `line`.
///
/// The first line of a comment starts at the comment's column; continuation
/// lines of a block comment start at column 0.
pub(crate) fn push_ranges(comments: &[Comment], line: LineIdx, span: LineSpan, out: &mut Vec<StyleRange>) {
	for comment in comments.iter().take_while(|c| c.start.line <= line) {
		let Some(text) = comment.body_line(line) else {
			continue;
		};
		let column = match comment.kind {
			CommentKind::Line => comment.start.column,
			CommentKind::Block if line == comment.start.line => comment.start.column,
			CommentKind::Block => 0,
		};
		if let Some((start, len)) = span.clip(column, text.chars().count()) {
			out.push(StyleRange::new(start, len, StyleCategory::Comment));
		}
	}
}
