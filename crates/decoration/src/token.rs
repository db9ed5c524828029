use nesc_primitives::{LineSpan, StyleCategory, StyleRange, Token, TokenKind};

fn category(kind: TokenKind) -> Option<StyleCategory> {
	match kind {
		TokenKind::String | TokenKind::Character => Some(StyleCategory::String),
		TokenKind::Number => Some(StyleCategory::Number),
		TokenKind::Keyword => Some(StyleCategory::Keyword),
		TokenKind::Identifier | TokenKind::Punctuation | TokenKind::Other => None,
	}
}

/// Pushes a range for every style-bearing token. Identifiers and punctuation
/// are left to default rendering.
pub(crate) fn push_ranges(tokens: &[Token], span: LineSpan, out: &mut Vec<StyleRange>) {
	for token in tokens {
		let Some(category) = category(token.kind) else {
			continue;
		};
		if let Some((start, len)) = span.clip(token.span.start.column, token.source_len()) {
			out.push(StyleRange::new(start, len, category));
		}
	}
}
