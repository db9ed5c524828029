use nesc_primitives::{Directive, DirectiveKind, LineIdx, LineSpan, Span, StyleCategory, StyleRange};

/// Kind-specific span of a directive and the category it is drawn in.
fn kind_span(kind: &DirectiveKind) -> Option<(Span, StyleCategory)> {
	match *kind {
		DirectiveKind::Include { argument } => Some((argument, StyleCategory::IncludePath)),
		DirectiveKind::Define { name } | DirectiveKind::Undef { name } | DirectiveKind::Ifdef { name } | DirectiveKind::Ifndef { name } => {
			Some((name, StyleCategory::MacroName))
		}
		DirectiveKind::If
		| DirectiveKind::Else
		| DirectiveKind::Elif
		| DirectiveKind::Endif
		| DirectiveKind::Error
		| DirectiveKind::Warning
		| DirectiveKind::Pragma
		| DirectiveKind::Line
		| DirectiveKind::Unknown => None,
	}
}

/// Pushes the directive's spans that sit on `line`.
pub(crate) fn push_ranges(directive: &Directive, line: LineIdx, span: LineSpan, out: &mut Vec<StyleRange>) {
	let generic = [(directive.hash, StyleCategory::Directive), (directive.keyword, StyleCategory::Directive)];
	for (part, category) in generic.into_iter().chain(kind_span(&directive.kind)) {
		if !part.is_on(line) {
			continue;
		}
		if let Some((start, len)) = span.clip(part.start.column, part.len) {
			out.push(StyleRange::new(start, len, category));
		}
	}
}
