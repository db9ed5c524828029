//! Line decoration engine.
//!
//! Turns a file's parse result into the style ranges of one document line.
//! Sources are applied in a fixed precedence:
//!
//! 1. Lines inside a conditional branch that was not taken become a single
//!    inactive-code range covering the whole line.
//! 2. Lines owned by a directive get only the directive's spans.
//! 3. Any other line gets comment spans, then token spans.
//!
//! Output is sorted by start offset and never overlaps.

mod comment;
mod directive;
pub mod regions;
mod token;

use std::ops::Range;

use nesc_primitives::{FileResult, LineIdx, LineSpan, StyleCategory, StyleRange};
use ropey::RopeSlice;

pub use regions::ConditionalRegions;

/// Decorates lines of one file.
///
/// Conditional regions are computed once on construction, so a renderer
/// should keep one decorator per redraw rather than call [`decorate`] per line.
#[derive(Debug, Clone)]
pub struct Decorator<'a> {
	file: &'a FileResult,
	regions: ConditionalRegions,
}

impl<'a> Decorator<'a> {
	pub fn new(file: &'a FileResult) -> Self {
		Self {
			file,
			regions: ConditionalRegions::new(file.directives()),
		}
	}

	pub fn regions(&self) -> &ConditionalRegions {
		&self.regions
	}

	/// Style ranges of `line` in `text`.
	///
	/// A line that cannot be resolved against `text` yields no ranges.
	pub fn decorate(&self, text: RopeSlice, line: LineIdx) -> Vec<StyleRange> {
		match LineSpan::resolve(text, line) {
			Ok(span) => self.decorate_line(line, span),
			Err(error) => {
				tracing::trace!(%error, "skipping line decoration");
				Vec::new()
			}
		}
	}

	/// Style ranges of `line`, whose document offsets are given by `span`.
	pub fn decorate_line(&self, line: LineIdx, span: LineSpan) -> Vec<StyleRange> {
		if self.regions.is_inactive(line) {
			return vec![StyleRange::new(span.start, span.width, StyleCategory::InactiveCode)];
		}

		let mut ranges = Vec::new();
		let mut owned = false;
		for directive in self.file.directives().iter().filter(|d| d.owns(line)) {
			owned = true;
			directive::push_ranges(directive, line, span, &mut ranges);
		}
		if !owned {
			comment::push_ranges(self.file.comments(), line, span, &mut ranges);
			token::push_ranges(self.file.tokens_on_line(line), span, &mut ranges);
		}

		normalize(ranges)
	}

	/// Concatenated style ranges of every line in `lines`, in document order.
	pub fn decorate_lines(&self, text: RopeSlice, lines: Range<LineIdx>) -> Vec<StyleRange> {
		lines.flat_map(|line| self.decorate(text, line)).collect()
	}
}

/// Style ranges of a single line of `file`.
pub fn decorate(text: RopeSlice, line: LineIdx, file: &FileResult) -> Vec<StyleRange> {
	Decorator::new(file).decorate(text, line)
}

/// Style ranges of a run of lines of `file`.
pub fn decorate_lines(text: RopeSlice, lines: Range<LineIdx>, file: &FileResult) -> Vec<StyleRange> {
	Decorator::new(file).decorate_lines(text, lines)
}

/// Sorts by start (stable, so emission order breaks ties) and clips each range
/// against the ones before it. Empty ranges are dropped.
fn normalize(mut ranges: Vec<StyleRange>) -> Vec<StyleRange> {
	ranges.sort_by_key(|r| r.start);

	let mut out: Vec<StyleRange> = Vec::with_capacity(ranges.len());
	for mut range in ranges {
		if let Some(prev) = out.last()
			&& range.start < prev.end()
		{
			let end = range.end();
			if end <= prev.end() {
				continue;
			}
			range.start = prev.end();
			range.len = end - range.start;
		}
		if !range.is_empty() {
			out.push(range);
		}
	}
	out
}
