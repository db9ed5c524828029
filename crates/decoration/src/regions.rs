//! Conditional-compilation regions.
//!
//! Lines between directives are inactive when any enclosing conditional
//! branch was not taken. The innermost open group is tracked on a stack so
//! nested and sibling groups resolve to their nearest enclosing branch.
//! Directive lines themselves are never part of a region; they are styled as
//! directives.

use std::ops::Range;

use nesc_primitives::{Conditional, Directive, LineIdx};

/// Inactive line ranges of one file, sorted and disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalRegions {
	inactive: Vec<Range<LineIdx>>,
}

impl ConditionalRegions {
	/// Computes the regions from directives in document order.
	pub fn new(directives: &[Directive]) -> Self {
		// Taken flag of the current branch of each open group, innermost last.
		let mut groups: Vec<bool> = Vec::new();
		let mut inactive = Vec::new();
		let mut gap_start: LineIdx = 0;

		for directive in directives {
			if groups.contains(&false) && gap_start < directive.first_line {
				inactive.push(gap_start..directive.first_line);
			}

			match directive.kind.conditional() {
				Some(Conditional::Open) => groups.push(directive.active),
				Some(Conditional::Branch) => match groups.last_mut() {
					Some(taken) => *taken = directive.active,
					None => tracing::trace!(line = directive.first_line, "branch directive outside a conditional group"),
				},
				Some(Conditional::Close) => {
					if groups.pop().is_none() {
						tracing::trace!(line = directive.first_line, "unmatched conditional close");
					}
				}
				None => {}
			}

			gap_start = gap_start.max(directive.last_line.saturating_add(1));
		}

		// Unterminated inactive groups run to the end of the file.
		if groups.contains(&false) {
			inactive.push(gap_start..LineIdx::MAX);
		}

		Self { inactive }
	}

	pub fn is_inactive(&self, line: LineIdx) -> bool {
		let idx = self.inactive.partition_point(|range| range.end <= line);
		self.inactive.get(idx).is_some_and(|range| range.contains(&line))
	}

	pub fn ranges(&self) -> &[Range<LineIdx>] {
		&self.inactive
	}
}

#[cfg(test)]
mod tests;
