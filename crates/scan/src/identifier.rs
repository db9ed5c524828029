use nesc_primitives::CharIdx;
use ropey::RopeSlice;

use crate::is_identifier_char;
use crate::partition::{PartitionKind, ScanToken};

/// Returns the identifier run ending at `offset`.
///
/// The run may be empty, in which case the token has zero length at `offset`.
/// Returns `None` only when `offset` lies outside the buffer.
pub fn identifier_before(text: RopeSlice, offset: CharIdx) -> Option<ScanToken> {
	if offset > text.len_chars() {
		tracing::trace!(offset, len = text.len_chars(), "identifier offset outside buffer");
		return None;
	}

	let mut start = offset;
	while start > 0 && text.get_char(start - 1).is_some_and(is_identifier_char) {
		start -= 1;
	}

	Some(ScanToken {
		kind: PartitionKind::Identifier,
		offset: start,
		len: offset - start,
		value: text.slice(start..offset).to_string(),
	})
}
