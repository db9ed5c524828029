use nesc_primitives::CharIdx;
use ropey::RopeSlice;

use crate::identifier::identifier_before;
use crate::partition::{PartitionKind, scan};

/// Direction of a nesC wiring arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringDirection {
	/// `User -> Provider`
	Forward,
	/// `Provider <- User`
	Backward,
}

/// What a completion request at a cursor offset is completing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
	/// An identifier with no recognized punctuation before it.
	Plain { prefix: String },
	/// A member after `.`, with the receiver identifier when one precedes the dot.
	Member { receiver: Option<String>, prefix: String },
	/// An endpoint after a wiring arrow.
	Wiring { direction: WiringDirection, prefix: String },
}

impl CompletionContext {
	/// Classifies the completion request at `offset`.
	///
	/// Returns `None` only when the offset lies outside the buffer.
	pub fn at(text: RopeSlice, offset: CharIdx) -> Option<Self> {
		let prefix = identifier_before(text, offset)?;
		let before: Vec<_> = scan(text, prefix.offset)
			.into_iter()
			.filter(|t| t.kind != PartitionKind::Whitespace)
			.collect();
		let prefix = prefix.value;

		let Some(last) = before.last() else {
			return Some(Self::Plain { prefix });
		};

		let context = match last.kind {
			PartitionKind::Dot => {
				let receiver = before
					.iter()
					.rev()
					.nth(1)
					.filter(|t| t.kind == PartitionKind::Identifier)
					.map(|t| t.value.clone());
				Self::Member { receiver, prefix }
			}
			PartitionKind::RightArrow => Self::Wiring {
				direction: WiringDirection::Forward,
				prefix,
			},
			PartitionKind::LeftArrow => Self::Wiring {
				direction: WiringDirection::Backward,
				prefix,
			},
			PartitionKind::Identifier | PartitionKind::Whitespace | PartitionKind::Newline | PartitionKind::Unknown => Self::Plain { prefix },
		};
		Some(context)
	}

	/// The identifier text typed so far.
	pub fn prefix(&self) -> &str {
		match self {
			Self::Plain { prefix } | Self::Member { prefix, .. } | Self::Wiring { prefix, .. } => prefix,
		}
	}
}
