//! Backward scanners over document text.
//!
//! Completion requests only know the cursor offset; these scanners walk
//! backward from it to recover what is being completed.
//!
//! * [`partition`]: finite-state scanner classifying identifiers, whitespace,
//!   arrows, dots, and newlines before a position.
//! * [`identifier`]: the identifier prefix immediately before the cursor.
//! * [`context`]: classifies a completion request from both scanners.

pub mod context;
pub mod identifier;
pub mod partition;

pub use context::{CompletionContext, WiringDirection};
pub use identifier::identifier_before;
pub use partition::{PartitionKind, ScanState, ScanToken, Transition, scan, step};

/// Returns whether a character may appear in an identifier.
#[inline]
pub fn is_identifier_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Returns whether a character is a line break, using the buffer's definition.
#[inline]
pub fn is_newline(c: char) -> bool {
	nesc_primitives::is_line_break(c)
}
