use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::comment::Comment;
use crate::directive::Directive;
use crate::range::LineIdx;
use crate::token::Token;

/// Parse output for a single file.
///
/// Built once by the front end and never mutated afterwards; a newer parse of
/// the same file produces a new value that replaces this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
	path: PathBuf,
	tokens: Vec<Token>,
	comments: Vec<Comment>,
	directives: Vec<Directive>,
	/// Index range into `tokens` for every line that carries at least one token.
	line_tokens: FxHashMap<LineIdx, Range<usize>>,
}

impl FileResult {
	/// Creates a file result, ordering every sequence by source position.
	pub fn new(path: impl Into<PathBuf>, mut tokens: Vec<Token>, mut comments: Vec<Comment>, mut directives: Vec<Directive>) -> Self {
		tokens.sort_by_key(|t| t.span.start);
		comments.sort_by_key(|c| c.start);
		directives.sort_by_key(|d| (d.first_line, d.hash.start.column));

		let mut line_tokens: FxHashMap<LineIdx, Range<usize>> = FxHashMap::default();
		for (idx, token) in tokens.iter().enumerate() {
			line_tokens
				.entry(token.span.line())
				.and_modify(|range| range.end = idx + 1)
				.or_insert(idx..idx + 1);
		}

		Self {
			path: path.into(),
			tokens,
			comments,
			directives,
			line_tokens,
		}
	}

	/// Absolute path of the parsed file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn comments(&self) -> &[Comment] {
		&self.comments
	}

	pub fn directives(&self) -> &[Directive] {
		&self.directives
	}

	/// Returns the tokens that start on `line`, in column order.
	pub fn tokens_on_line(&self, line: LineIdx) -> &[Token] {
		self.line_tokens
			.get(&line)
			.map(|range| &self.tokens[range.clone()])
			.unwrap_or_default()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Error,
	Warning,
}

/// A problem the front end reported while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
	pub path: PathBuf,
	pub line: LineIdx,
	pub severity: Severity,
	pub message: String,
}

/// Output of a whole-project build or of a single-file update.
///
/// An update carries the re-parsed file plus whichever dependents the front
/// end decided to re-resolve.
#[derive(Debug, Clone, Default)]
pub struct ProjectResult {
	pub files: Vec<Arc<FileResult>>,
	pub problems: Vec<Problem>,
}

impl ProjectResult {
	pub fn new(files: Vec<FileResult>, problems: Vec<Problem>) -> Self {
		Self {
			files: files.into_iter().map(Arc::new).collect(),
			problems,
		}
	}

	/// Looks up the result for `path` within this build.
	pub fn file(&self, path: &Path) -> Option<&Arc<FileResult>> {
		self.files.iter().find(|f| f.path() == path)
	}

	pub fn error_count(&self) -> usize {
		self.problems.iter().filter(|p| p.severity == Severity::Error).count()
	}
}
