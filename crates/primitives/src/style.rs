use crate::range::{CharIdx, CharLen};

/// Display category of a style range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
	InactiveCode,
	Directive,
	IncludePath,
	MacroName,
	Comment,
	String,
	Number,
	Keyword,
}

impl StyleCategory {
	pub const ALL: [Self; 8] = [
		Self::InactiveCode,
		Self::Directive,
		Self::IncludePath,
		Self::MacroName,
		Self::Comment,
		Self::String,
		Self::Number,
		Self::Keyword,
	];

	/// Theme scope the category resolves against.
	pub fn scope(self) -> &'static str {
		match self {
			Self::InactiveCode => "ui.text.inactive",
			Self::Directive => "keyword.directive",
			Self::IncludePath => "string.special.path",
			Self::MacroName => "constant.macro",
			Self::Comment => "comment",
			Self::String => "string",
			Self::Number => "constant.numeric",
			Self::Keyword => "keyword",
		}
	}

	#[inline]
	fn idx(self) -> usize {
		self as usize
	}
}

/// A half-open, single-line region of the rendering surface tagged with a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRange {
	/// Document offset of the first styled character.
	pub start: CharIdx,
	pub len: CharLen,
	pub category: StyleCategory,
}

impl StyleRange {
	pub const fn new(start: CharIdx, len: CharLen, category: StyleCategory) -> Self {
		Self { start, len, category }
	}

	/// Offset one past the last styled character.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.start + self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

/// Maps style categories to renderer styles.
///
/// Styles are resolved once up front so per-line rendering is a plain index.
#[derive(Debug, Clone)]
pub struct CategoryStyles<S> {
	styles: [S; StyleCategory::ALL.len()],
}

impl<S> CategoryStyles<S> {
	/// Resolves every category's scope through `resolver`.
	pub fn new<F>(resolver: F) -> Self
	where
		F: Fn(&str) -> S,
	{
		Self {
			styles: std::array::from_fn(|idx| resolver(StyleCategory::ALL[idx].scope())),
		}
	}

	#[inline]
	pub fn style_for(&self, category: StyleCategory) -> &S {
		&self.styles[category.idx()]
	}
}
