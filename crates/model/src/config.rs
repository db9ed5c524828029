//! Project settings and the front-end options derived from them.
//!
//! Settings are a KDL document at the project root:
//!
//! ```kdl
//! root "/home/me/Blink"
//! main-config BlinkAppC
//! include "/opt/tinyos/tos/system" "/opt/tinyos/tos/interfaces"
//! define DEBUG "LEVEL=2"
//! default-include "/opt/tinyos/tos/chips/atm128/atm128hardware.h"
//! ```
//!
//! Relative paths resolve against `root`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when reading or validating project settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading the settings file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required field is missing from the settings.
	#[error("missing required field: {0}")]
	MissingField(&'static str),

	/// The project root must be an absolute path.
	#[error("project root is not absolute: {0}")]
	RelativeRoot(PathBuf),

	/// A predefined macro does not start with a valid identifier.
	#[error("invalid macro definition: '{0}'")]
	InvalidMacro(String),

	/// A default-included file does not exist.
	#[error("default include not found: {0}")]
	MissingFile(PathBuf),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal findings while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
	#[error("unknown setting '{0}' ignored")]
	UnknownNode(String),
	#[error("setting '{0}' has no value")]
	Empty(String),
}

/// Settings of one project as far as the front end is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
	pub root: PathBuf,
	/// Top-level configuration the build starts from.
	pub main_config: Option<String>,
	pub include_paths: Vec<PathBuf>,
	/// Predefined macros, `NAME` or `NAME=VALUE`.
	pub macros: Vec<String>,
	/// Files included ahead of every translation unit.
	pub default_includes: Vec<PathBuf>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl ProjectConfig {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			..Self::default()
		}
	}

	pub fn with_main_config(mut self, name: impl Into<String>) -> Self {
		self.main_config = Some(name.into());
		self
	}

	pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.include_paths.push(path.into());
		self
	}

	pub fn with_macro(mut self, definition: impl Into<String>) -> Self {
		self.macros.push(definition.into());
		self
	}

	pub fn with_default_include(mut self, path: impl Into<PathBuf>) -> Self {
		self.default_includes.push(path.into());
		self
	}

	/// Parse a KDL string into a [`ProjectConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Self::default();
		let mut root = None;

		for node in doc.nodes() {
			let name = node.name().value();
			let values = string_args(node);
			if values.is_empty() {
				config.warnings.push(ConfigWarning::Empty(name.to_string()));
				continue;
			}
			match name {
				"root" => root = values.into_iter().next().map(PathBuf::from),
				"main-config" => config.main_config = values.into_iter().next(),
				"include" => config.include_paths.extend(values.into_iter().map(PathBuf::from)),
				"define" => config.macros.extend(values),
				"default-include" => config.default_includes.extend(values.into_iter().map(PathBuf::from)),
				other => config.warnings.push(ConfigWarning::UnknownNode(other.to_string())),
			}
		}

		config.root = root.ok_or(ConfigError::MissingField("root"))?;
		Ok(config)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Validates the settings and builds the ordered option list for the front end.
	///
	/// Order: include paths, macros, default includes, main configuration, root.
	pub fn options(&self) -> Result<Vec<ContextOption>> {
		if !self.root.is_absolute() {
			return Err(ConfigError::RelativeRoot(self.root.clone()));
		}

		let mut options = Vec::with_capacity(self.include_paths.len() + self.macros.len() + self.default_includes.len() + 2);

		for path in &self.include_paths {
			let path = self.resolve(path);
			if !path.is_dir() {
				warn!(path = %path.display(), "include path does not exist");
			}
			options.push(ContextOption::IncludePath(path));
		}

		for definition in &self.macros {
			let name = definition.split_once('=').map_or(definition.as_str(), |(name, _)| name);
			if !is_c_identifier(name) {
				return Err(ConfigError::InvalidMacro(definition.clone()));
			}
			options.push(ContextOption::Define(definition.clone()));
		}

		for path in &self.default_includes {
			let path = self.resolve(path);
			if !path.is_file() {
				return Err(ConfigError::MissingFile(path));
			}
			options.push(ContextOption::DefaultInclude(path));
		}

		if let Some(name) = self.main_config.as_deref().filter(|n| !n.is_empty()) {
			options.push(ContextOption::MainConfig(name.to_string()));
		}
		options.push(ContextOption::ProjectRoot(self.root.clone()));

		Ok(options)
	}

	fn resolve(&self, path: &Path) -> PathBuf {
		if path.is_absolute() {
			path.to_path_buf()
		} else {
			self.root.join(path)
		}
	}
}

/// An open project: its workspace name and current settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
	pub name: String,
	pub config: ProjectConfig,
}

impl Project {
	pub fn new(name: impl Into<String>, config: ProjectConfig) -> Self {
		Self {
			name: name.into(),
			config,
		}
	}
}

/// One flag/value pair passed to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextOption {
	IncludePath(PathBuf),
	Define(String),
	DefaultInclude(PathBuf),
	MainConfig(String),
	ProjectRoot(PathBuf),
}

impl ContextOption {
	pub fn flag(&self) -> &'static str {
		match self {
			Self::IncludePath(_) => "-I",
			Self::Define(_) => "-D",
			Self::DefaultInclude(_) => "-include",
			Self::MainConfig(_) => "-m",
			Self::ProjectRoot(_) => "-p",
		}
	}

	pub fn value(&self) -> Cow<'_, str> {
		match self {
			Self::IncludePath(path) | Self::DefaultInclude(path) | Self::ProjectRoot(path) => path.to_string_lossy(),
			Self::Define(value) | Self::MainConfig(value) => Cow::Borrowed(value),
		}
	}
}

/// Flattens options into the front end's argument list.
pub fn to_args(options: &[ContextOption]) -> Vec<String> {
	options
		.iter()
		.flat_map(|option| [option.flag().to_string(), option.value().into_owned()])
		.collect()
}

/// Extracts the positional string arguments of a node.
fn string_args(node: &KdlNode) -> Vec<String> {
	node.entries()
		.iter()
		.filter(|e| e.name().is_none())
		.filter_map(|e| e.value().as_string())
		.map(String::from)
		.collect()
}

fn is_c_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests;
