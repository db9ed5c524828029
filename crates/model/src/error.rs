//! Error types for cache operations.

use thiserror::Error;

use crate::config::ConfigError;
use crate::frontend::FrontEndError;

/// Errors returned by [`ProjectParseCache`](crate::ProjectParseCache) operations.
///
/// Every variant is recoverable and leaves the cache as it was before the call.
#[derive(Debug, Error)]
pub enum ModelError {
	/// Project settings are malformed or reference missing files.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The front end rejected the request or failed while serving it.
	#[error(transparent)]
	FrontEnd(#[from] FrontEndError),

	/// The project's context was deleted while a parse was running; its results were discarded.
	#[error("parse context for project '{project}' was deleted during the parse")]
	ContextDeleted { project: String },
}

/// Result type for cache operations.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;
