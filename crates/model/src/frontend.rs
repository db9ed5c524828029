//! Interface to the external compiler front end.

use std::path::Path;

use nesc_primitives::ProjectResult;
use thiserror::Error;

use crate::config::ContextOption;

/// Opaque identifier of one live front-end session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextHandle(pub u64);

/// Failures reported by the front end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrontEndError {
	/// The context options were rejected.
	#[error("front end rejected the configuration: {0}")]
	Configuration(String),

	/// The front end refused the request or crashed while serving it.
	#[error("front end failed: {0}")]
	Failed(String),
}

/// Compiler front end that owns parse contexts.
///
/// `build` and `update` may take a long time; callers must not hold locks
/// across them.
pub trait FrontEnd: Send + Sync {
	fn create_context(&self, options: &[ContextOption]) -> Result<ContextHandle, FrontEndError>;

	fn update_settings(&self, context: ContextHandle, options: &[ContextOption]) -> Result<(), FrontEndError>;

	fn delete_context(&self, context: ContextHandle);

	/// Parses every file of the project.
	fn build(&self, context: ContextHandle) -> Result<ProjectResult, FrontEndError>;

	/// Re-parses `path`. The result also carries any dependents the front end re-resolved.
	fn update(&self, context: ContextHandle, path: &Path) -> Result<ProjectResult, FrontEndError>;
}
