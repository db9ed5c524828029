//! Scripted front end for cache tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use nesc_primitives::ProjectResult;
use parking_lot::{Condvar, Mutex};

use crate::config::ContextOption;
use crate::frontend::{ContextHandle, FrontEnd, FrontEndError};

/// Front end that records calls and returns queued results.
///
/// With [`MockFrontEnd::gated`], builds block until [`MockFrontEnd::proceed`]
/// is called, so tests can observe the cache while a build is in flight.
/// File updates are never gated.
pub(crate) struct MockFrontEnd {
	next_context: AtomicU64,
	pub(crate) created: AtomicUsize,
	pub(crate) parses_started: AtomicUsize,
	pub(crate) deleted: Mutex<Vec<ContextHandle>>,
	pub(crate) settings: Mutex<Vec<(ContextHandle, Vec<ContextOption>)>>,
	pub(crate) updated_paths: Mutex<Vec<PathBuf>>,
	create_error: Mutex<Option<FrontEndError>>,
	settings_error: Mutex<Option<FrontEndError>>,
	results: Mutex<VecDeque<Result<ProjectResult, FrontEndError>>>,
	gate: Option<(Mutex<usize>, Condvar)>,
}

impl MockFrontEnd {
	pub(crate) fn new() -> Self {
		Self {
			next_context: AtomicU64::new(1),
			created: AtomicUsize::new(0),
			parses_started: AtomicUsize::new(0),
			deleted: Mutex::new(Vec::new()),
			settings: Mutex::new(Vec::new()),
			updated_paths: Mutex::new(Vec::new()),
			create_error: Mutex::new(None),
			settings_error: Mutex::new(None),
			results: Mutex::new(VecDeque::new()),
			gate: None,
		}
	}

	pub(crate) fn gated() -> Self {
		Self {
			gate: Some((Mutex::new(0), Condvar::new())),
			..Self::new()
		}
	}

	pub(crate) fn fail_create(&self, error: FrontEndError) {
		*self.create_error.lock() = Some(error);
	}

	pub(crate) fn fail_update_settings(&self, error: FrontEndError) {
		*self.settings_error.lock() = Some(error);
	}

	pub(crate) fn push_result(&self, result: Result<ProjectResult, FrontEndError>) {
		self.results.lock().push_back(result);
	}

	/// Allows one pending build to proceed.
	pub(crate) fn proceed(&self) {
		if let Some((permits, cvar)) = &self.gate {
			*permits.lock() += 1;
			cvar.notify_one();
		}
	}

	fn parse(&self, gated: bool) -> Result<ProjectResult, FrontEndError> {
		self.parses_started.fetch_add(1, Ordering::SeqCst);
		if let Some((permits, cvar)) = self.gate.as_ref().filter(|_| gated) {
			let mut permits = permits.lock();
			while *permits == 0 {
				cvar.wait(&mut permits);
			}
			*permits -= 1;
		}
		self.results.lock().pop_front().unwrap_or_else(|| Ok(ProjectResult::default()))
	}
}

impl FrontEnd for MockFrontEnd {
	fn create_context(&self, _options: &[ContextOption]) -> Result<ContextHandle, FrontEndError> {
		if let Some(error) = self.create_error.lock().clone() {
			return Err(error);
		}
		self.created.fetch_add(1, Ordering::SeqCst);
		Ok(ContextHandle(self.next_context.fetch_add(1, Ordering::SeqCst)))
	}

	fn update_settings(&self, context: ContextHandle, options: &[ContextOption]) -> Result<(), FrontEndError> {
		if let Some(error) = self.settings_error.lock().clone() {
			return Err(error);
		}
		self.settings.lock().push((context, options.to_vec()));
		Ok(())
	}

	fn delete_context(&self, context: ContextHandle) {
		self.deleted.lock().push(context);
	}

	fn build(&self, _context: ContextHandle) -> Result<ProjectResult, FrontEndError> {
		self.parse(true)
	}

	fn update(&self, _context: ContextHandle, path: &Path) -> Result<ProjectResult, FrontEndError> {
		self.updated_paths.lock().push(path.to_path_buf());
		self.parse(false)
	}
}
