//! Per-project parse contexts and their latest results.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use nesc_primitives::{FileResult, ProjectResult};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace, warn};

use crate::config::{ContextOption, Project};
use crate::error::{ModelError, Result};
use crate::frontend::{ContextHandle, FrontEnd};

/// Cache state of one project.
///
/// Exists exactly while the project's front-end context is alive.
struct ProjectEntry {
	context: ContextHandle,
	/// Ticket handed to the next parse. Parses started later get larger tickets.
	next_ticket: u64,
	latest: Option<Stamped<ProjectResult>>,
	/// Latest result per absolute file path.
	files: FxHashMap<PathBuf, Stamped<FileResult>>,
}

/// A stored result and the ticket of the parse that produced it.
struct Stamped<T> {
	ticket: u64,
	value: Arc<T>,
}

impl<T> Stamped<T> {
	fn new(ticket: u64, value: &Arc<T>) -> Self {
		Self {
			ticket,
			value: Arc::clone(value),
		}
	}
}

impl ProjectEntry {
	fn new(context: ContextHandle) -> Self {
		Self {
			context,
			next_ticket: 0,
			latest: None,
			files: FxHashMap::default(),
		}
	}

	fn take_ticket(&mut self) -> u64 {
		self.next_ticket += 1;
		self.next_ticket
	}

	/// Installs every file of `result` unless a parse started after `ticket`
	/// already stored a result for the same path.
	fn absorb(&mut self, ticket: u64, result: &ProjectResult) {
		for file in &result.files {
			match self.files.get(file.path()) {
				Some(stored) if stored.ticket > ticket => {
					trace!(path = %file.path().display(), ticket, stored = stored.ticket, "keeping newer file result");
				}
				_ => {
					self.files.insert(file.path().to_path_buf(), Stamped::new(ticket, file));
				}
			}
		}
	}

	fn install_latest(&mut self, ticket: u64, result: &Arc<ProjectResult>) {
		if self.latest.as_ref().is_none_or(|latest| latest.ticket < ticket) {
			self.latest = Some(Stamped::new(ticket, result));
		}
	}
}

/// Shared store of parse contexts and results, keyed by project name.
///
/// Thread-safe; share it via `Arc<ProjectParseCache>`. One lock guards the
/// project map and every entry. It is held for bookkeeping (context creation,
/// settings updates, deletion, merges, and reads) and released while the front
/// end parses, so a long build never blocks other projects or readers.
pub struct ProjectParseCache {
	front_end: Arc<dyn FrontEnd>,
	entries: Mutex<FxHashMap<String, ProjectEntry>>,
}

impl ProjectParseCache {
	pub fn new(front_end: Arc<dyn FrontEnd>) -> Self {
		Self {
			front_end,
			entries: Mutex::new(FxHashMap::default()),
		}
	}

	/// Creates the project's parse context unless one exists.
	///
	/// On failure no entry is created and existing entries are untouched.
	pub fn ensure_context(&self, project: &Project) -> Result<ContextHandle> {
		if let Some(context) = self.context(&project.name) {
			return Ok(context);
		}

		let options = Self::options(project)?;
		let mut entries = self.entries.lock();
		self.ensure_locked(&mut entries, project, &options)
	}

	/// Resolves the project's context options. Touches the filesystem; never
	/// call it with the entry lock held.
	fn options(project: &Project) -> Result<Vec<ContextOption>> {
		let options = project.config.options().inspect_err(|e| {
			warn!(project = %project.name, error = %e, "invalid project configuration");
		})?;
		Ok(options)
	}

	fn ensure_locked(&self, entries: &mut FxHashMap<String, ProjectEntry>, project: &Project, options: &[ContextOption]) -> Result<ContextHandle> {
		if let Some(entry) = entries.get(&project.name) {
			return Ok(entry.context);
		}

		let context = self.front_end.create_context(options).inspect_err(|e| {
			warn!(project = %project.name, error = %e, "failed to create parse context");
		})?;

		info!(project = %project.name, ?context, options = options.len(), "created parse context");
		entries.insert(project.name.clone(), ProjectEntry::new(context));
		Ok(context)
	}

	/// Pushes the project's current settings to its context.
	///
	/// A project without a context gets a new one built from those settings.
	pub fn update_context(&self, project: &Project) -> Result<()> {
		let options = Self::options(project)?;

		let mut entries = self.entries.lock();
		let Some(entry) = entries.get(&project.name) else {
			self.ensure_locked(&mut entries, project, &options)?;
			return Ok(());
		};

		self.front_end.update_settings(entry.context, &options).inspect_err(|e| {
			warn!(project = %project.name, error = %e, "failed to update parse context settings");
		})?;
		debug!(project = %project.name, context = ?entry.context, "updated parse context settings");
		Ok(())
	}

	/// Ensures the context exists and takes a ticket for a parse in it.
	fn begin_parse(&self, project: &Project) -> Result<(ContextHandle, u64)> {
		let context = self.ensure_context(project)?;
		let mut entries = self.entries.lock();
		let entry = Self::live_entry(&mut entries, &project.name, context)?;
		Ok((context, entry.take_ticket()))
	}

	/// Disposes the project's context and drops its cached results.
	///
	/// Returns false if the project had no context.
	pub fn delete_context(&self, project: &str) -> bool {
		let mut entries = self.entries.lock();
		let Some(entry) = entries.remove(project) else {
			debug!(project, "no parse context to delete");
			return false;
		};
		self.front_end.delete_context(entry.context);
		info!(project, context = ?entry.context, "deleted parse context");
		true
	}

	/// Parses the whole project and installs the results.
	pub fn build(&self, project: &Project) -> Result<Arc<ProjectResult>> {
		let (context, ticket) = self.begin_parse(project)?;

		let result = self.front_end.build(context).inspect_err(|e| {
			warn!(project = %project.name, error = %e, "project build failed");
		})?;
		let result = Arc::new(result);

		let mut entries = self.entries.lock();
		let entry = Self::live_entry(&mut entries, &project.name, context)?;
		entry.absorb(ticket, &result);
		entry.install_latest(ticket, &result);
		debug!(project = %project.name, ticket, files = result.files.len(), problems = result.problems.len(), "merged build results");
		Ok(result)
	}

	/// Re-parses one file and installs the results for it and any re-resolved dependents.
	///
	/// The project-wide result is left as it was. Results never replace those of
	/// a parse that started later.
	pub fn update_file(&self, project: &Project, path: &Path) -> Result<Arc<ProjectResult>> {
		let (context, ticket) = self.begin_parse(project)?;

		let result = self.front_end.update(context, path).inspect_err(|e| {
			warn!(project = %project.name, path = %path.display(), error = %e, "file update failed");
		})?;
		let result = Arc::new(result);

		let mut entries = self.entries.lock();
		let entry = Self::live_entry(&mut entries, &project.name, context)?;
		entry.absorb(ticket, &result);
		debug!(project = %project.name, ticket, path = %path.display(), files = result.files.len(), "merged file update");
		Ok(result)
	}

	/// Returns the entry if it still belongs to `context`.
	///
	/// A parse that outlives its context must not leak results into a newer one.
	fn live_entry<'a>(entries: &'a mut FxHashMap<String, ProjectEntry>, project: &str, context: ContextHandle) -> Result<&'a mut ProjectEntry> {
		match entries.get_mut(project) {
			Some(entry) if entry.context == context => Ok(entry),
			_ => {
				warn!(project, ?context, "parse context deleted during parse, discarding results");
				Err(ModelError::ContextDeleted { project: project.to_string() })
			}
		}
	}

	/// Latest whole-project result, if the project has been built.
	pub fn get_project_result(&self, project: &str) -> Option<Arc<ProjectResult>> {
		self.entries.lock().get(project)?.latest.as_ref().map(|latest| Arc::clone(&latest.value))
	}

	/// Latest result for one file.
	pub fn get_file_result(&self, project: &str, path: &Path) -> Option<Arc<FileResult>> {
		self.entries.lock().get(project)?.files.get(path).map(|file| Arc::clone(&file.value))
	}

	/// Returns true if the project has a live context.
	pub fn contains(&self, project: &str) -> bool {
		self.entries.lock().contains_key(project)
	}

	pub fn context(&self, project: &str) -> Option<ContextHandle> {
		self.entries.lock().get(project).map(|entry| entry.context)
	}

	/// Names of all projects with a live context, sorted.
	pub fn projects(&self) -> Vec<String> {
		let mut names: Vec<_> = self.entries.lock().keys().cloned().collect();
		names.sort();
		names
	}

	/// Paths with a stored result for the project, sorted.
	pub fn file_paths(&self, project: &str) -> Vec<PathBuf> {
		let mut paths: Vec<_> = self
			.entries
			.lock()
			.get(project)
			.map(|entry| entry.files.keys().cloned().collect())
			.unwrap_or_default();
		paths.sort();
		paths
	}
}

#[cfg(test)]
pub(crate) mod mock;
