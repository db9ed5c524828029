//! Background execution of long cache operations.
//!
//! Builds and file updates can take seconds. These helpers run them on a
//! dedicated thread so the caller (typically the UI thread) keeps rendering
//! from the previous snapshot until the merge lands.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use nesc_primitives::ProjectResult;

use crate::cache::ProjectParseCache;
use crate::config::Project;
use crate::error::Result;

/// Handle to a build or update running in the background.
pub type ParseJob = JoinHandle<Result<Arc<ProjectResult>>>;

impl ProjectParseCache {
	/// Runs [`ProjectParseCache::build`] on a named worker thread.
	pub fn spawn_build(self: &Arc<Self>, project: Project) -> std::io::Result<ParseJob> {
		let cache = Arc::clone(self);
		spawn_named_thread(thread_name("build", &project.name), move || cache.build(&project))
	}

	/// Runs [`ProjectParseCache::update_file`] on a named worker thread.
	pub fn spawn_update_file(self: &Arc<Self>, project: Project, path: PathBuf) -> std::io::Result<ParseJob> {
		let cache = Arc::clone(self);
		spawn_named_thread(thread_name("update", &project.name), move || cache.update_file(&project, &path))
	}
}

fn thread_name(kind: &str, project: &str) -> String {
	let project: String = project.chars().filter(|c| *c != '\0').collect();
	format!("nesc-{kind}-{project}")
}

/// Spawns a dedicated named OS thread.
fn spawn_named_thread<F, R>(name: String, f: F) -> std::io::Result<JoinHandle<R>>
where
	F: FnOnce() -> R + Send + 'static,
	R: Send + 'static,
{
	tracing::trace!(thread = %name, "worker.spawn_named_thread");
	std::thread::Builder::new().name(name).spawn(f)
}
