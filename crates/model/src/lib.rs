//! Project source model.
//!
//! Keeps one parse context per open project together with the latest results
//! the external front end produced for it.
//!
//! # Architecture
//!
//! * [`config`]: project settings loaded from KDL and turned into context options
//! * [`frontend`]: the seam to the external compiler front end
//! * [`cache`]: [`ProjectParseCache`], the shared per-project context and result store
//! * [`worker`]: runs long builds and updates off the calling thread
//!
//! Bookkeeping is serialized by a single lock. Front-end parses run outside it,
//! so readers keep seeing the previous snapshot until a parse finishes and its
//! results are merged.

pub mod cache;
pub mod config;
pub mod error;
pub mod frontend;
pub mod worker;

pub use cache::ProjectParseCache;
pub use config::{ConfigError, ConfigWarning, ContextOption, Project, ProjectConfig, to_args};
pub use error::{ModelError, Result};
pub use frontend::{ContextHandle, FrontEnd, FrontEndError};
pub use worker::ParseJob;
