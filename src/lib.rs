//! gitview-engine: live view of a git working tree
//!
//! This library exposes a repository to a front-end as a set of on-demand
//! snapshots (tracked files, branch refs, loose objects, the staging index)
//! plus a change-watch service that emits a `file_changed` event whenever
//! the tree changes on disk. Content is pulled, changes are pushed: a
//! consumer re-reads snapshots when notified instead of trusting any event
//! payload.
//!
//! Git object-model semantics are delegated to the external `git` binary
//! invoked as a subprocess; the engine never parses git's on-disk formats.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gitview_engine::server::{EventEmitter, SessionController};
//! use gitview_engine::snapshot;
//!
//! let emitter = Arc::new(EventEmitter::new(false));
//! let events = emitter.subscribe();
//!
//! let mut controller = SessionController::new(emitter);
//! controller.set_repo_path("/path/to/repo".into())?;
//!
//! // On every `file_changed` event, pull fresh snapshots:
//! let files = snapshot::list_files("/path/to/repo".as_ref())?;
//! let refs = snapshot::list_refs("/path/to/repo".as_ref())?;
//! # Ok::<(), gitview_engine::EngineError>(())
//! ```

pub mod cli;
pub mod error;
pub mod git;
pub mod paths;
pub mod server;
pub mod snapshot;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{EngineError, Result};
pub use git::{is_git_repo, IndexEntry};
pub use server::{EventEmitter, SessionController, WatchSession, WatcherConfig};
pub use snapshot::{
    index_entries, index_snapshot, list_files, list_objects, list_refs, read_head, LooseObject,
    RepoFile,
};
