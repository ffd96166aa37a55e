//! Watch session lifecycle
//!
//! At most one watch session is active per controller. Switching the
//! repository path cancels the previous session before the next one
//! starts. Teardown is fire-and-forget: the old event loop notices the
//! cancellation at its next poll and exits on its own; because each
//! session's `notify` watcher lives on that session's thread, a brief
//! overlap between old-session teardown and new-session startup shares no
//! watch state.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;

use super::events::EventEmitter;
use super::watcher::{RepoWatcher, WatchSession, WatcherConfig};

/// Coordinates switching the watched repository path
pub struct SessionController {
    emitter: Arc<EventEmitter>,
    config: WatcherConfig,
    active: Option<WatchSession>,
}

impl SessionController {
    /// Create a controller emitting through `emitter`
    pub fn new(emitter: Arc<EventEmitter>) -> Self {
        Self::with_config(emitter, WatcherConfig::default())
    }

    /// Create with custom watcher configuration
    pub fn with_config(emitter: Arc<EventEmitter>, config: WatcherConfig) -> Self {
        Self {
            emitter,
            config,
            active: None,
        }
    }

    /// Point the controller at `path`: cancel the active session, if any,
    /// then start a new one bound to `path`.
    pub fn set_repo_path(&mut self, path: PathBuf) -> Result<()> {
        if let Some(prev) = self.active.take() {
            if !prev.is_cancelled() {
                prev.cancel();
            }
        }

        let watcher =
            RepoWatcher::with_config(path, Arc::clone(&self.emitter), self.config.clone());
        self.active = Some(watcher.spawn()?);
        Ok(())
    }

    /// Cancel the active session without starting a new one.
    pub fn stop(&mut self) {
        if let Some(session) = self.active.take() {
            session.cancel();
        }
    }

    /// Whether a watch session is currently active.
    pub fn is_watching(&self) -> bool {
        self.active
            .as_ref()
            .map(|session| !session.is_cancelled())
            .unwrap_or(false)
    }
}
