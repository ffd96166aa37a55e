//! Repository change watcher
//!
//! Uses the `notify` crate to watch a repository tree and emits one
//! `file_changed` event per relevant filesystem change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   notify    │────>│  event loop  │────>│ EventEmitter │
//! │  (per-dir   │     │ (classify /  │     │ file_changed │
//! │   watches)  │     │ extend set)  │     └──────────────┘
//! └─────────────┘     └──────────────┘
//! ```
//!
//! Watches are registered per directory, non-recursively, so the watch set
//! can be extended as new directories appear. The `.git` directory is
//! watched too: stage and ref updates surface as events on git's internal
//! files. The event loop runs on a background thread and exits only when
//! its session is cancelled.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{EngineError, Result};

use super::events::{EventEmitter, FileChangedEvent, WatchStatusEvent};

/// Configuration for the repository watcher
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// How long the event loop blocks before re-checking cancellation
    /// (default: 100ms)
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Repository change watcher bound to one repository root
pub struct RepoWatcher {
    repo_root: PathBuf,
    config: WatcherConfig,
    emitter: Arc<EventEmitter>,
}

impl RepoWatcher {
    /// Create a new watcher for a repository
    pub fn new(repo_root: PathBuf, emitter: Arc<EventEmitter>) -> Self {
        Self::with_config(repo_root, emitter, WatcherConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        repo_root: PathBuf,
        emitter: Arc<EventEmitter>,
        config: WatcherConfig,
    ) -> Self {
        Self {
            repo_root,
            config,
            emitter,
        }
    }

    /// Start the watch session.
    ///
    /// Registers a watch on every directory currently under the root, then
    /// spawns the event-loop thread. The returned handle owns the session's
    /// cancellation flag; the `notify` watcher itself moves onto the thread,
    /// so no watch state is shared between sessions.
    pub fn spawn(self) -> Result<WatchSession> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx).map_err(|e| EngineError::Watch {
            message: e.to_string(),
        })?;

        let dirs = collect_dirs(&self.repo_root);
        if dirs.is_empty() {
            return Err(EngineError::RepoUnreadable {
                path: self.repo_root.display().to_string(),
            });
        }
        for dir in &dirs {
            if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
                tracing::warn!("failed to watch {}: {}", dir.display(), e);
            }
        }
        tracing::debug!("watching {} directories under {}", dirs.len(), self.repo_root.display());

        let cancelled = Arc::new(AtomicBool::new(false));
        let session = WatchSession {
            cancelled: Arc::clone(&cancelled),
        };

        let repo_root = self.repo_root;
        let emitter = self.emitter;
        let poll_interval = self.config.poll_interval;
        thread::spawn(move || {
            emitter.emit(&WatchStatusEvent::started(&repo_root));
            event_loop(&mut watcher, &rx, poll_interval, &cancelled, &emitter);
            emitter.emit(&WatchStatusEvent::stopped(&repo_root));
            // Keep the watcher alive until the loop exits; dropping it
            // releases every registered watch.
            drop(watcher);
        });

        Ok(session)
    }
}

/// Handle owning one watch session's cancellation flag.
pub struct WatchSession {
    cancelled: Arc<AtomicBool>,
}

impl WatchSession {
    /// Request the event loop to exit at its next wake-up. Safe to call
    /// more than once: only the first call flips the flag.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("watch session cancelled");
        }
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn event_loop(
    watcher: &mut RecommendedWatcher,
    rx: &mpsc::Receiver<notify::Result<Event>>,
    poll_interval: Duration,
    cancelled: &AtomicBool,
    emitter: &EventEmitter,
) {
    while !cancelled.load(Ordering::SeqCst) {
        match rx.recv_timeout(poll_interval) {
            Ok(Ok(event)) => handle_event(event, watcher, emitter),
            // Watch-mechanism errors are logged, not fatal.
            Ok(Err(e)) => tracing::error!("watch error: {}", e),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn handle_event(event: Event, watcher: &mut RecommendedWatcher, emitter: &EventEmitter) {
    // notify occasionally surfaces events with no path attached.
    let Some(path) = event.paths.first() else {
        return;
    };
    if path.as_os_str().is_empty() {
        return;
    }

    match event.kind {
        // Access and metadata-only events are noise: snapshot reads touch
        // atimes on the very files being watched.
        EventKind::Access(_) | EventKind::Modify(ModifyKind::Metadata(_)) => {}
        EventKind::Create(_) => {
            // The entry may already be gone again (ephemeral swap files).
            let Ok(meta) = fs::metadata(path) else {
                return;
            };
            if meta.is_dir() {
                // New directories join the watch set so nested activity is
                // observed; the creation itself is not a content change.
                if let Err(e) = watcher.watch(path, RecursiveMode::NonRecursive) {
                    tracing::warn!("failed to watch {}: {}", path.display(), e);
                }
            } else {
                emitter.emit(&FileChangedEvent::new());
            }
        }
        _ => emitter.emit(&FileChangedEvent::new()),
    }
}

/// Every directory under `root`, the root itself included. Directories
/// that vanish or fail to read mid-walk are skipped.
fn collect_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    push_dirs(root.to_path_buf(), &mut dirs);
    dirs
}

fn push_dirs(dir: PathBuf, dirs: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    dirs.push(dir);
    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            push_dirs(entry.path(), dirs);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
