//! Engine events for push notifications to the UI bridge
//!
//! Events are JSON objects on a single line (JSON Lines format) written to
//! stdout, plus an in-process broadcast channel for embedded consumers.
//!
//! # Event Format
//!
//! ```json
//! {"type":"file_changed"}
//! {"type":"watch_status","status":"started","repo_path":"/repo",...}
//! ```
//!
//! # Contract
//!
//! `file_changed` is at-least-once and carries no payload beyond the event
//! name: consumers re-pull snapshots on receipt instead of trusting event
//! content.

use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;

use parking_lot::Mutex;
use serde::Serialize;

/// Trait for engine events
pub trait EngineEvent: Serialize {
    fn event_type() -> &'static str;
}

/// Wrapper for events with type field
#[derive(Serialize)]
struct EventWrapper<'a, P: Serialize> {
    #[serde(rename = "type")]
    event_type: &'static str,
    #[serde(flatten)]
    payload: &'a P,
}

/// Serialized event handed to broadcast subscribers
#[derive(Debug, Clone)]
pub struct BroadcastEvent {
    pub event_type: String,
    pub payload_json: String,
}

/// Event emitter for the UI bridge.
///
/// One emitter is shared by every watch session of a
/// [`SessionController`](super::SessionController); subscribers registered
/// through [`subscribe`](Self::subscribe) observe every event emitted
/// through it.
pub struct EventEmitter {
    stdout: bool,
    subscribers: Mutex<Vec<mpsc::Sender<BroadcastEvent>>>,
}

impl EventEmitter {
    /// Create a new emitter. `stdout` controls whether events are also
    /// written as JSON lines to standard output.
    pub fn new(stdout: bool) -> Self {
        Self {
            stdout,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a subscriber receiving every event emitted from now on.
    pub fn subscribe(&self) -> mpsc::Receiver<BroadcastEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Emit an event to stdout and all subscribers.
    pub fn emit<E: EngineEvent>(&self, event: &E) {
        if self.stdout {
            let wrapper = EventWrapper {
                event_type: E::event_type(),
                payload: event,
            };
            if let Ok(json) = serde_json::to_string(&wrapper) {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                // Ignore write errors (the consumer may have closed the pipe)
                let _ = writeln!(handle, "{}", json);
                let _ = handle.flush();
            }
        }

        let mut subscribers = self.subscribers.lock();
        if subscribers.is_empty() {
            return;
        }

        let broadcast = BroadcastEvent {
            event_type: E::event_type().to_string(),
            payload_json: serde_json::to_string(event).unwrap_or_default(),
        };
        // Disconnected subscribers are dropped on the way through.
        subscribers.retain(|tx| tx.send(broadcast.clone()).is_ok());
    }
}

// ============================================================================
// Event Types
// ============================================================================

/// Emitted when anything under the watched repository changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileChangedEvent {}

impl FileChangedEvent {
    pub fn new() -> Self {
        Self {}
    }
}

impl EngineEvent for FileChangedEvent {
    fn event_type() -> &'static str {
        "file_changed"
    }
}

/// Emitted when a watch session starts or stops.
#[derive(Debug, Clone, Serialize)]
pub struct WatchStatusEvent {
    /// Session status (`started`, `stopped`)
    pub status: String,
    /// Repository root the session is bound to
    pub repo_path: String,
    /// Timestamp (ISO 8601)
    pub timestamp: String,
}

impl WatchStatusEvent {
    pub fn started(repo_path: &Path) -> Self {
        Self::with_status("started", repo_path)
    }

    pub fn stopped(repo_path: &Path) -> Self {
        Self::with_status("stopped", repo_path)
    }

    fn with_status(status: &str, repo_path: &Path) -> Self {
        Self {
            status: status.to_string(),
            repo_path: repo_path.display().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl EngineEvent for WatchStatusEvent {
    fn event_type() -> &'static str {
        "watch_status"
    }
}

// ============================================================================
// Tests
// ============================================================================
