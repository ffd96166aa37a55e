//! Live repository watch service
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   SessionController                      │
//! │   set_repo_path: cancel previous session, spawn next     │
//! │                                                          │
//! │  ┌──────────────┐      ┌──────────────────────────────┐  │
//! │  │ WatchSession │─────>│ event-loop thread            │  │
//! │  │ (cancel flag)│      │ notify watcher + classifier  │  │
//! │  └──────────────┘      └──────────────┬───────────────┘  │
//! │                                       │                  │
//! │                              ┌────────▼────────┐         │
//! │                              │  EventEmitter   │         │
//! │                              │ stdout + subs   │         │
//! │                              └─────────────────┘         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller owns the single active session and the shared emitter;
//! each session's watcher resource lives on its own thread.
//!
//! # Modules
//!
//! - `events` - Event types and the UI notification bridge
//! - `watcher` - Filesystem watching and event classification
//! - `session` - Session switching and cancellation

pub mod events;
pub mod session;
pub mod watcher;

pub use events::{BroadcastEvent, EngineEvent, EventEmitter, FileChangedEvent, WatchStatusEvent};
pub use session::SessionController;
pub use watcher::{RepoWatcher, WatchSession, WatcherConfig};
