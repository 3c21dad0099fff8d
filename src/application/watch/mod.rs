//! Watch Use Case
//!
//! Continuous mirroring of a local directory to an rsync destination:
//! - File system monitoring (external `fswatch` process)
//! - Batching between the watcher's boundary markers
//! - One initial full sync, then one incremental sync per batch
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main orchestrator
//! - `BatchDispatcher` - Pending batch and the per-boundary dispatch
//! - `SessionEvent` - Events emitted during the session
//!
//! ## Usage
//!
//! ```ignore
//! let config = SessionConfig::new(root, "host:/path");
//! let spawner = SystemSpawner::new();
//! WatchUseCase::new(&config, &spawner).start(|event| { ... })?;
//! ```

mod dispatcher;
mod event;
mod use_case;


pub use dispatcher::{BatchDispatcher, DispatcherState};
pub use event::SessionEvent;
pub use use_case::WatchUseCase;
