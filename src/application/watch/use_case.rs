//! Watch Use Case implementation

use super::dispatcher::BatchDispatcher;
use super::event::SessionEvent;
use crate::application::exclusions::load_exclusions;
use crate::application::sync_executor::SyncExecutor;
use crate::config::SessionConfig;
use crate::domain::ports::ProcessSpawner;
use crate::error::SendResult;
use crate::infrastructure::watcher::FswatchWatcher;

/// Watch Use Case
///
/// Orchestrates one session: load exclusions, start the watcher, run the
/// initial sync, then dispatch batches until the watcher's output ends.
/// This is the main entry point for the binary.
pub struct WatchUseCase<'a> {
    config: &'a SessionConfig,
    spawner: &'a dyn ProcessSpawner,
}

impl<'a> WatchUseCase<'a> {
    /// Create a new WatchUseCase
    pub fn new(config: &'a SessionConfig, spawner: &'a dyn ProcessSpawner) -> Self {
        Self { config, spawner }
    }

    /// Start watching (blocking)
    ///
    /// Returns when the watcher exits cleanly, or with the first fatal
    /// error. The watcher is started before the initial sync so that
    /// changes made while the initial sync runs are queued, not lost.
    pub fn start<F>(&self, on_event: F) -> SendResult<()>
    where
        F: Fn(SessionEvent),
    {
        let exclusions = load_exclusions(&self.config.local_root)?;
        let watcher = FswatchWatcher::new(self.config, self.spawner).start(&exclusions)?;

        on_event(SessionEvent::WatchStarted {
            root: self.config.local_root.display().to_string(),
            remote: self.config.remote.clone(),
            exclusions: exclusions.len(),
        });

        let executor = SyncExecutor::new(self.config, self.spawner);
        let mut dispatcher = BatchDispatcher::new(&executor).with_trace(self.config.trace);

        dispatcher.initial_sync(&on_event)?;
        dispatcher.run(watcher, &on_event)?;

        on_event(SessionEvent::Shutdown);
        Ok(())
    }
}
