//! Batch dispatcher
//!
//! Collects changed paths between boundary markers and runs exactly one
//! rsync pass per non-empty batch.
//!
//! ```text
//! AwaitingFirstSync --initial_sync()--> Watching --(Path)--> Watching
//!                                          |
//!                                          +--(BoundaryMarker)--> incremental sync, batch cleared
//! ```

use tracing::{debug, info};

use super::event::SessionEvent;
use crate::application::sync_executor::{SyncExecutor, SyncReport};
use crate::domain::entities::PendingBatch;
use crate::domain::value_objects::{ChangeToken, SyncMode};
use crate::error::{SendError, SendResult};

/// Where the dispatcher is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// The initial full sync has not completed yet
    AwaitingFirstSync,
    /// Steady state, dispatching one incremental sync per batch
    Watching,
}

/// Control loop state for one session
pub struct BatchDispatcher<'a> {
    executor: &'a SyncExecutor<'a>,
    pending: PendingBatch,
    state: DispatcherState,
    trace: bool,
}

impl<'a> BatchDispatcher<'a> {
    pub fn new(executor: &'a SyncExecutor<'a>) -> Self {
        Self {
            executor,
            pending: PendingBatch::new(),
            state: DispatcherState::AwaitingFirstSync,
            trace: false,
        }
    }

    /// Echo every reported path at info level
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn pending(&self) -> &PendingBatch {
        &self.pending
    }

    /// Run the full sync and start watching
    pub fn initial_sync(&mut self, on_event: &impl Fn(SessionEvent)) -> SendResult<()> {
        on_event(SessionEvent::SyncStarted {
            mode: SyncMode::Initial,
            paths: 0,
        });
        let report = report_failure(self.executor.run_initial(), on_event)?;
        emit_report(&report, on_event);

        self.state = DispatcherState::Watching;
        Ok(())
    }

    /// Consume tokens until the stream ends
    pub fn run<I>(&mut self, tokens: I, on_event: &impl Fn(SessionEvent)) -> SendResult<()>
    where
        I: IntoIterator<Item = SendResult<ChangeToken>>,
    {
        for token in tokens {
            let token = report_failure(token, on_event)?;
            self.handle(token, on_event)?;
        }
        Ok(())
    }

    /// Process one token
    pub fn handle(
        &mut self,
        token: ChangeToken,
        on_event: &impl Fn(SessionEvent),
    ) -> SendResult<()> {
        if self.state != DispatcherState::Watching {
            return Err(SendError::DispatcherNotStarted);
        }

        match token {
            ChangeToken::Path(path) => {
                if self.trace {
                    info!("fswatch: {}", path.display());
                } else {
                    debug!(path = %path.display(), "change");
                }
                let display = path.display().to_string();
                if self.pending.insert(path) {
                    on_event(SessionEvent::FileChanged { path: display });
                }
                Ok(())
            }
            ChangeToken::BoundaryMarker => self.dispatch(on_event),
        }
    }

    /// Sync the pending batch; it is cleared whatever the outcome
    fn dispatch(&mut self, on_event: &impl Fn(SessionEvent)) -> SendResult<()> {
        if self.pending.is_empty() {
            debug!("empty batch, nothing to sync");
            return Ok(());
        }

        on_event(SessionEvent::SyncStarted {
            mode: SyncMode::Incremental,
            paths: self.pending.len(),
        });
        let result = self.executor.run_incremental(&self.pending);
        self.pending.clear();

        let report = report_failure(result, on_event)?;
        for path in &report.dropped {
            on_event(SessionEvent::PathDropped {
                path: path.display().to_string(),
            });
        }
        emit_report(&report, on_event);
        Ok(())
    }
}

fn emit_report(report: &SyncReport, on_event: &impl Fn(SessionEvent)) {
    on_event(SessionEvent::SyncComplete {
        mode: report.mode,
        outcome: report.outcome,
        paths: report.paths,
    });
}

/// Emit an error event before handing the error back
fn report_failure<T>(result: SendResult<T>, on_event: &impl Fn(SessionEvent)) -> SendResult<T> {
    if let Err(e) = &result {
        on_event(SessionEvent::Error {
            message: e.to_string(),
        });
    }
    result
}
