//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Orchestrates one watch session (exclusions, watcher, initial sync, batches)
//!
//! ## Services
//!
//! - `load_exclusions` - Read and translate the exclusion file
//! - `SyncExecutor` - Run one rsync pass and classify its exit status

pub mod exclusions;
pub mod sync_executor;
pub mod watch;

pub use exclusions::{load_exclusions, read_patterns};
pub use sync_executor::{SyncExecutor, SyncReport, SyncRoot};
pub use watch::{BatchDispatcher, DispatcherState, SessionEvent, WatchUseCase};
