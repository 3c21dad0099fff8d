//! Domain Entities
//!
//! - `PendingBatch` - changed paths accumulated between two boundary markers

mod pending_batch;

pub use pending_batch::PendingBatch;
