//! Domain Layer
//!
//! Pure logic of a watch session: value types, the pending batch, the
//! filter pattern translator and the process port.
//!
//! ## Structure
//!
//! - `entities/` - Mutable session state (PendingBatch)
//! - `value_objects/` - Immutable value types (FilterPattern, ChangeToken, SyncMode)
//! - `services/` - Stateless domain services (pattern translation)
//! - `ports/` - Interface definitions for infrastructure
//!
//! This layer never spawns processes or touches the file system directly;
//! everything external goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
