//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod process;

pub use process::{OutputMode, ProcessSpawner, SpawnedProcess};
