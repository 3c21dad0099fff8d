//! Common test utilities for CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus shell-script stand-ins for
//!   fswatch and rsync that log their arguments
//! - `TestResult`: Captured output of one binary run

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
