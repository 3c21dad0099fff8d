//! Test fixtures - reusable content constants for tests.

/// Exclusion file with one pattern of each supported shape
pub const EXCLUDES: &str = "/.git/***\n*.swp\n**/target\n";

/// Two batches: `a`, `b`, then `a` again
pub const TWO_BATCHES: &str = r"a\000b\000NoOp\000a\000NoOp\000";
