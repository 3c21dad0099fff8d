//! rsync invocation
//!
//! Builds the command lines for the two sync modes. Running them and
//! interpreting the exit status is the job of the sync executor.

mod rsync;

pub use rsync::{
    RsyncCommand, COMMON_OPTIONS, INCREMENTAL_OPTIONS, INITIAL_OPTIONS, RSYNC_RSH,
};
