//! rsync command construction
//!
//! Sources are always given as `<root>/./<relative>` together with
//! `--relative`, so rsync recreates the path below the root on the remote
//! side instead of flattening it.

use std::ffi::OsString;
use std::path::Path;

use crate::config::SessionConfig;
use crate::domain::value_objects::CommandLine;

/// Remote shell: ssh with connection multiplexing so that every batch
/// reuses one connection
pub const RSYNC_RSH: &str =
    "ssh -o ControlMaster=auto -o 'ControlPath=~/.ssh/control/%C' -o ControlPersist=yes";

/// Options shared by both modes (after `--rsh`)
pub const COMMON_OPTIONS: &[&str] = &[
    "--links",
    "--executability",
    "--times",
    "--relative",
    "--itemize-changes",
    "--debug=FILTER",
];

/// Full recursive pass, deleting extraneous remote entries at the end
pub const INITIAL_OPTIONS: &[&str] = &["--recursive", "--delete-delay", "--info=stats"];

/// Only the named paths; directories are not descended into and missing
/// sources are deleted on the remote side
pub const INCREMENTAL_OPTIONS: &[&str] = &["--dirs", "--delete-missing-args"];

/// Command line builder for one session
pub struct RsyncCommand<'a> {
    config: &'a SessionConfig,
}

impl<'a> RsyncCommand<'a> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Full sync of the whole tree
    pub fn initial(&self) -> CommandLine {
        self.base()
            .args(INITIAL_OPTIONS)
            .arg(self.exclude_from())
            .arg(self.relative_source(Path::new("")))
            .arg(&self.config.remote)
    }

    /// Sync of the given paths, each relative to the root
    pub fn incremental<'p, I>(&self, relative_paths: I) -> CommandLine
    where
        I: IntoIterator<Item = &'p Path>,
    {
        self.base()
            .args(INCREMENTAL_OPTIONS)
            .arg(self.exclude_from())
            .args(relative_paths.into_iter().map(|p| self.relative_source(p)))
            .arg(&self.config.remote)
    }

    fn base(&self) -> CommandLine {
        let mut cmd = CommandLine::new(&self.config.rsync_program)
            .arg("--rsh")
            .arg(RSYNC_RSH)
            .args(COMMON_OPTIONS);
        if self.config.dry_run {
            cmd = cmd.arg("--dry-run");
        }
        cmd.args(&self.config.extra_rsync_args)
    }

    fn exclude_from(&self) -> OsString {
        let mut arg = OsString::from("--exclude-from=");
        arg.push(self.config.exclude_file());
        arg
    }

    /// `<root>/./<relative>`; the `/./` marks where the relative part starts
    fn relative_source(&self, relative: &Path) -> OsString {
        let mut source = self.config.local_root.as_os_str().to_os_string();
        source.push("/./");
        source.push(relative);
        source
    }
}
