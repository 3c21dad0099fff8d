//! Test environment builder for isolated CLI testing.
//!
//! The fake watcher prints a canned NUL-separated record stream and exits.
//! The fake rsync appends its arguments as one line to `rsync.log` and exits
//! with the next code of `FAKE_RSYNC_CODES` (space separated, 0 once the
//! list is exhausted).

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated test environment
pub struct TestEnv {
    /// Directory being synchronized
    pub project: TempDir,
    /// Fake programs and their logs
    pub tools: TempDir,
}

impl TestEnv {
    /// Create an environment whose fake watcher prints `records`
    ///
    /// `records` is a printf format string, e.g. `a\000NoOp\000`.
    pub fn new(records: &str) -> Self {
        let env = Self {
            project: tempfile::tempdir().unwrap(),
            tools: tempfile::tempdir().unwrap(),
        };
        env.write_tool(
            "fswatch",
            &format!(
                "#!/bin/sh\necho \"$*\" >> \"{log}\"\nprintf '{records}'\nexit \"${{FAKE_FSWATCH_STATUS:-0}}\"\n",
                log = env.fswatch_log().display(),
            ),
        );
        env.write_tool(
            "rsync",
            &format!(
                "#!/bin/sh\necho \"$*\" >> \"{log}\"\nn=$(wc -l < \"{log}\" | tr -d ' ')\ncode=$(echo \"${{FAKE_RSYNC_CODES:-0}}\" | cut -d' ' -f\"$n\")\nexit \"${{code:-0}}\"\n",
                log = env.rsync_log().display(),
            ),
        );
        env
    }

    /// Create an environment with an exclusion file already in place
    pub fn with_excludes(records: &str, excludes: &str) -> Self {
        let env = Self::new(records);
        env.write_project_file(".rsync-exclude", excludes);
        env
    }

    fn write_tool(&self, name: &str, script: &str) {
        let path = self.tools.path().join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Absolute project root as the binary will see it
    pub fn root(&self) -> PathBuf {
        self.project.path().to_path_buf()
    }

    pub fn fswatch_log(&self) -> PathBuf {
        self.tools.path().join("fswatch.log")
    }

    pub fn rsync_log(&self) -> PathBuf {
        self.tools.path().join("rsync.log")
    }

    /// Lines logged by the fake watcher (one per invocation)
    pub fn fswatch_calls(&self) -> Vec<String> {
        read_lines(&self.fswatch_log())
    }

    /// Lines logged by the fake rsync (one per invocation)
    pub fn rsync_calls(&self) -> Vec<String> {
        read_lines(&self.rsync_log())
    }

    /// Write a file below the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Run the binary against this environment with extra flags and env vars
    pub fn run(&self, flags: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with_root(self.project.path(), flags, env_vars)
    }

    /// Like [`TestEnv::run`], but with `root` as the local directory argument
    pub fn run_with_root(
        &self,
        root: impl AsRef<std::ffi::OsStr>,
        flags: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fswatch-rsync-send"));
        cmd.arg("--fswatch")
            .arg(self.tools.path().join("fswatch"))
            .arg("--rsync")
            .arg(self.tools.path().join("rsync"))
            .args(flags)
            .arg(root)
            .arg("box:/srv/proj")
            .env_remove("RUST_LOG")
            .env_remove("FSWATCH_RSYNC_SEND_TRACE")
            .env_remove("FSWATCH_RSYNC_SEND_EXTRA_FSWATCH_ARGS")
            .env_remove("FSWATCH_RSYNC_SEND_EXTRA_RSYNC_ARGS")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        TestResult::from_output(cmd.output().expect("Failed to execute fswatch-rsync-send"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
