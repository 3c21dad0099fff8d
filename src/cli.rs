use std::path::PathBuf;

use clap::Parser;

/// Mirror a local directory to an rsync destination, sending only what changed
#[derive(Parser, Debug)]
#[command(name = "fswatch-rsync-send")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Exclusions are read from <LOCAL>/.rsync-exclude, one rsync filter pattern per line."
)]
pub struct Cli {
    /// Local directory to watch and send
    pub local: PathBuf,

    /// rsync destination (host:/path)
    pub remote: String,

    /// Output session events as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Pass --dry-run to rsync
    #[arg(long)]
    pub dry_run: bool,

    /// fswatch executable
    #[arg(long, value_name = "PROGRAM")]
    pub fswatch: Option<PathBuf>,

    /// rsync executable
    #[arg(long, value_name = "PROGRAM")]
    pub rsync: Option<PathBuf>,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
