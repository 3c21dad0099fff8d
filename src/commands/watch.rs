use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use fswatch_rsync_send::domain::value_objects::SyncOutcome;
use fswatch_rsync_send::{EnvOverrides, SessionConfig, SessionEvent, SystemSpawner, WatchUseCase};

use crate::cli::Cli;

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let local_root = std::path::absolute(&cli.local)
        .with_context(|| format!("cannot resolve {}", cli.local.display()))?;
    let env = EnvOverrides::from_env()?;

    let mut config = SessionConfig::new(local_root, cli.remote.clone())
        .with_env(env)
        .with_dry_run(cli.dry_run)
        .with_json(cli.json);
    if let Some(program) = &cli.fswatch {
        config = config.with_watcher_program(program.clone());
    }
    if let Some(program) = &cli.rsync {
        config = config.with_rsync_program(program.clone());
    }

    let spawner = SystemSpawner::new();
    let json = config.json;
    WatchUseCase::new(&config, &spawner).start(|event| {
        if json {
            println!("{}", event.to_json());
        } else {
            render_event(&event);
        }
    })?;

    Ok(())
}

fn render_event(event: &SessionEvent) {
    match event {
        SessionEvent::WatchStarted {
            root,
            remote,
            exclusions,
        } => info!("watching {root} -> {remote} ({exclusions} exclusions)"),
        SessionEvent::FileChanged { path } => debug!("changed: {path}"),
        SessionEvent::PathDropped { path } => debug!("dropped: {path}"),
        SessionEvent::SyncStarted { mode, paths } => match paths {
            0 => info!("{mode} sync started"),
            n => info!("{mode} sync started ({n} paths)"),
        },
        SessionEvent::SyncComplete { mode, outcome, .. } => match outcome {
            SyncOutcome::Skipped => debug!("{mode} sync skipped, nothing below the root"),
            SyncOutcome::Tolerated => warn!("{mode} sync complete, some files vanished"),
            SyncOutcome::Success => info!("{mode} sync complete"),
        },
        // main prints the error chain
        SessionEvent::Error { .. } => {}
        SessionEvent::Shutdown => info!("watcher exited, stopping"),
    }
}
