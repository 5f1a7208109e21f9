//! Update command

use anyhow::{Context, Result};
use camino::Utf8Path;
use hackdeps_core::{CancellationToken, DependencySet, Fetcher, RuntimeConfig};
use hackdeps_update::{UpdateOutcome, Updater};

use crate::cli::{UpdateArgs, UpdateCommands};
use crate::output;

pub async fn run(
    args: UpdateArgs,
    config: &Utf8Path,
    runtime: &RuntimeConfig,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut set = DependencySet::load(config)
        .with_context(|| format!("Failed to load dependencies from {}", config))?;
    let updater = Updater::new(Fetcher::new(runtime)?, runtime);

    match args.command {
        None => update(&updater, &mut set, cancel).await?,
        Some(UpdateCommands::SyncChecksums) => sync_checksums(&updater, &mut set, cancel).await?,
    }

    set.save()
        .with_context(|| format!("Failed to write dependencies to {}", set.path))?;
    Ok(())
}

async fn update(
    updater: &Updater,
    set: &mut DependencySet,
    cancel: &CancellationToken,
) -> Result<()> {
    let report = updater.update(&mut set.dependencies, cancel).await?;

    for dependency in &report.dependencies {
        match &dependency.outcome {
            UpdateOutcome::Updated { from, to } => {
                output::success(&format!("{} {} -> {}", dependency.name, from, to))
            }
            UpdateOutcome::UpToDate { version } => {
                output::info(&format!("{} up to date at {}", dependency.name, version))
            }
        }
    }

    Ok(())
}

async fn sync_checksums(
    updater: &Updater,
    set: &mut DependencySet,
    cancel: &CancellationToken,
) -> Result<()> {
    let synced = updater.sync_checksums(&mut set.dependencies, cancel).await?;

    for name in &synced {
        output::success(&format!("{} checksums synced", name));
    }

    Ok(())
}
