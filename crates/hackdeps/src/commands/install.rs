//! Install command

use anyhow::{Context, Result};
use camino::Utf8Path;
use hackdeps_core::{
    CancellationToken, DependencySet, Fetcher, Platform, RuntimeConfig, SelectionMode,
};
use hackdeps_install::{InstallOptions, Installer};

use crate::cli::InstallArgs;
use crate::output;

pub async fn run(
    args: InstallArgs,
    config: &Utf8Path,
    runtime: &RuntimeConfig,
    cancel: &CancellationToken,
) -> Result<()> {
    let set = DependencySet::load(config)
        .with_context(|| format!("Failed to load dependencies from {}", config))?;

    let options = InstallOptions::new(args.destination.as_std_path())
        .with_mode(SelectionMode::from_dev_flag(args.dev))
        .with_platform(target_platform(args.os, args.arch));

    let installer = Installer::new(Fetcher::new(runtime)?);
    let report = installer
        .install_with_cancel(&set.dependencies, &options, cancel)
        .await?;

    for artifact in &report.installed {
        output::success(&format!("{} installed", artifact.name));
        output::kv("path", &artifact.path.display().to_string());
        output::kv("sha256", &artifact.checksum);
    }
    output::info(&format!(
        "{} {} dependencies installed for {}",
        report.installed.len(),
        options.mode,
        options.platform
    ));

    Ok(())
}

/// Target platform, each part defaulting to the host's
fn target_platform(os: Option<String>, arch: Option<String>) -> Platform {
    let host = Platform::host();
    Platform::new(os.unwrap_or(host.os), arch.unwrap_or(host.arch))
}
