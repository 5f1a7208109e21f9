//! Concurrent install pipeline
//!
//! Every selected dependency is handled by its own task:
//! 1. Look up the checksum for the target platform
//! 2. Render the download URL
//! 3. Fetch the artifact
//! 4. Verify its SHA256
//! 5. Optionally extract one member from the tarball
//! 6. Write `dest_dir/<name>` as an executable
//!
//! The first failing dependency cancels the others.

use hackdeps_core::{
    template, verify, CancellationToken, DependencyRecord, Error, Fetcher, Platform, Result,
    SelectionMode, TaskGroup,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::archive;

/// What to install and where
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Which flagged records take part
    pub mode: SelectionMode,

    /// Platform whose checksums and artifacts are used
    pub platform: Platform,

    /// Directory receiving one executable per dependency
    pub dest_dir: PathBuf,
}

impl InstallOptions {
    /// Install prod dependencies for the host platform
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode: SelectionMode::Prod,
            platform: Platform::host(),
            dest_dir: dest_dir.into(),
        }
    }

    /// Set the selection mode
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

/// An installed executable
#[derive(Debug, Clone)]
pub struct InstalledArtifact {
    /// Dependency name
    pub name: String,

    /// Path of the written file
    pub path: PathBuf,

    /// Verified SHA256 of the downloaded artifact
    pub checksum: String,

    /// Size of the written file in bytes
    pub size: u64,
}

/// Result of a successful install run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Installed artifacts in document order
    pub installed: Vec<InstalledArtifact>,
}

/// Installs declared dependencies into a directory
pub struct Installer {
    fetcher: Fetcher,
}

impl Installer {
    /// Create an installer using the given fetcher
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Install every record selected by `options.mode`
    pub async fn install(
        &self,
        records: &[DependencyRecord],
        options: &InstallOptions,
    ) -> Result<InstallReport> {
        self.install_with_cancel(records, options, &CancellationToken::new())
            .await
    }

    /// Install, aborting when `cancel` fires
    pub async fn install_with_cancel(
        &self,
        records: &[DependencyRecord],
        options: &InstallOptions,
        cancel: &CancellationToken,
    ) -> Result<InstallReport> {
        fs::create_dir_all(&options.dest_dir)?;

        let mut group = TaskGroup::with_parent(cancel);
        for record in records.iter().filter(|r| r.is_selected(options.mode)) {
            let record = record.clone();
            let fetcher = self.fetcher.clone();
            let platform = options.platform.clone();
            let dest_dir = options.dest_dir.clone();
            let token = group.token();

            group.spawn(async move {
                install_one(&fetcher, &record, &platform, &dest_dir, &token)
                    .await
                    .map_err(|e| e.for_dependency(&record.name))
            });
        }

        info!(
            "Installing {} {} dependencies for {}",
            group.len(),
            options.mode,
            options.platform
        );

        let installed = group.join().await?;
        Ok(InstallReport { installed })
    }
}

async fn install_one(
    fetcher: &Fetcher,
    record: &DependencyRecord,
    platform: &Platform,
    dest_dir: &Path,
    cancel: &CancellationToken,
) -> Result<InstalledArtifact> {
    let expected = record
        .checksum_for(platform)
        .ok_or_else(|| Error::unsupported_platform(&platform.os, &platform.arch))?;

    let fields = record.fields(platform);
    let url = template::render(&record.url_template, &fields)?;

    let content = fetcher.fetch(&url, cancel).await?;
    info!("{} downloaded", record.name);

    let checksum = verify::verify_checksum(&content, expected)?;
    info!("{} validated", record.name);

    let executable = match &record.tarball_subpath {
        Some(subpath) => {
            let member = template::render(subpath, &fields)?;
            let extracted = archive::extract_member(&content, &member)?;
            info!("{} extracted", record.name);
            extracted
        }
        None => content.to_vec(),
    };

    let path = dest_dir.join(&record.name);
    write_executable(&path, &executable)?;
    info!("{} installed to {}", record.name, path.display());

    Ok(InstalledArtifact {
        name: record.name.clone(),
        path,
        checksum,
        size: executable.len() as u64,
    })
}

/// Write `content` to `path` and make it executable
fn write_executable(path: &Path, content: &[u8]) -> Result<()> {
    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}
