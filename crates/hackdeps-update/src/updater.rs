//! Version and checksum synchronization against upstream releases
//!
//! This module provides:
//! - `update`: bump every auto-updatable record to its latest release
//! - `sync_checksums`: re-derive checksums for the currently declared versions
//!
//! Each record is processed by its own task on a private copy. Copies
//! replace the caller's records only when every task succeeded.

use hackdeps_core::{
    version, CancellationToken, DependencyRecord, Fetcher, Result, RuntimeConfig, TaskGroup,
};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};

use crate::checksums::{self, ChecksumHarvester};
use crate::releases::ReleaseManager;

/// What `update` did to one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Version bumped and checksums refreshed
    Updated { from: String, to: String },

    /// Latest release is not newer than the declared version
    UpToDate { version: String },
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { from, to } => write!(f, "updated {} -> {}", from, to),
            Self::UpToDate { version } => write!(f, "up to date at {}", version),
        }
    }
}

/// Outcome for one auto-updatable record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdate {
    pub name: String,
    pub outcome: UpdateOutcome,
}

/// Result of a successful `update` run, in document order
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub dependencies: Vec<DependencyUpdate>,
}

impl UpdateReport {
    /// Whether any record changed
    pub fn has_changes(&self) -> bool {
        self.updated().next().is_some()
    }

    /// Records whose version was bumped
    pub fn updated(&self) -> impl Iterator<Item = &DependencyUpdate> {
        self.dependencies
            .iter()
            .filter(|d| matches!(d.outcome, UpdateOutcome::Updated { .. }))
    }
}

/// Keeps declared versions and checksums in line with upstream releases
#[derive(Debug, Clone)]
pub struct Updater {
    releases: ReleaseManager,
    harvester: ChecksumHarvester,
}

impl Updater {
    /// Create an updater querying the API configured in `config`
    pub fn new(fetcher: Fetcher, config: &RuntimeConfig) -> Self {
        Self {
            releases: ReleaseManager::new(fetcher.clone(), config),
            harvester: ChecksumHarvester::new(fetcher),
        }
    }

    /// Bump every auto-updatable record to its latest upstream release
    pub async fn update(
        &self,
        records: &mut [DependencyRecord],
        cancel: &CancellationToken,
    ) -> Result<UpdateReport> {
        let mut group = TaskGroup::with_parent(cancel);

        for (index, record) in auto_updatable(records) {
            let mut record = record.clone();
            let updater = self.clone();
            let token = group.token();

            group.spawn(async move {
                match updater.update_one(&mut record, &token).await {
                    Ok(outcome) => Ok((index, record, outcome)),
                    Err(e) => Err(e.for_dependency(&record.name)),
                }
            });
        }

        info!("Checking {} dependencies for updates", group.len());

        let mut dependencies = Vec::new();
        for (index, record, outcome) in group.join().await? {
            dependencies.push(DependencyUpdate {
                name: record.name.clone(),
                outcome,
            });
            records[index] = record;
        }

        Ok(UpdateReport { dependencies })
    }

    /// Refresh checksums of every auto-updatable record from its current release
    ///
    /// Returns the names of the refreshed records in document order.
    pub async fn sync_checksums(
        &self,
        records: &mut [DependencyRecord],
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let mut group = TaskGroup::with_parent(cancel);

        for (index, record) in auto_updatable(records) {
            let mut record = record.clone();
            let updater = self.clone();
            let token = group.token();

            group.spawn(async move {
                match updater.sync_one(&mut record, &token).await {
                    Ok(()) => Ok((index, record)),
                    Err(e) => Err(e.for_dependency(&record.name)),
                }
            });
        }

        info!("Syncing checksums of {} dependencies", group.len());

        let mut names = Vec::new();
        for (index, record) in group.join().await? {
            names.push(record.name.clone());
            records[index] = record;
        }

        Ok(names)
    }

    async fn update_one(
        &self,
        record: &mut DependencyRecord,
        cancel: &CancellationToken,
    ) -> Result<UpdateOutcome> {
        let Some(auto_update) = record.auto_update.clone() else {
            return Ok(UpdateOutcome::UpToDate {
                version: record.version.clone(),
            });
        };

        let release = self.releases.get_latest(&auto_update.github, cancel).await?;
        let current = version::parse_tolerant(&record.version)?;
        let latest = version::parse_tolerant(&release.tag_name)?;

        if latest.cmp_precedence(&current) != Ordering::Greater {
            info!("{} is up to date at {}", record.name, record.version);
            return Ok(UpdateOutcome::UpToDate {
                version: record.version.clone(),
            });
        }

        let from = std::mem::replace(&mut record.version, version::tag_for(&latest));
        debug!("{}: refreshing checksums for {}", record.name, record.version);

        let table = self
            .harvester
            .harvest(&release, &auto_update.checksums, cancel)
            .await?;
        checksums::apply_checksums(record, &table)?;

        info!("{} updated from {} to {}", record.name, from, record.version);
        Ok(UpdateOutcome::Updated {
            from,
            to: record.version.clone(),
        })
    }

    async fn sync_one(
        &self,
        record: &mut DependencyRecord,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let Some(auto_update) = record.auto_update.clone() else {
            return Ok(());
        };

        let release = self
            .releases
            .get_release(&auto_update.github, &record.version, cancel)
            .await?;
        let table = self
            .harvester
            .harvest(&release, &auto_update.checksums, cancel)
            .await?;
        checksums::apply_checksums(record, &table)?;

        info!("{} checksums synced for {}", record.name, record.version);
        Ok(())
    }
}

fn auto_updatable(
    records: &[DependencyRecord],
) -> impl Iterator<Item = (usize, &DependencyRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.auto_update.is_some())
}
