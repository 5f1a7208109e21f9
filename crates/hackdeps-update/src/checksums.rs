//! Checksum harvesting from upstream releases
//!
//! Two sources are supported and may be combined:
//! - a manifest asset listing `checksum filename` pairs, one per line
//! - checksum/filename pairs embedded in the release notes
//!
//! The manifest is read first, so notes entries win on collision.

use hackdeps_core::{
    template, CancellationToken, ChecksumSources, DependencyRecord, Error, Fetcher, Result,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::releases::Release;

/// A SHA256 digest followed by a file name, separated by blanks, dots or slashes
static CHECKSUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)([a-f0-9]{64})[\s./]+([a-zA-Z0-9_.-]+)").expect("checksum regex is valid")
});

/// Artifact file name to SHA256 checksum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumTable(BTreeMap<String, String>);

impl ChecksumTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checksum recorded for `filename`
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.0.get(filename).map(String::as_str)
    }

    pub fn insert(&mut self, filename: impl Into<String>, checksum: impl Into<String>) {
        self.0.insert(filename.into(), checksum.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add every entry of `other`, replacing existing ones
    pub fn merge(&mut self, other: ChecksumTable) {
        self.0.extend(other.0);
    }
}

/// Parse a checksums manifest
///
/// Every non-blank line must hold exactly two whitespace-separated fields.
/// Leading `./` is stripped from file names.
pub fn parse_manifest(content: &str) -> Result<ChecksumTable> {
    let mut table = ChecksumTable::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [checksum, filename] = fields.as_slice() else {
            return Err(Error::ManifestFormat {
                line: index + 1,
                content: line.to_string(),
            });
        };

        table.insert(filename.trim_start_matches("./"), *checksum);
    }

    Ok(table)
}

/// Collect every checksum/filename pair found in release notes
pub fn scan_release_notes(notes: &str) -> Result<ChecksumTable> {
    let mut table = ChecksumTable::new();

    for caps in CHECKSUM_RE.captures_iter(notes) {
        match (caps.len(), caps.get(1), caps.get(2)) {
            (3, Some(checksum), Some(filename)) => {
                table.insert(filename.as_str(), checksum.as_str());
            }
            _ => {
                return Err(Error::ReleaseNotesFormat {
                    matched: caps[0].to_string(),
                });
            }
        }
    }

    Ok(table)
}

/// File name an artifact URL downloads to
pub fn artifact_filename(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Overwrite every declared platform checksum of `record` from `table`
///
/// URLs are rendered with the record's current version. Nothing is changed
/// when any platform has no entry in the table.
pub fn apply_checksums(record: &mut DependencyRecord, table: &ChecksumTable) -> Result<()> {
    let mut resolved = Vec::new();

    for platform in record.platforms() {
        let url = template::render(&record.url_template, &record.fields(&platform))?;
        let filename = artifact_filename(&url);
        let checksum = table
            .get(filename)
            .ok_or_else(|| Error::ChecksumNotFound {
                filename: filename.to_string(),
            })?;
        resolved.push((platform, checksum.to_string()));
    }

    for (platform, checksum) in resolved {
        record
            .checksums
            .entry(platform.os)
            .or_default()
            .insert(platform.arch, checksum);
    }

    Ok(())
}

/// Gathers checksums for a release from its configured sources
#[derive(Debug, Clone)]
pub struct ChecksumHarvester {
    fetcher: Fetcher,
}

impl ChecksumHarvester {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Build the checksum table for `release`
    pub async fn harvest(
        &self,
        release: &Release,
        sources: &ChecksumSources,
        cancel: &CancellationToken,
    ) -> Result<ChecksumTable> {
        let mut table = ChecksumTable::new();

        if let Some(file) = &sources.file {
            let asset = release
                .find_asset(file)
                .ok_or_else(|| Error::ManifestNotFound { file: file.clone() })?;

            let content = self.fetcher.fetch(&asset.browser_download_url, cancel).await?;
            let manifest = parse_manifest(&String::from_utf8_lossy(&content))?;
            debug!(
                "Read {} checksums from {} of {}",
                manifest.len(),
                file,
                release.tag_name
            );
            table.merge(manifest);
        }

        if sources.scan_release_notes() {
            let notes = scan_release_notes(release.notes())?;
            debug!(
                "Read {} checksums from release notes of {}",
                notes.len(),
                release.tag_name
            );
            table.merge(notes);
        }

        Ok(table)
    }
}
