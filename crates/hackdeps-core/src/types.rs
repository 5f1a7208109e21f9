//! Dependency document types
//!
//! Field names follow the on-disk document so existing files load and
//! round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::platform::Platform;

/// Checksums keyed by OS, then by architecture
pub type ChecksumMatrix = BTreeMap<String, BTreeMap<String, String>>;

/// One installable artifact family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Unique name, also the installed file name
    pub name: String,

    /// Semantic version, usually with a "v" prefix
    pub version: String,

    /// Download URL template
    #[serde(rename = "urlTemplate")]
    pub url_template: String,

    /// Installed in dev mode
    #[serde(default)]
    pub dev: bool,

    /// Installed in prod mode
    #[serde(default)]
    pub prod: bool,

    /// How to look for new upstream releases
    #[serde(
        rename = "autoupdate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_update: Option<AutoUpdate>,

    /// Expected sha256 per supported platform
    #[serde(default)]
    pub checksums: ChecksumMatrix,

    /// Template for the member to extract when the artifact is a gzipped tarball
    #[serde(
        rename = "tarballSubpath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tarball_subpath: Option<String>,
}

impl DependencyRecord {
    /// Expected checksum for a platform, `None` if the platform is unsupported
    pub fn checksum_for(&self, platform: &Platform) -> Option<&str> {
        self.checksums
            .get(&platform.os)
            .and_then(|arches| arches.get(&platform.arch))
            .map(String::as_str)
    }

    /// All platforms this record declares support for
    pub fn platforms(&self) -> Vec<Platform> {
        self.checksums
            .iter()
            .flat_map(|(os, arches)| arches.keys().map(move |arch| Platform::new(os, arch)))
            .collect()
    }

    /// Template fields for this record on a platform
    pub fn fields(&self, platform: &Platform) -> ResolvedFields {
        ResolvedFields {
            name: self.name.clone(),
            version: self.version.clone(),
            os: platform.os.clone(),
            arch: platform.arch.clone(),
        }
    }

    /// Whether this record takes part in an install with the given mode
    pub fn is_selected(&self, mode: SelectionMode) -> bool {
        match mode {
            SelectionMode::Dev => self.dev,
            SelectionMode::Prod => self.prod,
        }
    }
}

/// Upstream project and checksum sources used by `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoUpdate {
    /// GitHub project as `owner/repository`
    pub github: String,

    /// Where release checksums are published
    #[serde(default, skip_serializing_if = "ChecksumSources::is_empty")]
    pub checksums: ChecksumSources,
}

/// Checksum harvesting strategies, both may be enabled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumSources {
    /// Name of a release asset listing `checksum filename` pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Scrape checksums from the release notes
    #[serde(
        rename = "releaseNotes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub release_notes: Option<bool>,
}

impl ChecksumSources {
    /// Whether the release notes should be scanned
    pub fn scan_release_notes(&self) -> bool {
        self.release_notes.unwrap_or(false)
    }

    fn is_empty(&self) -> bool {
        self.file.is_none() && self.release_notes.is_none()
    }
}

/// Values substituted into URL and tarball subpath templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub name: String,
    pub version: String,
    pub os: String,
    pub arch: String,
}

impl ResolvedFields {
    /// Look up a field by its template name
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "Name" => Some(&self.name),
            "Version" => Some(&self.version),
            "OS" => Some(&self.os),
            "Arch" => Some(&self.arch),
            _ => None,
        }
    }
}

/// Which flagged records an install selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Dev,
    Prod,
}

impl SelectionMode {
    /// Mode selected by the `--dev` switch
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            Self::Dev
        } else {
            Self::Prod
        }
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Prod => write!(f, "prod"),
        }
    }
}
