//! Builder patterns for test data construction

use hackdeps_core::{AutoUpdate, ChecksumSources, DependencyRecord};
use hackdeps_update::{Release, ReleaseAsset};
use std::collections::BTreeMap;

use super::constants::*;

/// Builder for constructing Release objects with sensible test defaults
#[derive(Debug, Clone)]
pub struct ReleaseBuilder {
    release: Release,
}

impl ReleaseBuilder {
    /// Create a release tagged `tag` without notes or assets
    pub fn new(tag: &str) -> Self {
        Self {
            release: Release {
                tag_name: tag.to_string(),
                body: None,
                assets: Vec::new(),
            },
        }
    }

    /// Set the release notes
    pub fn body(mut self, body: &str) -> Self {
        self.release.body = Some(body.to_string());
        self
    }

    /// Attach an asset downloadable from `url`
    pub fn asset(mut self, name: &str, url: &str) -> Self {
        self.release.assets.push(ReleaseAsset {
            name: name.to_string(),
            browser_download_url: url.to_string(),
        });
        self
    }

    pub fn build(self) -> Release {
        self.release
    }
}

/// Builder for auto-updatable DependencyRecord objects
#[derive(Debug, Clone)]
pub struct DependencyBuilder {
    record: DependencyRecord,
}

impl DependencyBuilder {
    /// Create `name` at v1.0.0 tracking `project`, with a linux/amd64 and a
    /// darwin/arm64 artifact and no checksum sources
    pub fn new(name: &str, project: &str) -> Self {
        let mut checksums = BTreeMap::new();
        checksums.insert(
            OS_LINUX.to_string(),
            BTreeMap::from([(ARCH_AMD64.to_string(), OLD_CHECKSUM.to_string())]),
        );
        checksums.insert(
            OS_DARWIN.to_string(),
            BTreeMap::from([(ARCH_ARM64.to_string(), OLD_CHECKSUM.to_string())]),
        );

        Self {
            record: DependencyRecord {
                name: name.to_string(),
                version: TAG_V1_0_0.to_string(),
                url_template: format!(
                    "https://github.com/{}/releases/download/{{{{.Version}}}}/{{{{.Name}}}}-{{{{.OS}}}}-{{{{.Arch}}}}",
                    project
                ),
                dev: false,
                prod: true,
                auto_update: Some(AutoUpdate {
                    github: project.to_string(),
                    checksums: ChecksumSources::default(),
                }),
                checksums,
                tarball_subpath: None,
            },
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.record.version = version.to_string();
        self
    }

    /// Read checksums from the named manifest asset
    pub fn checksums_file(mut self, file: &str) -> Self {
        if let Some(auto_update) = self.record.auto_update.as_mut() {
            auto_update.checksums.file = Some(file.to_string());
        }
        self
    }

    /// Scan release notes for checksums
    pub fn release_notes(mut self) -> Self {
        if let Some(auto_update) = self.record.auto_update.as_mut() {
            auto_update.checksums.release_notes = Some(true);
        }
        self
    }

    /// Declare an additional platform
    pub fn platform(mut self, os: &str, arch: &str) -> Self {
        self.record
            .checksums
            .entry(os.to_string())
            .or_default()
            .insert(arch.to_string(), OLD_CHECKSUM.to_string());
        self
    }

    /// Drop the auto-update descriptor
    pub fn pinned(mut self) -> Self {
        self.record.auto_update = None;
        self
    }

    pub fn build(self) -> DependencyRecord {
        self.record
    }
}
