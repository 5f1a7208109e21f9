//! Builder for DependencyRecord test data

use hackdeps_core::DependencyRecord;
use std::collections::BTreeMap;

use super::constants::*;

/// Builder for constructing DependencyRecord objects with sensible test defaults
#[derive(Debug, Clone)]
pub struct DependencyBuilder {
    record: DependencyRecord,
}

impl DependencyBuilder {
    /// Create a prod dependency named `name` with no supported platforms
    pub fn new(name: &str) -> Self {
        Self {
            record: DependencyRecord {
                name: name.to_string(),
                version: VERSION_V1_0_0.to_string(),
                url_template: String::new(),
                dev: false,
                prod: true,
                auto_update: None,
                checksums: BTreeMap::new(),
                tarball_subpath: None,
            },
        }
    }

    /// Set the version
    pub fn version(mut self, version: &str) -> Self {
        self.record.version = version.to_string();
        self
    }

    /// Set the URL template
    pub fn url_template(mut self, template: &str) -> Self {
        self.record.url_template = template.to_string();
        self
    }

    /// Download from `{server}/{{.Name}}/{{.Version}}/{{.Name}}-{{.OS}}-{{.Arch}}`
    pub fn served_by(self, server_uri: &str) -> Self {
        let template = format!(
            "{}/{{{{.Name}}}}/{{{{.Version}}}}/{{{{.Name}}}}-{{{{.OS}}}}-{{{{.Arch}}}}",
            server_uri
        );
        self.url_template(&template)
    }

    /// Set the dev and prod flags
    pub fn flags(mut self, dev: bool, prod: bool) -> Self {
        self.record.dev = dev;
        self.record.prod = prod;
        self
    }

    /// Declare a checksum for a platform
    pub fn checksum(mut self, os: &str, arch: &str, checksum: &str) -> Self {
        self.record
            .checksums
            .entry(os.to_string())
            .or_default()
            .insert(arch.to_string(), checksum.to_string());
        self
    }

    /// Set the tarball subpath template
    pub fn tarball_subpath(mut self, subpath: &str) -> Self {
        self.record.tarball_subpath = Some(subpath.to_string());
        self
    }

    pub fn build(self) -> DependencyRecord {
        self.record
    }
}
