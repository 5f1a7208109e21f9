//! Dependency document loading and persistence

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::template;
use crate::types::DependencyRecord;

/// Default location of the dependency document
pub const DEFAULT_CONFIG_PATH: &str = "hack/dependencies.yml";

/// The declared dependencies together with the file they came from
#[derive(Debug, Clone)]
pub struct DependencySet {
    /// Path the document was loaded from and is saved back to
    pub path: Utf8PathBuf,

    /// Records in document order
    pub dependencies: Vec<DependencyRecord>,
}

impl DependencySet {
    /// Load and validate the document at `path`
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        let dependencies = Self::parse(&content)?;
        debug!("Loaded {} dependencies from {}", dependencies.len(), path);

        Ok(Self {
            path: path.to_owned(),
            dependencies,
        })
    }

    /// Parse and validate document content
    pub fn parse(content: &str) -> Result<Vec<DependencyRecord>> {
        let dependencies: Vec<DependencyRecord> = serde_yaml_ng::from_str(content)?;
        validate(&dependencies)?;
        Ok(dependencies)
    }

    /// Serialize the records in document form
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(&self.dependencies)?)
    }

    /// Replace the document on disk with the current records
    ///
    /// The new content is written to a sibling temporary file first and
    /// renamed over the original, so readers never observe a partial file.
    pub fn save(&self) -> Result<()> {
        let yaml = self.to_yaml()?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(yaml.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        info!("Wrote {} dependencies to {}", self.dependencies.len(), self.path);
        Ok(())
    }

    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&DependencyRecord> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}

fn validate(dependencies: &[DependencyRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for dep in dependencies {
        if dep.name.is_empty() {
            return Err(Error::invalid_config("dependency with empty name"));
        }
        if !seen.insert(dep.name.as_str()) {
            return Err(Error::invalid_config(format!(
                "duplicate dependency name: {}",
                dep.name
            )));
        }
        template::validate(&dep.url_template).map_err(|e| e.for_dependency(&dep.name))?;
        if let Some(subpath) = &dep.tarball_subpath {
            template::validate(subpath).map_err(|e| e.for_dependency(&dep.name))?;
        }
    }
    Ok(())
}
