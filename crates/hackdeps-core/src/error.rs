//! Error types for hackdeps-core

use thiserror::Error;

/// Result type alias using hackdeps-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds shared by the install and update pipelines
#[derive(Error, Debug)]
pub enum Error {
    /// Template could not be parsed or references an unknown field
    #[error("Template error in {template:?}: {message}")]
    Template { template: String, message: String },

    /// Network failure while talking to a server
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Bad status code retrieving {url}: {status}")]
    HttpStatus { url: String, status: u16 },

    /// No checksum is declared for the requested platform
    #[error("Not supported on platform {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// Downloaded payload does not hash to the declared checksum
    #[error("Wrong checksum, expected: {expected}, got: {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Malformed gzip or tar framing
    #[error("Malformed archive: {0}")]
    ArchiveFormat(String),

    /// Archive was exhausted without finding the requested member
    #[error("Tarball subpath not found: {member}")]
    MemberNotFound { member: String },

    /// Release has no asset with the configured checksums file name
    #[error("Did not find checksums file {file} in release assets")]
    ManifestNotFound { file: String },

    /// A checksums file line is not a `checksum filename` pair
    #[error("Checksums file line {line} is not in format 'sha256 filename': {content:?}")]
    ManifestFormat { line: usize, content: String },

    /// A release-notes match did not decompose into checksum and filename
    #[error("Expected checksum and filename in release notes match: {matched:?}")]
    ReleaseNotesFormat { matched: String },

    /// Version string is not a semantic version
    #[error("Invalid version {version:?}: {message}")]
    VersionParse { version: String, message: String },

    /// Harvested checksums have no entry for an artifact file
    #[error("No checksum found for filename {filename}")]
    ChecksumNotFound { filename: String },

    /// Response body could not be decoded
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Work was abandoned because a sibling failed or the run was interrupted
    #[error("Operation cancelled")]
    Cancelled,

    /// Dependency document not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Dependency document is structurally valid YAML but semantically wrong
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker task panicked or was aborted
    #[error("Task failed: {0}")]
    Task(String),

    /// Failure of a single named dependency
    #[error("{name}: {source}")]
    Dependency {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a template error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Create a version parse error
    pub fn version_parse(version: impl Into<String>, message: impl ToString) -> Self {
        Self::VersionParse {
            version: version.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Attach the name of the dependency this error belongs to
    pub fn for_dependency(self, name: impl Into<String>) -> Self {
        Self::Dependency {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The name of the dependency this error was raised for, if any
    pub fn dependency(&self) -> Option<&str> {
        match self {
            Self::Dependency { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The underlying failure with all dependency wrappers removed
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Self::Dependency { source, .. } = current {
            current = source;
        }
        current
    }

    /// Whether the underlying failure is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), Self::Cancelled)
    }
}
