//! Binary dependency installation
//!
//! Provides:
//! - Concurrent download of every selected dependency
//! - SHA256 verification against the declared per-platform checksum
//! - Extraction of a single executable from gzipped tarballs
//! - First-failure cancellation of in-flight downloads

pub mod archive;
pub mod installer;

pub use archive::extract_member;
pub use installer::{InstallOptions, InstallReport, InstalledArtifact, Installer};
