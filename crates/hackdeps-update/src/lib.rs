//! Release-driven dependency updates
//!
//! Provides:
//! - GitHub release lookup (latest and by tag)
//! - Checksum harvesting from manifest assets and release notes
//! - Concurrent version bumps and checksum synchronization

pub mod checksums;
pub mod releases;
pub mod updater;

pub use checksums::{ChecksumHarvester, ChecksumTable};
pub use releases::{Release, ReleaseAsset, ReleaseManager};
pub use updater::{DependencyUpdate, UpdateOutcome, UpdateReport, Updater};
