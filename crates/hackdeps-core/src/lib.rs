//! # hackdeps-core
//!
//! Core library for hackdeps providing:
//! - The dependency document model and its YAML loader
//! - URL and tarball subpath templating
//! - An authenticated-optional, cancellable HTTP fetcher
//! - SHA256 verification and tolerant semantic version parsing
//! - A task group with first-error cancellation shared by both pipelines

pub mod config;
pub mod error;
pub mod http;
pub mod platform;
pub mod runtime;
pub mod tasks;
pub mod template;
pub mod types;
pub mod verify;
pub mod version;

pub use config::DependencySet;
pub use error::{Error, Result};
pub use http::Fetcher;
pub use platform::Platform;
pub use runtime::RuntimeConfig;
pub use tasks::TaskGroup;
pub use types::{
    AutoUpdate, ChecksumMatrix, ChecksumSources, DependencyRecord, ResolvedFields, SelectionMode,
};

pub use tokio_util::sync::CancellationToken;
