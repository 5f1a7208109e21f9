//! Common test infrastructure for hackdeps-install tests
//!
//! # Modules
//!
//! - `constants`: Platforms, payloads and checksums
//! - `builders`: Fluent builder for DependencyRecord
//! - `mock_server`: Wiremock setup helpers for artifact downloads
//! - `archives`: Gzipped tarball construction

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod archives;
pub mod builders;
pub mod constants;
pub mod mock_server;

pub use archives::*;
pub use builders::*;
pub use constants::*;
pub use mock_server::*;
