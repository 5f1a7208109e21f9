//! Common test infrastructure for hackdeps-update tests
//!
//! # Modules
//!
//! - `constants`: Projects, tags and checksums
//! - `builders`: Fluent builders for Release and DependencyRecord
//! - `mock_server`: Wiremock setup helpers for the releases API and assets

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod mock_server;

pub use builders::*;
pub use constants::*;
pub use mock_server::*;
