//! Shared constants for test infrastructure

use sha2::{Digest, Sha256};

// Platforms
pub const OS_LINUX: &str = "linux";
pub const OS_DARWIN: &str = "darwin";
pub const ARCH_AMD64: &str = "amd64";
pub const ARCH_ARM64: &str = "arm64";

// Artifact content for testing
pub const FAKE_BINARY_CONTENT: &[u8] = b"fake binary content for testing";
pub const OTHER_BINARY_CONTENT: &[u8] = b"another fake binary";

// Versions
pub const VERSION_V1_0_0: &str = "v1.0.0";

// Checksum constants
pub const WRONG_CHECKSUM: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Lowercase hex SHA256 of `content`
pub fn sha256_of(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}
