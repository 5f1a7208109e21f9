//! SHA256 content verification

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Lowercase hex SHA256 digest of `content`
pub fn sha256_hex(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Check that `content` hashes to exactly `expected`
///
/// `expected` is compared byte-for-byte with the lowercase digest.
pub fn verify_checksum(content: &[u8], expected: &str) -> Result<String> {
    let actual = sha256_hex(content);
    if actual != expected {
        return Err(Error::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(actual)
}
