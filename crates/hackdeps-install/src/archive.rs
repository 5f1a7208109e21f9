//! Single-member extraction from gzipped tarballs

use flate2::read::MultiGzDecoder;
use hackdeps_core::{Error, Result};
use std::io::Read;
use tar::Archive;
use tracing::debug;

/// Extract the entry named exactly `member` from a gzipped tarball
///
/// Entries are scanned in stream order and scanning stops at the first
/// match. Concatenated gzip members are read as one stream. No path
/// normalization is applied to either side.
pub fn extract_member(tarball: &[u8], member: &str) -> Result<Vec<u8>> {
    let mut archive = Archive::new(MultiGzDecoder::new(tarball));
    let entries = archive.entries().map_err(format_error)?;

    for entry in entries {
        let mut entry = entry.map_err(format_error)?;
        if entry.path_bytes().as_ref() != member.as_bytes() {
            continue;
        }

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content).map_err(format_error)?;
        debug!("Extracted {} ({} bytes)", member, content.len());
        return Ok(content);
    }

    Err(Error::MemberNotFound {
        member: member.to_string(),
    })
}

fn format_error(e: std::io::Error) -> Error {
    Error::ArchiveFormat(e.to_string())
}
