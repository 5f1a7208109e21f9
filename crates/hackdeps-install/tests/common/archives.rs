//! Gzipped tarball construction for extraction tests

use flate2::write::GzEncoder;
use flate2::Compression;

/// Build a gzipped tarball containing `entries` in order
pub fn tarball(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, path, *content)
            .expect("append tar entry");
    }
    builder
        .into_inner()
        .expect("finish tar stream")
        .finish()
        .expect("finish gzip stream")
}
