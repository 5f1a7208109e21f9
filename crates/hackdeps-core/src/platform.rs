//! Target platform naming
//!
//! Dependency documents key checksums by Go-style OS and architecture
//! names ("linux"/"darwin", "amd64"/"arm64"), so host detection maps the
//! Rust target names onto those.

use std::fmt;

/// An operating system and CPU architecture pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this binary was compiled for
    pub fn host() -> Self {
        Self::new(host_os(), host_arch())
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// OS name for downloads (e.g., "darwin", "linux")
pub fn host_os() -> &'static str {
    os_download_name(std::env::consts::OS)
}

/// Architecture name for downloads (e.g., "amd64", "arm64")
pub fn host_arch() -> &'static str {
    arch_download_name(std::env::consts::ARCH)
}

fn os_download_name(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn arch_download_name(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64le",
        other => other,
    }
}
