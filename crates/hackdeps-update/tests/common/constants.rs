//! Test constants

/// Upstream project of the default test dependency
pub const PROJECT: &str = "carvel-dev/kapp";

/// Upstream project of a second dependency
pub const OTHER_PROJECT: &str = "carvel-dev/kbld";

pub const TAG_V1_0_0: &str = "v1.0.0";
pub const TAG_V1_1_0: &str = "v1.1.0";
pub const TAG_V0_9_0: &str = "v0.9.0";

/// Name of the checksums manifest asset
pub const CHECKSUMS_FILE: &str = "checksums.txt";

pub const OS_LINUX: &str = "linux";
pub const OS_DARWIN: &str = "darwin";
pub const ARCH_AMD64: &str = "amd64";
pub const ARCH_ARM64: &str = "arm64";

/// Checksum declared before any update
pub const OLD_CHECKSUM: &str = "cba06b5736faf67e54b07b561eae94395e774c517a7d910a54369e1263ccfbd4";

pub const LINUX_AMD64_CHECKSUM: &str =
    "abb35c616421af72198ad7c2aeeef38516f08f6a7afb2a728cf0068a8a712ddc";

pub const DARWIN_ARM64_CHECKSUM: &str =
    "1a349b12b50ad5b43740e0952adc33c7805ce06f091074be977624d09ed9d432";

/// Checksum published in release notes only
pub const NOTES_CHECKSUM: &str = "ab5aa97074c454a0632057e704220d9a6678fbf773a0a5806fc09b8173b07309";

/// Artifact file name rendered by `DependencyBuilder` templates
pub fn artifact_name(name: &str, os: &str, arch: &str) -> String {
    format!("{}-{}-{}", name, os, arch)
}

/// Manifest content listing the default checksums for `name`
pub fn standard_manifest(name: &str) -> String {
    format!(
        "{}  ./{}\n{}  ./{}\n",
        LINUX_AMD64_CHECKSUM,
        artifact_name(name, OS_LINUX, ARCH_AMD64),
        DARWIN_ARM64_CHECKSUM,
        artifact_name(name, OS_DARWIN, ARCH_ARM64)
    )
}
