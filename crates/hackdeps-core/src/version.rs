//! Tolerant semantic version parsing

use semver::Version;
use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Parse a version, accepting a leading "v" and missing minor/patch parts
///
/// `"v1.2.3"`, `"1.2.3"` and `" 1.2 "` all parse; `"1.2"` is `1.2.0`.
pub fn parse_tolerant(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let normalized = pad_core(bare);
    Version::parse(&normalized).map_err(|e| Error::version_parse(input, e))
}

/// Compare two version strings by semantic version precedence
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(parse_tolerant(a)?.cmp_precedence(&parse_tolerant(b)?))
}

/// Render a version with the "v" prefix used by release tags
pub fn tag_for(version: &Version) -> String {
    format!("v{}", version)
}

fn pad_core(version: &str) -> String {
    let core_end = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(core_end);

    if core.is_empty() {
        return version.to_string();
    }

    let mut parts: Vec<&str> = core.split('.').map(strip_leading_zeros).collect();
    while parts.len() < 3 {
        parts.push("0");
    }

    format!("{}{}", parts.join("."), suffix)
}

/// "007" becomes "7" and "000" becomes "0"
fn strip_leading_zeros(part: &str) -> &str {
    let stripped = part.trim_start_matches('0');
    if stripped.is_empty() && !part.is_empty() {
        "0"
    } else {
        stripped
    }
}
