//! Semantic process versions.

use super::ParseProcessVersionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process version `<major>.<minor>.<patch>`.
///
/// Versions compare numerically, so `1.10.0` is newer than `1.9.3`.
/// Components are written without leading zeros, so each version has
/// exactly one textual form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProcessVersion {
    /// Major version.
    pub major: u64,
    /// Minor version.
    pub minor: u64,
    /// Patch version.
    pub patch: u64,
}

impl ProcessVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for ProcessVersion {
    type Err = ParseProcessVersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseProcessVersionError(value.to_owned());
        let mut parts = value.split('.').map(|part| parse_component(part).ok_or_else(invalid));
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self::new(major?, minor?, patch?))
    }
}

/// Parses a non-empty run of ASCII digits without leading zeros.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for ProcessVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
