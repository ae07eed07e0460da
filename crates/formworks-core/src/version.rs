//! Version identifiers for the installed extension

use std::fmt;

/// An opaque version identifier
///
/// Versions are compared for equality only; no ordering or semantic
/// interpretation is applied. [`Version::matches`] ignores ASCII case,
/// mirroring how the host treats configured version values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Create a version from a raw value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Interpret a recorded value, treating blank records as absent
    ///
    /// Surrounding whitespace is not significant and is trimmed.
    pub fn from_recorded(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Check whether two versions identify the same release
    ///
    /// Comparison ignores ASCII case.
    pub fn matches(&self, other: &Version) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// The version as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
