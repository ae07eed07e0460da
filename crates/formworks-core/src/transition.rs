//! Startup transition classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// The relationship between the recorded version and the running version
///
/// Derived on every startup, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// The extension is already at the current version
    NoOp,
    /// No version is recorded, the extension is absent
    FreshInstall,
    /// A different version is recorded
    Upgrade,
}

impl Transition {
    /// Check whether this transition requires no setup work
    pub fn is_noop(&self) -> bool {
        matches!(self, Transition::NoOp)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::NoOp => write!(f, "no-op"),
            Transition::FreshInstall => write!(f, "fresh install"),
            Transition::Upgrade => write!(f, "upgrade"),
        }
    }
}
