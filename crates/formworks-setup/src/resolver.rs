//! Transition resolution
//!
//! Compares the recorded installed version with the currently running
//! version and classifies the startup as a fresh install, an upgrade or a
//! no-op. The function is total: every input pair maps to exactly one
//! transition and no error conditions exist.

use formworks_core::{Transition, Version};

/// Resolve the startup transition from recorded and current versions
///
/// `None` means no version has ever been recorded (or the record was
/// blank), which is treated as the extension being absent. Any recorded
/// version that does not match the current one resolves to an upgrade,
/// including a recorded version that is newer.
pub fn resolve(installed: Option<&Version>, current: &Version) -> Transition {
    match installed {
        None => Transition::FreshInstall,
        Some(recorded) if recorded.matches(current) => Transition::NoOp,
        Some(_) => Transition::Upgrade,
    }
}
