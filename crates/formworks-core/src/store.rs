//! Version record persistence contract

use crate::error::StoreResult;
use crate::version::Version;

/// Persistent store for the installed-version record
///
/// The store holds at most one record. Writing it is the only externally
/// visible proof that a setup run completed under policy, so nothing else in
/// the engine touches the store. Actions never see it.
pub trait VersionStore: Send + Sync {
    /// Read the recorded version, `None` when no version has been recorded
    ///
    /// Implementations report unreadable or malformed records as errors; the
    /// caller decides whether to treat those as absent.
    fn read(&self) -> StoreResult<Option<Version>>;

    /// Persist `version` as the new installed-version record
    fn write(&self, version: &Version) -> StoreResult<()>;
}
