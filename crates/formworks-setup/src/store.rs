//! Version store implementations
//!
//! [`FileVersionStore`] persists the installed-version record as a small
//! YAML document in the host's data directory. [`MemoryVersionStore`] keeps
//! the record in process, for embedding hosts that manage persistence
//! themselves and for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use formworks_core::{StoreError, StoreResult, Version, VersionStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SCHEMA_VERSION: &str = "1.0";

/// Persisted form of the installed-version record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Record schema version
    pub schema_version: String,

    /// The installed extension version
    pub version: String,

    /// When the record was written (UTC)
    pub recorded_at: DateTime<Utc>,

    /// Package version that wrote the record
    pub recorded_by: String,
}

impl VersionRecord {
    /// Create a record for `version`, stamped with the current time
    pub fn new(version: &Version) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            version: version.as_str().to_string(),
            recorded_at: Utc::now(),
            recorded_by: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// File-backed version store
///
/// Reads of a missing file yield `None`. Unreadable or malformed records
/// are reported as errors so the caller can log them before falling back to
/// a fresh install.
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    /// Create a store over `path`
    ///
    /// The record file and its parent directories are created lazily on
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn ensure_parent_dir(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| StoreError::write(self.display_path(), source))?;
        }
        Ok(())
    }
}

impl VersionStore for FileVersionStore {
    fn read(&self) -> StoreResult<Option<Version>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no version record file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|source| StoreError::read(self.display_path(), source))?;
        let record: VersionRecord = serde_yaml_ng::from_str(&content)
            .map_err(|source| StoreError::malformed(self.display_path(), source))?;

        debug!(
            path = %self.path.display(),
            version = %record.version,
            "loaded version record"
        );
        Ok(Version::from_recorded(&record.version))
    }

    fn write(&self, version: &Version) -> StoreResult<()> {
        self.ensure_parent_dir()?;

        let record = VersionRecord::new(version);
        let content = serde_yaml_ng::to_string(&record)?;
        std::fs::write(&self.path, content)
            .map_err(|source| StoreError::write(self.display_path(), source))?;

        debug!(path = %self.path.display(), version = %version, "saved version record");
        Ok(())
    }
}

/// In-process version store
#[derive(Default)]
pub struct MemoryVersionStore {
    slot: Mutex<Option<Version>>,
}

impl MemoryVersionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a recorded version
    pub fn with_version(version: Version) -> Self {
        Self {
            slot: Mutex::new(Some(version)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Version>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl VersionStore for MemoryVersionStore {
    fn read(&self) -> StoreResult<Option<Version>> {
        Ok(self.slot().clone())
    }

    fn write(&self, version: &Version) -> StoreResult<()> {
        *self.slot() = Some(version.clone());
        Ok(())
    }
}
