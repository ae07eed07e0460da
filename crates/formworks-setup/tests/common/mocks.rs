//! Mock implementations for testing
//!
//! Provides scripted actions, a recording host and a failure-injecting
//! version store so lifecycle tests run without real host side effects.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use formworks_core::{
    AccessControl, Action, AppliesOn, ConfigurationGroup, DashboardDescriptor, FailurePolicy,
    HostSettings, HostUi, SectionDescriptor, StoreError, StoreResult, Version, VersionStore,
};
use formworks_setup::store::MemoryVersionStore;

/// Shared record of action invocations, in execution order
pub type RunLog = Arc<Mutex<Vec<String>>>;

/// Create an empty run log
pub fn new_run_log() -> RunLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Read a run log's entries
pub fn logged_runs(log: &RunLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Outcome a scripted action produces when run
#[derive(Clone, Copy, Debug)]
pub enum MockOutcome {
    Succeed,
    Fail,
    Panic,
}

/// A scripted action that records every invocation
pub struct MockAction {
    name: String,
    applies_on: AppliesOn,
    policy: FailurePolicy,
    outcome: MockOutcome,
    log: RunLog,
}

impl MockAction {
    /// A succeeding, always-applicable, fatal-policy action
    pub fn new(name: &str, log: &RunLog) -> Self {
        Self {
            name: name.to_string(),
            applies_on: AppliesOn::Always,
            policy: FailurePolicy::Fatal,
            outcome: MockOutcome::Succeed,
            log: log.clone(),
        }
    }

    /// Restrict the action to fresh installs
    pub fn fresh_install_only(mut self) -> Self {
        self.applies_on = AppliesOn::FreshInstallOnly;
        self
    }

    /// Use the soft failure policy
    pub fn soft(mut self) -> Self {
        self.policy = FailurePolicy::Soft;
        self
    }

    /// Script the action to return an error
    pub fn failing(mut self) -> Self {
        self.outcome = MockOutcome::Fail;
        self
    }

    /// Script the action to panic
    pub fn panicking(mut self) -> Self {
        self.outcome = MockOutcome::Panic;
        self
    }

    /// Box the action for catalog registration
    pub fn boxed(self) -> Box<dyn Action> {
        Box::new(self)
    }
}

impl Action for MockAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies_on(&self) -> AppliesOn {
        self.applies_on
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    fn run(&self) -> anyhow::Result<()> {
        self.log.lock().unwrap().push(self.name.clone());
        match self.outcome {
            MockOutcome::Succeed => Ok(()),
            MockOutcome::Fail => bail!("scripted failure in '{}'", self.name),
            MockOutcome::Panic => panic!("scripted panic in '{}'", self.name),
        }
    }
}

/// Recording mock host
///
/// Implements every host-facing trait and records what the actions did to
/// it. Individual operations can be scripted to fail by name.
#[derive(Default)]
pub struct MockHost {
    sections: Mutex<Vec<SectionDescriptor>>,
    dashboards: Mutex<Vec<DashboardDescriptor>>,
    grants: Mutex<Vec<String>>,
    values: Mutex<HashMap<String, String>>,
    ensured: Mutex<Vec<(String, String)>>,
    groups: Mutex<Vec<ConfigurationGroup>>,
    failing: Mutex<HashSet<String>>,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pre-populate a host setting value
    pub fn set_setting(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Script a host operation to fail
    ///
    /// Operations are named after the trait methods: `register_section`,
    /// `register_dashboard`, `grant_section_access`, `ensure_setting` and
    /// `apply_configuration_group`.
    pub fn fail_on(&self, operation: &str) {
        self.failing.lock().unwrap().insert(operation.to_string());
    }

    /// Remove a scripted failure
    pub fn recover(&self, operation: &str) {
        self.failing.lock().unwrap().remove(operation);
    }

    fn check(&self, operation: &str) -> anyhow::Result<()> {
        if self.failing.lock().unwrap().contains(operation) {
            bail!("host rejected {operation}");
        }
        Ok(())
    }

    pub fn section_aliases(&self) -> Vec<String> {
        self.sections
            .lock()
            .unwrap()
            .iter()
            .map(|section| section.alias.clone())
            .collect()
    }

    pub fn dashboard_aliases(&self) -> Vec<String> {
        self.dashboards
            .lock()
            .unwrap()
            .iter()
            .map(|dashboard| dashboard.alias.clone())
            .collect()
    }

    pub fn granted_sections(&self) -> Vec<String> {
        self.grants.lock().unwrap().clone()
    }

    pub fn ensured_settings(&self) -> Vec<(String, String)> {
        self.ensured.lock().unwrap().clone()
    }

    pub fn applied_groups(&self) -> Vec<ConfigurationGroup> {
        self.groups.lock().unwrap().clone()
    }
}

impl HostUi for MockHost {
    fn register_section(&self, section: &SectionDescriptor) -> anyhow::Result<()> {
        self.check("register_section")?;
        self.sections.lock().unwrap().push(section.clone());
        Ok(())
    }

    fn register_dashboard(&self, dashboard: &DashboardDescriptor) -> anyhow::Result<()> {
        self.check("register_dashboard")?;
        self.dashboards.lock().unwrap().push(dashboard.clone());
        Ok(())
    }
}

impl AccessControl for MockHost {
    fn grant_section_access(&self, section_alias: &str) -> anyhow::Result<()> {
        self.check("grant_section_access")?;
        self.grants.lock().unwrap().push(section_alias.to_string());
        Ok(())
    }
}

impl HostSettings for MockHost {
    fn setting(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn ensure_setting(&self, key: &str, default_value: &str) -> anyhow::Result<()> {
        self.check("ensure_setting")?;
        let mut values = self.values.lock().unwrap();
        values
            .entry(key.to_string())
            .or_insert_with(|| default_value.to_string());
        self.ensured
            .lock()
            .unwrap()
            .push((key.to_string(), default_value.to_string()));
        Ok(())
    }

    fn apply_configuration_group(&self, group: &ConfigurationGroup) -> anyhow::Result<()> {
        self.check("apply_configuration_group")?;
        self.groups.lock().unwrap().push(group.clone());
        Ok(())
    }
}

/// Version store with scriptable read and write failures
pub struct MockStore {
    inner: MemoryVersionStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockStore {
    /// An empty, fully working store
    pub fn empty() -> Self {
        Self {
            inner: MemoryVersionStore::new(),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// A working store pre-seeded with a recorded version
    pub fn recorded(version: &str) -> Self {
        Self {
            inner: MemoryVersionStore::with_version(Version::new(version)),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Script all reads to fail
    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    /// Script all writes to fail
    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    /// Let scripted write failures succeed again
    pub fn recover_writes(&self) {
        self.fail_writes.store(false, Ordering::SeqCst);
    }

    /// The version currently recorded, bypassing scripted read failures
    pub fn recorded_version(&self) -> Option<Version> {
        self.inner.read().ok().flatten()
    }
}

impl VersionStore for MockStore {
    fn read(&self) -> StoreResult<Option<Version>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read(
                "mock-store",
                std::io::Error::other("scripted read failure"),
            ));
        }
        self.inner.read()
    }

    fn write(&self, version: &Version) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write(
                "mock-store",
                std::io::Error::other("scripted write failure"),
            ));
        }
        self.inner.write(version)
    }
}
