//! Installation plan orchestration
//!
//! Drives the plan for a resolved transition. Actions run strictly in
//! registration order; the first fatal failure aborts the remainder and
//! withholds the version write, soft failures are recorded and skipped
//! over, and a run that reaches the end records the current version as the
//! new installed version.

use std::error::Error as StdError;
use std::fmt;

use formworks_core::{ActionError, StoreError, Transition, Version, VersionStore};
use tracing::{debug, error, info, warn};

use crate::catalog::ActionCatalog;
use crate::executor::ActionExecutor;

/// Step name reported for a failed version write
pub const RECORD_VERSION_STEP: &str = "record-installed-version";

/// A failure that ended a run without a version write
#[derive(Debug)]
pub enum FatalFailure {
    /// A fatal-policy action failed
    Action(ActionError),
    /// Every action succeeded under policy but the version write failed
    VersionWrite(StoreError),
}

impl FatalFailure {
    /// Name of the failed step as it appears in reports
    pub fn step_name(&self) -> &str {
        match self {
            FatalFailure::Action(err) => err.action_name(),
            FatalFailure::VersionWrite(_) => RECORD_VERSION_STEP,
        }
    }

    /// Check whether the failure came from an action
    pub fn is_action(&self) -> bool {
        matches!(self, FatalFailure::Action(_))
    }

    /// Check whether the failure came from the version write
    pub fn is_version_write(&self) -> bool {
        matches!(self, FatalFailure::VersionWrite(_))
    }
}

impl fmt::Display for FatalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalFailure::Action(err) => write!(f, "{err}"),
            FatalFailure::VersionWrite(err) => {
                write!(f, "installed version not recorded: {err}")
            }
        }
    }
}

impl StdError for FatalFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FatalFailure::Action(err) => Some(err),
            FatalFailure::VersionWrite(err) => Some(err),
        }
    }
}

/// Outcome of one orchestration run
#[derive(Debug)]
pub struct OrchestrationResult {
    /// The transition the run was resolved for
    pub transition: Transition,

    /// Names of actions that ran to completion, in execution order
    pub completed: Vec<String>,

    /// Soft failures recorded along the way
    pub soft_failures: Vec<ActionError>,

    /// The failure that aborted the run, if any
    pub fatal_failure: Option<FatalFailure>,

    /// Whether the version record was written
    pub version_written: bool,
}

impl OrchestrationResult {
    fn noop() -> Self {
        Self {
            transition: Transition::NoOp,
            completed: Vec::new(),
            soft_failures: Vec::new(),
            fatal_failure: None,
            version_written: false,
        }
    }

    /// Check whether the run completed with every action succeeding
    pub fn is_success(&self) -> bool {
        self.fatal_failure.is_none() && self.soft_failures.is_empty()
    }

    /// Check whether the run completed but tolerated soft failures
    pub fn is_partial(&self) -> bool {
        self.fatal_failure.is_none() && !self.soft_failures.is_empty()
    }

    /// Check whether the run was aborted
    pub fn is_fatal(&self) -> bool {
        self.fatal_failure.is_some()
    }

    /// Number of actions that were invoked
    pub fn attempted_count(&self) -> usize {
        let fatal_action = matches!(self.fatal_failure, Some(FatalFailure::Action(_))) as usize;
        self.completed.len() + self.soft_failures.len() + fatal_action
    }
}

/// Drives installation plans against the version store
pub struct InstallationOrchestrator<'a> {
    catalog: &'a ActionCatalog,
    store: &'a dyn VersionStore,
    executor: ActionExecutor,
}

impl<'a> InstallationOrchestrator<'a> {
    /// Create an orchestrator over a catalog and a version store
    pub fn new(catalog: &'a ActionCatalog, store: &'a dyn VersionStore) -> Self {
        Self {
            catalog,
            store,
            executor: ActionExecutor::new(),
        }
    }

    /// Run the plan for `transition`, recording `current` on completion
    ///
    /// A no-op transition returns immediately without touching the store.
    /// Otherwise the applicable actions run in registration order. The
    /// version write happens only when no fatal failure occurred; soft
    /// failures never block it, so a partially degraded setup does not
    /// repeat on every startup.
    pub fn run(&self, transition: Transition, current: &Version) -> OrchestrationResult {
        if transition.is_noop() {
            debug!(version = %current, "extension already set up, nothing to run");
            return OrchestrationResult::noop();
        }

        let plan = self.catalog.actions_for(transition);
        info!(
            transition = %transition,
            planned = plan.len(),
            version = %current,
            "running extension setup plan"
        );

        let mut completed = Vec::new();
        let mut soft_failures = Vec::new();

        for action in plan {
            match self.executor.execute(action) {
                Ok(()) => completed.push(action.name().to_string()),
                Err(err) if err.is_fatal() => {
                    error!(
                        action = err.action_name(),
                        error = %err,
                        "fatal setup failure, aborting remaining plan"
                    );
                    return OrchestrationResult {
                        transition,
                        completed,
                        soft_failures,
                        fatal_failure: Some(FatalFailure::Action(err)),
                        version_written: false,
                    };
                }
                Err(err) => {
                    warn!(
                        action = err.action_name(),
                        error = %err,
                        "setup action failed, continuing with remaining plan"
                    );
                    soft_failures.push(err);
                }
            }
        }

        match self.store.write(current) {
            Ok(()) => {
                info!(version = %current, "recorded installed version");
                OrchestrationResult {
                    transition,
                    completed,
                    soft_failures,
                    fatal_failure: None,
                    version_written: true,
                }
            }
            Err(err) => {
                error!(
                    error = %err,
                    "installed version not recorded, setup will rerun on next startup"
                );
                OrchestrationResult {
                    transition,
                    completed,
                    soft_failures,
                    fatal_failure: Some(FatalFailure::VersionWrite(err)),
                    version_written: false,
                }
            }
        }
    }
}
