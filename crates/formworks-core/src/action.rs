//! The setup action contract and its failure value
//!
//! Every install/upgrade step the engine can run implements [`Action`].
//! Applicability and failure handling are declared on the action itself so
//! the orchestrator can treat all steps uniformly.

use std::error::Error as StdError;
use std::fmt;

use crate::transition::Transition;

/// When an action belongs in an installation plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesOn {
    /// Runs only when the extension is first installed
    FreshInstallOnly,
    /// Runs on fresh installs and upgrades alike
    Always,
}

impl AppliesOn {
    /// Check whether an action with this tag belongs in a transition's plan
    pub fn applies_to(&self, transition: Transition) -> bool {
        match transition {
            Transition::NoOp => false,
            Transition::FreshInstall => true,
            Transition::Upgrade => matches!(self, AppliesOn::Always),
        }
    }
}

/// How an action failure affects the rest of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure aborts the remaining plan and withholds the version write
    Fatal,
    /// Failure is logged and the plan continues
    Soft,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Fatal => write!(f, "fatal"),
            FailurePolicy::Soft => write!(f, "soft"),
        }
    }
}

/// A single idempotent setup step
///
/// Implementations perform host-side mutations (section registration,
/// permission grants, configuration rewrites) through the collaborator
/// traits. Each action must be idempotent: re-running a completed action is a
/// no-op at the host boundary. Failures are reported as values; the executor
/// additionally contains panics so no fault bypasses policy handling.
pub trait Action: Send + Sync {
    /// Stable action name used in plans, logs and reports
    fn name(&self) -> &str;

    /// When this action belongs in a plan
    fn applies_on(&self) -> AppliesOn;

    /// How a failure of this action affects the rest of the plan
    fn failure_policy(&self) -> FailurePolicy;

    /// Perform the action against the host
    fn run(&self) -> anyhow::Result<()>;
}

/// Failure of a single action, tagged with its declared policy
#[derive(Debug)]
pub struct ActionError {
    action_name: String,
    policy: FailurePolicy,
    cause: anyhow::Error,
}

impl ActionError {
    /// Create a new action error
    pub fn new(
        action_name: impl Into<String>,
        policy: FailurePolicy,
        cause: anyhow::Error,
    ) -> Self {
        Self {
            action_name: action_name.into(),
            policy,
            cause,
        }
    }

    /// Name of the failed action
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// The failed action's declared policy
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Check whether this failure aborts the remaining plan
    pub fn is_fatal(&self) -> bool {
        self.policy == FailurePolicy::Fatal
    }

    /// Check whether this failure lets the plan continue
    pub fn is_soft(&self) -> bool {
        self.policy == FailurePolicy::Soft
    }

    /// The underlying cause
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "action '{}' failed ({}): {}",
            self.action_name, self.policy, self.cause
        )
    }
}

impl StdError for ActionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}
