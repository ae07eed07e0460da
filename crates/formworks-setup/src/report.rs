//! Diagnostic reporting for setup runs
//!
//! A [`SetupReport`] is the serializable record of one orchestration run,
//! suitable for a single structured log line or for host-side inspection.

use chrono::{DateTime, Utc};
use formworks_core::Transition;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::orchestrator::{FatalFailure, OrchestrationResult};

/// Step kind a failure was recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStep {
    /// A setup action failed
    Action,
    /// The final version-record write failed
    RecordVersion,
}

/// A single recorded failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Name of the failed step
    pub step: String,

    /// Where in the run the failure occurred
    pub kind: FailureStep,

    /// Failure message
    pub message: String,
}

/// Serializable record of one setup run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupReport {
    /// Unique report ID
    pub report_id: String,

    /// When the report was produced (UTC)
    pub timestamp: DateTime<Utc>,

    /// Package version that produced the report
    pub package_version: String,

    /// The resolved transition
    pub transition: Transition,

    /// Actions that ran to completion, in execution order
    pub completed: Vec<String>,

    /// Soft failures tolerated during the run
    pub soft_failures: Vec<FailureRecord>,

    /// The failure that aborted the run, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_failure: Option<FailureRecord>,

    /// Whether the version record was written
    pub version_written: bool,
}

impl SetupReport {
    /// Build a report from an orchestration result
    ///
    /// The `step` field already names the failed action, so failure records
    /// carry the bare cause rather than the full error line.
    pub fn from_result(result: &OrchestrationResult) -> Self {
        let soft_failures = result
            .soft_failures
            .iter()
            .map(|err| FailureRecord {
                step: err.action_name().to_string(),
                kind: FailureStep::Action,
                message: err.cause().to_string(),
            })
            .collect();

        let fatal_failure = result.fatal_failure.as_ref().map(|failure| {
            let (kind, message) = match failure {
                FatalFailure::Action(err) => (FailureStep::Action, err.cause().to_string()),
                FatalFailure::VersionWrite(err) => (FailureStep::RecordVersion, err.to_string()),
            };
            FailureRecord {
                step: failure.step_name().to_string(),
                kind,
                message,
            }
        });

        Self {
            report_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            package_version: env!("CARGO_PKG_VERSION").to_string(),
            transition: result.transition,
            completed: result.completed.clone(),
            soft_failures,
            fatal_failure,
            version_written: result.version_written,
        }
    }

    /// Check whether the run behind this report recorded no failures at all
    pub fn is_success(&self) -> bool {
        self.fatal_failure.is_none() && self.soft_failures.is_empty()
    }

    /// Check whether the run completed while tolerating soft failures
    pub fn is_partial(&self) -> bool {
        self.fatal_failure.is_none() && !self.soft_failures.is_empty()
    }

    /// Check whether the run was aborted
    pub fn is_fatal(&self) -> bool {
        self.fatal_failure.is_some()
    }
}
