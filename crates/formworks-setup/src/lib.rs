//! # formworks-setup
//!
//! Startup install and upgrade orchestration for the Formworks extension.
//!
//! When the host application starts, this crate compares the recorded
//! installed version with the version currently running, resolves the
//! startup into a fresh install, an upgrade or a no-op, and drives the
//! ordered catalog of setup actions for that transition. It provides:
//!
//! - Transition resolution from recorded and current versions
//! - The ordered action catalog with per-action failure policies
//! - Plan execution with fault containment
//! - Version record persistence (file-backed and in-memory stores)
//! - Setup reports for host startup diagnostics

pub mod actions;
pub mod catalog;
pub mod executor;
pub mod orchestrator;
pub mod report;
pub mod resolver;
pub mod startup;
pub mod store;

pub use actions::standard_catalog;
pub use catalog::ActionCatalog;
pub use executor::ActionExecutor;
pub use orchestrator::{FatalFailure, InstallationOrchestrator, OrchestrationResult};
pub use report::{FailureRecord, FailureStep, SetupReport};
pub use resolver::resolve;
pub use startup::{current_package_version, run_host_startup};
pub use store::{FileVersionStore, MemoryVersionStore, VersionRecord};
