//! The host startup entry point
//!
//! One call per host process start: read the recorded version, resolve the
//! transition, run the applicable plan and emit a diagnostic report. Setup
//! failures are reported and logged but never propagate; the host keeps
//! starting either way.

use formworks_core::{Transition, Version, VersionStore};
use tracing::{debug, error, info, warn};

use crate::catalog::ActionCatalog;
use crate::orchestrator::InstallationOrchestrator;
use crate::report::SetupReport;
use crate::resolver;

/// The version of this package, as the currently running extension version
pub fn current_package_version() -> Version {
    Version::new(env!("CARGO_PKG_VERSION"))
}

/// Run the startup install/upgrade pipeline
///
/// Reads the recorded version, resolves the transition and drives the plan.
/// A failed read is logged and treated as no record, so a damaged store
/// heals through a fresh install. The returned report is also emitted as a
/// structured log line; callers may ignore it.
pub fn run_host_startup(
    current: Version,
    catalog: &ActionCatalog,
    store: &dyn VersionStore,
) -> SetupReport {
    let installed = match store.read() {
        Ok(recorded) => recorded,
        Err(err) => {
            warn!(
                error = %err,
                "could not read installed version record, treating extension as not installed"
            );
            None
        }
    };

    let transition = resolver::resolve(installed.as_ref(), &current);
    match transition {
        Transition::FreshInstall => info!(version = %current, "installing extension"),
        Transition::Upgrade => {
            if let Some(previous) = &installed {
                info!(from = %previous, to = %current, "upgrading extension");
            }
        }
        Transition::NoOp => debug!(version = %current, "extension is up to date"),
    }

    let orchestrator = InstallationOrchestrator::new(catalog, store);
    let result = orchestrator.run(transition, &current);

    let report = SetupReport::from_result(&result);
    emit_report(&report);
    report
}

/// Log a finished report at a level matching its outcome
fn emit_report(report: &SetupReport) {
    let payload = match serde_json::to_string(report) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "could not serialize setup report");
            return;
        }
    };

    if report.is_fatal() {
        error!(report = %payload, "extension setup failed, will retry on next startup");
    } else if report.is_partial() {
        warn!(report = %payload, "extension setup completed with soft failures");
    } else if report.transition.is_noop() {
        debug!(report = %payload, "extension setup skipped");
    } else {
        info!(report = %payload, "extension setup complete");
    }
}
