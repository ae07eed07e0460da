//! Single-action execution with fault containment
//!
//! Runs one action and converts any failure, whether an error value or a
//! panic, into an [`ActionError`] tagged with the action's declared policy.
//! The orchestrator then applies failure handling uniformly without caring
//! how the action went wrong.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use formworks_core::{Action, ActionError};
use tracing::debug;

/// Executes individual setup actions
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionExecutor;

impl ActionExecutor {
    /// Create a new executor
    pub fn new() -> Self {
        Self
    }

    /// Run a single action
    ///
    /// A panic raised by the action is caught and reported like any other
    /// failure; it never escapes to the host startup path.
    pub fn execute(&self, action: &dyn Action) -> Result<(), ActionError> {
        debug!(action = action.name(), "running setup action");

        match panic::catch_unwind(AssertUnwindSafe(|| action.run())) {
            Ok(Ok(())) => {
                debug!(action = action.name(), "setup action completed");
                Ok(())
            }
            Ok(Err(cause)) => Err(ActionError::new(
                action.name(),
                action.failure_policy(),
                cause,
            )),
            Err(payload) => Err(ActionError::new(
                action.name(),
                action.failure_policy(),
                anyhow!("action panicked: {}", panic_message(payload.as_ref())),
            )),
        }
    }
}

/// Best-effort extraction of a panic payload message
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
