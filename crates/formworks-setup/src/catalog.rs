//! The ordered catalog of setup actions
//!
//! Registration order is execution order. The catalog owns its actions as
//! trait objects and produces per-transition plans by filtering on each
//! action's applicability tag.

use formworks_core::{Action, Transition};

/// Ordered collection of setup actions
#[derive(Default)]
pub struct ActionCatalog {
    actions: Vec<Box<dyn Action>>,
}

impl ActionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Append an action, preserving registration order
    pub fn register(&mut self, action: Box<dyn Action>) -> &mut Self {
        self.actions.push(action);
        self
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check whether the catalog has no actions
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Names of all registered actions, in order
    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(|action| action.name()).collect()
    }

    /// The plan for a transition
    ///
    /// Filters by applicability while preserving registration order. A
    /// no-op transition yields an empty plan.
    pub fn actions_for(&self, transition: Transition) -> Vec<&dyn Action> {
        self.actions
            .iter()
            .filter(|action| action.applies_on().applies_to(transition))
            .map(|action| action.as_ref())
            .collect()
    }
}
