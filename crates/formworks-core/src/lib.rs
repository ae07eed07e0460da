//! # formworks-core
//!
//! Core library for the Formworks setup engine providing:
//! - Version identifiers and transition classification
//! - The setup action contract with applicability tags and failure policies
//! - Host collaborator traits (UI registration, access control, settings)
//! - The version store contract and its error types

pub mod action;
pub mod error;
pub mod host;
pub mod store;
pub mod transition;
pub mod version;

pub use action::{Action, ActionError, AppliesOn, FailurePolicy};
pub use error::{StoreError, StoreResult};
pub use host::{
    AccessControl, ConfigurationGroup, DashboardDescriptor, HostSettings, HostUi,
    SectionDescriptor,
};
pub use store::VersionStore;
pub use transition::Transition;
pub use version::Version;
