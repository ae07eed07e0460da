//! Host collaborator contracts
//!
//! The engine never talks to the host directly. Sections, dashboards,
//! permissions and configuration are reached through these traits, which the
//! host implements against its own composition and configuration APIs. Every
//! operation must be idempotent: registering something that already exists is
//! a no-op on the host side.

use anyhow::Result;

/// A UI section registered by the extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Stable alias used when wiring dashboards and permissions
    pub alias: String,
    /// Human-readable name shown in the host UI
    pub name: String,
    /// Icon identifier understood by the host
    pub icon: String,
}

/// A dashboard registered inside a host section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardDescriptor {
    /// Stable dashboard alias
    pub alias: String,
    /// View path the host should render
    pub view: String,
    /// Alias of the section hosting this dashboard
    pub section_alias: String,
}

/// A named configuration section group with its expected sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationGroup {
    /// Group name in host configuration
    pub name: String,
    /// Sections the group must contain
    pub sections: Vec<String>,
}

/// Registration surface of the host UI
pub trait HostUi: Send + Sync {
    /// Register a UI section
    fn register_section(&self, section: &SectionDescriptor) -> Result<()>;

    /// Register a dashboard inside a section
    fn register_dashboard(&self, dashboard: &DashboardDescriptor) -> Result<()>;
}

/// Permission management surface of the host
pub trait AccessControl: Send + Sync {
    /// Grant the host's default user group access to a section
    fn grant_section_access(&self, section_alias: &str) -> Result<()>;
}

/// Application settings and configuration surface of the host
pub trait HostSettings: Send + Sync {
    /// Read an application setting, `None` when the key is absent
    fn setting(&self, key: &str) -> Option<String>;

    /// Create a setting with a default value when missing or blank
    ///
    /// Existing non-blank values are left untouched.
    fn ensure_setting(&self, key: &str, default_value: &str) -> Result<()>;

    /// Ensure a configuration section group with its sections exists
    ///
    /// Host configuration is rewritten only when the group or any of its
    /// sections is missing.
    fn apply_configuration_group(&self, group: &ConfigurationGroup) -> Result<()>;
}
