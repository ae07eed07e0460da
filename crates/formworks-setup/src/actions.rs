//! The concrete setup actions
//!
//! One struct per install or upgrade step, each holding the host
//! collaborator it drives. [`standard_catalog`] wires all six in their
//! required order: the extension section must exist before dashboards are
//! registered into it, and the structural configuration group precedes the
//! settings defaults.

use std::sync::Arc;

use formworks_core::{
    AccessControl, Action, AppliesOn, ConfigurationGroup, DashboardDescriptor, FailurePolicy,
    HostSettings, HostUi, SectionDescriptor,
};
use tracing::debug;

use crate::catalog::ActionCatalog;

/// Alias of the extension's own UI section
pub const SECTION_ALIAS: &str = "formworks";
/// Alias of the host's developer section
pub const DEVELOPER_SECTION_ALIAS: &str = "developer";

/// Setting gating the default-access grant
pub const ENSURE_USERS_CAN_ACCESS: &str = "Formworks.EnsureUsersCanAccess";
/// Recaptcha site key setting
pub const RECAPTCHA_SITE_KEY: &str = "Formworks.RecaptchaSiteKey";
/// Recaptcha secret key setting
pub const RECAPTCHA_SECRET_KEY: &str = "Formworks.RecaptchaSecretKey";
/// Setting toggling JSON-formatted form submission logging
pub const ENABLE_JSON_FORM_LOGGING: &str = "Formworks.EnableJsonFormLogging";

/// Name of the configuration section group
pub const CONFIGURATION_GROUP: &str = "formworksConfiguration";

/// Sections the configuration group must contain
const CONFIGURATION_SECTIONS: [&str; 7] = [
    "buttons",
    "emailWhitelist",
    "email",
    "fieldCategories",
    "persistence",
    "submissions",
    "templates",
];

/// Settings ensured with defaults on every install and upgrade
const SETTING_DEFAULTS: [(&str, &str); 3] = [
    (RECAPTCHA_SITE_KEY, ""),
    (RECAPTCHA_SECRET_KEY, ""),
    (ENABLE_JSON_FORM_LOGGING, "false"),
];

/// Registers the extension's UI section
pub struct RegisterExtensionSection {
    ui: Arc<dyn HostUi>,
}

impl RegisterExtensionSection {
    pub fn new(ui: Arc<dyn HostUi>) -> Self {
        Self { ui }
    }
}

impl Action for RegisterExtensionSection {
    fn name(&self) -> &str {
        "register-extension-section"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::Always
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Fatal
    }

    fn run(&self) -> anyhow::Result<()> {
        self.ui.register_section(&SectionDescriptor {
            alias: SECTION_ALIAS.to_string(),
            name: "Formworks".to_string(),
            icon: "icon-folder".to_string(),
        })
    }
}

/// Registers the main dashboard inside the extension section
pub struct RegisterPrimaryDashboard {
    ui: Arc<dyn HostUi>,
}

impl RegisterPrimaryDashboard {
    pub fn new(ui: Arc<dyn HostUi>) -> Self {
        Self { ui }
    }
}

impl Action for RegisterPrimaryDashboard {
    fn name(&self) -> &str {
        "register-primary-dashboard"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::Always
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Fatal
    }

    fn run(&self) -> anyhow::Result<()> {
        self.ui.register_dashboard(&DashboardDescriptor {
            alias: "formworksDashboard".to_string(),
            view: "formworks/dashboard.html".to_string(),
            section_alias: SECTION_ALIAS.to_string(),
        })
    }
}

/// Registers the developer dashboard in the host's developer section
///
/// Runs only on fresh installs; upgrades leave the operator's dashboard
/// layout alone.
pub struct RegisterDeveloperDashboard {
    ui: Arc<dyn HostUi>,
}

impl RegisterDeveloperDashboard {
    pub fn new(ui: Arc<dyn HostUi>) -> Self {
        Self { ui }
    }
}

impl Action for RegisterDeveloperDashboard {
    fn name(&self) -> &str {
        "register-developer-dashboard"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::FreshInstallOnly
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Soft
    }

    fn run(&self) -> anyhow::Result<()> {
        self.ui.register_dashboard(&DashboardDescriptor {
            alias: "formworksDeveloperDashboard".to_string(),
            view: "formworks/developer-dashboard.html".to_string(),
            section_alias: DEVELOPER_SECTION_ALIAS.to_string(),
        })
    }
}

/// Grants the default user group access to the extension section
///
/// Gated on `Formworks.EnsureUsersCanAccess`: any non-blank value opts in;
/// an absent or blank setting skips the grant.
pub struct GrantDefaultAccess {
    settings: Arc<dyn HostSettings>,
    access: Arc<dyn AccessControl>,
}

impl GrantDefaultAccess {
    pub fn new(settings: Arc<dyn HostSettings>, access: Arc<dyn AccessControl>) -> Self {
        Self { settings, access }
    }

    fn grant_enabled(&self) -> bool {
        self.settings
            .setting(ENSURE_USERS_CAN_ACCESS)
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Action for GrantDefaultAccess {
    fn name(&self) -> &str {
        "grant-default-access"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::FreshInstallOnly
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Soft
    }

    fn run(&self) -> anyhow::Result<()> {
        if !self.grant_enabled() {
            debug!(
                setting = ENSURE_USERS_CAN_ACCESS,
                "default access grant not enabled, skipping"
            );
            return Ok(());
        }
        self.access.grant_section_access(SECTION_ALIAS)
    }
}

/// Applies the configuration section group to the host settings
pub struct ApplyConfigurationGroup {
    settings: Arc<dyn HostSettings>,
}

impl ApplyConfigurationGroup {
    pub fn new(settings: Arc<dyn HostSettings>) -> Self {
        Self { settings }
    }
}

impl Action for ApplyConfigurationGroup {
    fn name(&self) -> &str {
        "apply-configuration-group"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::Always
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Fatal
    }

    fn run(&self) -> anyhow::Result<()> {
        self.settings.apply_configuration_group(&ConfigurationGroup {
            name: CONFIGURATION_GROUP.to_string(),
            sections: CONFIGURATION_SECTIONS
                .iter()
                .map(|section| section.to_string())
                .collect(),
        })
    }
}

/// Ensures the extension's application settings exist with defaults
///
/// Existing values are left alone; only missing keys receive defaults.
pub struct EnsureApplicationSettings {
    settings: Arc<dyn HostSettings>,
}

impl EnsureApplicationSettings {
    pub fn new(settings: Arc<dyn HostSettings>) -> Self {
        Self { settings }
    }
}

impl Action for EnsureApplicationSettings {
    fn name(&self) -> &str {
        "ensure-application-settings"
    }

    fn applies_on(&self) -> AppliesOn {
        AppliesOn::Always
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Soft
    }

    fn run(&self) -> anyhow::Result<()> {
        for (key, default_value) in SETTING_DEFAULTS {
            self.settings.ensure_setting(key, default_value)?;
        }
        Ok(())
    }
}

/// Build the standard action catalog in its required order
pub fn standard_catalog(
    ui: Arc<dyn HostUi>,
    access: Arc<dyn AccessControl>,
    settings: Arc<dyn HostSettings>,
) -> ActionCatalog {
    let mut catalog = ActionCatalog::new();
    catalog
        .register(Box::new(RegisterExtensionSection::new(ui.clone())))
        .register(Box::new(RegisterPrimaryDashboard::new(ui.clone())))
        .register(Box::new(RegisterDeveloperDashboard::new(ui)))
        .register(Box::new(GrantDefaultAccess::new(settings.clone(), access)))
        .register(Box::new(ApplyConfigurationGroup::new(settings.clone())))
        .register(Box::new(EnsureApplicationSettings::new(settings)));
    catalog
}
