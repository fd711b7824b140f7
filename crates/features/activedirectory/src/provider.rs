use crate::error::{ActiveDirectoryError, ActiveDirectoryErrorExt};
use crate::selector::select;
use adauth_domain::auth::WindowsAuthFlag;
use adauth_domain::constants::LDAP_WINDOWS_AUTH;
use adauth_domain::extension::ExtensionSet;
use adauth_domain::registry::ExtensionBundle;
use adauth_kernel::settings::Settings;
use adauth_kernel::system::{HostOs, HostSystem};
use tracing::{debug, info};

/// Startup provider of the Active Directory extensions.
///
/// The host builds one provider per startup and calls [`provide`](Self::provide) once; the call
/// consumes the provider, so a second evaluation cannot happen.
#[derive(Debug)]
pub struct ActiveDirectoryExtensions<S, O = HostSystem> {
    settings: S,
    system: O,
}

impl<S: Settings> ActiveDirectoryExtensions<S> {
    /// Provider that classifies the real host OS.
    pub const fn new(settings: S) -> Self {
        Self { settings, system: HostSystem }
    }
}

impl<S: Settings, O: HostOs> ActiveDirectoryExtensions<S, O> {
    /// Provider with an injected OS classifier.
    pub const fn with_system(settings: S, system: O) -> Self {
        Self { settings, system }
    }

    /// Current value of the Windows authentication setting.
    pub fn windows_auth_flag(&self) -> WindowsAuthFlag {
        WindowsAuthFlag::from_setting(self.settings.get_string(LDAP_WINDOWS_AUTH).as_deref())
    }

    /// Selects the extension set without packaging it.
    ///
    /// # Errors
    /// Returns [`ActiveDirectoryError::Configuration`] when Windows authentication is forced on
    /// a non-Windows host.
    pub fn extensions(&self) -> Result<ExtensionSet, ActiveDirectoryError> {
        let flag = self.windows_auth_flag();
        let is_windows = self.system.is_windows();
        debug!(%flag, is_windows, "Selecting Active Directory extensions");

        select(flag, is_windows)
    }

    /// Evaluates the provider and packages the result for registration.
    ///
    /// The bundle is always present; it is empty when no extension applies.
    ///
    /// # Errors
    /// Propagates [`ActiveDirectoryError::Configuration`]; startup must abort on it.
    pub fn provide(self) -> Result<ExtensionBundle, ActiveDirectoryError> {
        let set = self.extensions().context("Resolving plugin extensions")?;
        info!(set = %set, count = set.len(), "Active Directory extensions resolved");

        Ok(ExtensionBundle::new(set))
    }
}
