//! Facade crate for the Active Directory authentication plugin.
//! Re-exports domain/kernel primitives and the feature slice, and exposes the host-facing entry point.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! The host calls [`define`] once during startup and registers every descriptor of the
//! returned bundle. An error must abort startup.

pub use adauth_domain as domain;
pub use adauth_kernel as kernel;

use adauth_activedirectory::{ActiveDirectoryError, ActiveDirectoryExtensions};
use domain::registry::ExtensionBundle;
use kernel::settings::Settings;
use kernel::system::HostSystem;

/// Feature slices bundled in this plugin.
pub mod features {
    pub use adauth_activedirectory as activedirectory;
}

/// Key the plugin registers under.
pub const PLUGIN_KEY: &str = "activedirectory";

/// Evaluates the plugin's extensions for the current host.
///
/// # Errors
/// Returns [`ActiveDirectoryError::Configuration`] when Windows authentication is forced on a
/// non-Windows host.
pub fn define<S: Settings>(settings: S) -> Result<ExtensionBundle, ActiveDirectoryError> {
    tracing::info!(plugin = PLUGIN_KEY, os = HostSystem::os_name(), "Defining plugin extensions");

    ActiveDirectoryExtensions::new(settings).provide()
}
