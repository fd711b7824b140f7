//! Decision table between the Windows authentication setting and the host OS.
//!
//! | setting  | Windows host | other host            |
//! |----------|--------------|-----------------------|
//! | absent   | `Windows`    | `Empty`               |
//! | `false`  | `Windows`    | `Empty`               |
//! | `true`   | `Windows`    | configuration error   |

use crate::error::ActiveDirectoryError;
use adauth_domain::auth::WindowsAuthFlag;
use adauth_domain::constants::LDAP_WINDOWS_AUTH;
use adauth_domain::extension::ExtensionSet;

/// Picks the extension set for `flag` on a host classified by `is_windows`.
///
/// Windows integration activates on every Windows host. Elsewhere it stays off unless it was
/// explicitly requested, which is rejected.
///
/// # Errors
/// Returns [`ActiveDirectoryError::Configuration`] when the flag is enabled on a non-Windows host.
pub fn select(flag: WindowsAuthFlag, is_windows: bool) -> Result<ExtensionSet, ActiveDirectoryError> {
    match (flag, is_windows) {
        (_, true) => Ok(ExtensionSet::Windows),
        (WindowsAuthFlag::Absent | WindowsAuthFlag::Disabled, false) => Ok(ExtensionSet::Empty),
        (WindowsAuthFlag::Enabled, false) => Err(ActiveDirectoryError::Configuration {
            message: format!(
                "Windows authentication is enabled ({LDAP_WINDOWS_AUTH}={flag}) but the host operating system is not Windows"
            )
            .into(),
            context: None,
        }),
    }
}
