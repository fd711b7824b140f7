/// Setting that forces Windows-integrated authentication on or off.
pub const LDAP_WINDOWS_AUTH: &str = "ldap.windows.auth";

/// Token recognized as "enabled" (ASCII case-insensitive).
pub const TRUTHY: &str = "true";

// Extension descriptor ids
pub const WINDOWS_SECURITY_REALM: &str = "windows.security-realm";
pub const WINDOWS_AUTHENTICATION_HELPER: &str = "windows.authentication-helper";
pub const WINDOWS_AUTH_SETTINGS: &str = "windows.auth-settings";
pub const SSO_AUTHENTICATION_FILTER: &str = "windows.sso-authentication-filter";
pub const SSO_VALIDATION_FILTER: &str = "windows.sso-validation-filter";
pub const WINDOWS_LOGOUT_FILTER: &str = "windows.logout-filter";
