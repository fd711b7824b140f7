//! Extension descriptors and the sets they are activated in.
//!
//! Descriptors are opaque identity tokens: the host resolves them to concrete components,
//! this crate only names them and groups them per authentication mode.

use crate::constants::{
    SSO_AUTHENTICATION_FILTER, SSO_VALIDATION_FILTER, WINDOWS_AUTH_SETTINGS,
    WINDOWS_AUTHENTICATION_HELPER, WINDOWS_LOGOUT_FILTER, WINDOWS_SECURITY_REALM,
};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Role a component plays once the host registers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    Realm,
    Helper,
    Settings,
    Filter,
}

impl ExtensionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Realm => "realm",
            Self::Helper => "helper",
            Self::Settings => "settings",
            Self::Filter => "filter",
        }
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Identity of one pluggable component.
///
/// Equality and hashing only look at the id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExtensionDescriptor {
    id: &'static str,
    kind: ExtensionKind,
}

impl ExtensionDescriptor {
    #[must_use]
    pub const fn new(id: &'static str, kind: ExtensionKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> ExtensionKind {
        self.kind
    }
}

impl PartialEq for ExtensionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExtensionDescriptor {}

impl Hash for ExtensionDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ExtensionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

pub const WINDOWS_SECURITY_REALM_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(WINDOWS_SECURITY_REALM, ExtensionKind::Realm);
pub const WINDOWS_AUTHENTICATION_HELPER_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(WINDOWS_AUTHENTICATION_HELPER, ExtensionKind::Helper);
pub const WINDOWS_AUTH_SETTINGS_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(WINDOWS_AUTH_SETTINGS, ExtensionKind::Settings);
pub const SSO_AUTHENTICATION_FILTER_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(SSO_AUTHENTICATION_FILTER, ExtensionKind::Filter);
pub const SSO_VALIDATION_FILTER_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(SSO_VALIDATION_FILTER, ExtensionKind::Filter);
pub const WINDOWS_LOGOUT_FILTER_EXT: ExtensionDescriptor =
    ExtensionDescriptor::new(WINDOWS_LOGOUT_FILTER, ExtensionKind::Filter);

/// Registration order of the Windows-integrated authentication components.
pub const WINDOWS_EXTENSIONS: [ExtensionDescriptor; 6] = [
    WINDOWS_SECURITY_REALM_EXT,
    WINDOWS_AUTHENTICATION_HELPER_EXT,
    WINDOWS_AUTH_SETTINGS_EXT,
    SSO_AUTHENTICATION_FILTER_EXT,
    SSO_VALIDATION_FILTER_EXT,
    WINDOWS_LOGOUT_FILTER_EXT,
];

/// The group of extensions activated together for one authentication mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionSet {
    /// Nothing to register.
    Empty,
    /// Windows-integrated authentication (realm, helper, settings, SSO and logout filters).
    Windows,
}

impl ExtensionSet {
    /// Ordered descriptors of this set.
    #[must_use]
    pub const fn descriptors(self) -> &'static [ExtensionDescriptor] {
        match self {
            Self::Empty => &[],
            Self::Windows => &WINDOWS_EXTENSIONS,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.descriptors().len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.descriptors().is_empty()
    }

    #[must_use]
    pub fn contains(self, descriptor: &ExtensionDescriptor) -> bool {
        self.descriptors().contains(descriptor)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
