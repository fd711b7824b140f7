use crate::constants::TRUTHY;
use serde::Serialize;
use std::fmt;

/// Tri-state value of the Windows authentication setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowsAuthFlag {
    /// The setting is not configured (or blank).
    Absent,
    /// Any configured value other than the truthy token.
    Disabled,
    /// The truthy token.
    Enabled,
}

impl WindowsAuthFlag {
    /// Interprets a raw setting value.
    ///
    /// Surrounding whitespace is ignored; a blank value counts as absent and only
    /// `true` (ASCII case-insensitive) enables the flag.
    ///
    /// ```
    /// # use adauth_domain::auth::WindowsAuthFlag;
    /// assert_eq!(WindowsAuthFlag::from_setting(None), WindowsAuthFlag::Absent);
    /// assert_eq!(WindowsAuthFlag::from_setting(Some(" TRUE ")), WindowsAuthFlag::Enabled);
    /// assert_eq!(WindowsAuthFlag::from_setting(Some("yes")), WindowsAuthFlag::Disabled);
    /// ```
    #[must_use]
    pub fn from_setting(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Absent,
            Some(value) if value.eq_ignore_ascii_case(TRUTHY) => Self::Enabled,
            Some(_) => Self::Disabled,
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for WindowsAuthFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Disabled => "false",
            Self::Enabled => "true",
        })
    }
}
