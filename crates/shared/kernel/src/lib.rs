//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns the two collaborators every slice reads from,
//! the settings source and the host OS classifier.
//!
//! ## Settings
//! ```rust
//! use adauth_kernel::settings::{MapSettings, Settings};
//!
//! let settings = MapSettings::new().with("ldap.windows.auth", " true ");
//! assert_eq!(settings.get_string("ldap.windows.auth").as_deref(), Some("true"));
//! assert!(!settings.has_key("ldap.url"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use adauth_kernel::config::load_settings;
//!
//! let settings = load_settings(Some("adauth.toml"), &[]).unwrap();
//! ```

pub mod config;
pub mod settings;
pub mod system;

pub use adauth_domain as domain;
