//! Active Directory feature slice.
//!
//! Decides at plugin startup which authentication extensions the host registers:
//! [`selector::select`] holds the decision, [`ActiveDirectoryExtensions`] reads its inputs
//! and packages the result.
//!
//! ```
//! use adauth_activedirectory::ActiveDirectoryExtensions;
//! use adauth_kernel::settings::MapSettings;
//! use adauth_kernel::system::StaticOs;
//!
//! let bundle = ActiveDirectoryExtensions::with_system(MapSettings::new(), StaticOs::WINDOWS)
//!     .provide()
//!     .unwrap();
//! assert_eq!(bundle.len(), 6);
//! ```

mod error;
mod provider;
pub mod selector;

pub use crate::error::{ActiveDirectoryError, ActiveDirectoryErrorExt};
pub use crate::provider::ActiveDirectoryExtensions;
