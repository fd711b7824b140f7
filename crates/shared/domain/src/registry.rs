//! Registration bundle handed to the host container.
//! The host walks [`ExtensionBundle::extensions`] in order and registers each descriptor.

use crate::extension::{ExtensionDescriptor, ExtensionSet};
use serde::Serialize;

/// A present (possibly empty) list of extensions ready for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionBundle {
    pub set: ExtensionSet,
    pub extensions: Vec<ExtensionDescriptor>,
}

impl ExtensionBundle {
    /// Packages the descriptors of `set`, keeping their order.
    #[must_use]
    pub fn new(set: ExtensionSet) -> Self {
        Self { set, extensions: set.descriptors().to_vec() }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.extensions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionDescriptor> {
        self.extensions.iter()
    }
}

impl From<ExtensionSet> for ExtensionBundle {
    fn from(set: ExtensionSet) -> Self {
        Self::new(set)
    }
}
