//! Read-only access to string-valued plugin settings.

use fxhash::FxHashMap;

/// A key/value settings source.
///
/// Implementations return `None` for keys that are not configured.
pub trait Settings {
    /// Returns the raw value configured for `key`.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Returns `true` when `key` has a value.
    fn has_key(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }
}

impl<S: Settings + ?Sized> Settings for &S {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

impl<S: Settings + ?Sized> Settings for Box<S> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

/// In-memory settings. Values are trimmed when stored.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: FxHashMap<String, String>,
}

impl MapSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MapSettings::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        self.values.insert(key.into(), value.as_ref().trim().to_owned());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl Settings for MapSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSettings
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |settings, (k, v)| settings.with(k, v))
    }
}
