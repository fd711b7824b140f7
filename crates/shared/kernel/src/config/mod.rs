use crate::settings::Settings;
use config::{Config, Environment, File};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variables read as settings (`ADAUTH__LDAP__WINDOWS__AUTH`).
pub const ENV_PREFIX: &str = "ADAUTH";
/// Nesting separator used in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[adauth_derive::adauth_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Settings backed by a layered [`Config`].
///
/// Dotted keys address nested values: `ldap.windows.auth` reads `auth` from the
/// `[ldap.windows]` table of a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigSettings {
    inner: Config,
}

impl ConfigSettings {
    #[must_use]
    pub const fn new(inner: Config) -> Self {
        Self { inner }
    }
}

impl Settings for ConfigSettings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get_string(key).ok().map(|value| value.trim().to_owned())
    }
}

/// Loads plugin settings from a file, the environment and explicit overrides.
///
/// Layers, lowest priority first:
/// 1. **File**: `path`, when given. The format follows the extension (`toml`, `json`, `yaml`, `ini`).
/// 2. **Environment**: variables prefixed with `ADAUTH__`, nested with `__`
///    (`ADAUTH__LDAP__WINDOWS__AUTH=true` maps to `ldap.windows.auth`).
/// 3. **Overrides**: `(key, value)` pairs, e.g. from the command line.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or an override key is invalid.
pub fn load_settings(
    path: Option<impl AsRef<Path>>,
    overrides: &[(String, String)],
) -> Result<ConfigSettings, ConfigError> {
    let environment = Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR);
    layered(path.as_ref().map(|p| p.as_ref()), environment, overrides)
}

fn layered(
    path: Option<&Path>,
    environment: Environment,
    overrides: &[(String, String)],
) -> Result<ConfigSettings, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(environment);

    for (key, value) in overrides {
        debug!(key = %key, "Applying settings override");
        builder = builder
            .set_override(key.as_str(), value.as_str())
            .context(format!("Invalid override key '{key}'"))?;
    }

    let config = builder.build().context("Failed to build settings")?;

    Ok(ConfigSettings::new(config))
}
