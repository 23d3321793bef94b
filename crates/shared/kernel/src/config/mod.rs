use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tally_domain::config::TallyConfig;
use tracing::{debug, info};

/// Prefix of environment overrides (`TALLY__LENDING__ANNUAL_RATE_PERCENT=6`).
pub const ENV_PREFIX: &str = "TALLY";
const ENV_SEPARATOR: &str = "__";
/// Base name looked up in the working directory when no file is given (`tally.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "tally";

/// Custom error type for config loading.
#[tally_derive::tally_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// 1. **Base File**: an explicit file is required to exist; without one, `tally.*`
///    in the working directory is used if present.
/// 2. **Environment Overrides**: variables prefixed with `TALLY__`, nested keys
///    separated by `__` (`TALLY__LOGGING__LEVEL=debug` maps to `logging.level`).
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` as the base file. The file must exist.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with an explicit variable set.
    #[must_use]
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds and deserializes the configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or malformed,
    /// or if the merged values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.file {
            Some(path) => {
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("No config file given, probing '{DEFAULT_CONFIG_NAME}'");
                File::with_name(DEFAULT_CONFIG_NAME).required(false)
            },
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env);

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads the workspace [`TallyConfig`] from an optional file plus the process environment.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<TallyConfig, ConfigError> {
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.file(path).load(),
        None => loader.load(),
    }
}
