//! # loan-config
//!
//! Layered configuration loading for loantrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LOANTRACK_*` prefix, `__` as separator)
//! 2. An explicit file passed on the command line (`--config`)
//! 3. Project-level `loantrack.toml` in the working directory
//! 4. User-level `~/.config/loantrack/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOANTRACK_MAIL__HOST` -> `mail.host`, `LOANTRACK_UPLOADS__DIR` -> `uploads.dir`, etc.
//!
//! ```no_run
//! use loan_config::LoanConfig;
//!
//! let config = LoanConfig::load_with_dotenv(None).expect("config");
//! if !config.mail.is_configured() {
//!     println!("status emails will only be logged");
//! }
//! ```

mod error;
mod mail;
mod server;
mod storage;
mod uploads;

pub use error::ConfigError;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use uploads::{CollisionPolicy, UploadConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "loantrack.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LOANTRACK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoanConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

impl LoanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, merging `extra` above the project file when given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` into the process environment, then load configuration.
    ///
    /// Variables already set in the environment win over `.env` entries. Other
    /// `.env` keys (such as `LOANTRACK_LOG`) stay visible to later readers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the figment provider chain without an explicit file.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later, at bind or upload time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".into(),
                reason: format!("'{}' is not a socket address", self.server.bind),
            });
        }
        if self.storage.database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.database_path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.uploads.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "uploads.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.uploads.allowed_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "uploads.allowed_extensions".into(),
                reason: "at least one extension is required".into(),
            });
        }
        Ok(())
    }

    /// Copy safe to print: secrets are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            mail: self.mail.redacted(),
            ..self.clone()
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("loantrack").join("config.toml"))
    }
}

/// Warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn collect_unconfigured_warnings<I>(config: &LoanConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.mail.is_configured() && has_single_underscore_key(&env_keys, "LOANTRACK_MAIL") {
        warnings.push(
            "Mail config appears default while LOANTRACK_MAIL_* env vars exist. Use double underscores (example: LOANTRACK_MAIL__USERNAME)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "LOANTRACK_UPLOADS") {
        warnings.push(
            "LOANTRACK_UPLOADS_* env vars were ignored. Use double underscores (example: LOANTRACK_UPLOADS__DIR)."
                .to_string(),
        );
    }

    warnings
}

/// Any key under `section` written with a single `_` separator, which figment ignores.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('_'))
    })
}
