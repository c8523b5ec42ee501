//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the
//!   credentials cache file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration
//!   merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Persisting refreshed tokens back to disk (see `cache.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over credentials file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::cache::CredentialsFile;
use crate::types::{Config, ConnectionConfig, Credentials, Environment};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Login and password are required (set SAUR_LOGIN/SAUR_PASSWORD or use a credentials file)")]
    MissingCredentials,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loader that builds config from environment variables and the
/// credentials file.
pub struct ConfigLoader {
    base_url: Option<String>,
    environment: Option<Environment>,
    login: Option<String>,
    password: Option<SecretString>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            base_url: None,
            environment: None,
            login: None,
            password: None,
            timeout: None,
            max_retries: None,
        }
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
            && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
        {
            dotenvy::dotenv().ok();
        }
        Ok(self)
    }

    /// Read an environment variable, returning None if unset, empty, or
    /// whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over credentials file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = Self::env_var_or_none("SAUR_BASE_URL") {
            self.base_url = Some(url);
        }
        if let Some(login) = Self::env_var_or_none("SAUR_LOGIN") {
            self.login = Some(login);
        }
        if let Some(password) = Self::env_var_or_none("SAUR_PASSWORD") {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(dev) = Self::env_var_or_none("SAUR_DEV_MODE") {
            let dev: bool = dev.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "SAUR_DEV_MODE".to_string(),
                message: "must be true or false".to_string(),
            })?;
            self.environment = Some(if dev {
                Environment::Development
            } else {
                Environment::Production
            });
        }
        if let Some(timeout) = Self::env_var_or_none("SAUR_TIMEOUT") {
            let secs: u64 = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "SAUR_TIMEOUT".to_string(),
                    message: "must be a number".to_string(),
                })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(retries) = Self::env_var_or_none("SAUR_MAX_RETRIES") {
            self.max_retries =
                Some(
                    retries
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            var: "SAUR_MAX_RETRIES".to_string(),
                            message: "must be a number".to_string(),
                        })?,
                );
        }
        Ok(self)
    }

    /// Take login and password from a loaded credentials file, without
    /// overriding values already set (env vars win).
    pub fn from_credentials_file(mut self, file: &CredentialsFile) -> Self {
        if self.login.is_none() {
            self.login = Some(file.login.clone());
        }
        if self.password.is_none() {
            self.password = Some(SecretString::new(file.password.clone().into()));
        }
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the deployment target.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the login.
    pub fn with_login(mut self, login: String) -> Self {
        self.login = Some(login);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingCredentials`] if no login/password pair
    /// was provided, and [`ConfigError::InvalidBaseUrl`] if an explicit base
    /// URL does not parse.
    pub fn build(self) -> Result<Config, ConfigError> {
        let (Some(login), Some(password)) = (self.login, self.password) else {
            return Err(ConfigError::MissingCredentials);
        };

        if let Some(ref url) = self.base_url {
            url::Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
                url: url.clone(),
                message: e.to_string(),
            })?;
        }

        let defaults = ConnectionConfig::default();
        Ok(Config {
            connection: ConnectionConfig {
                environment: self.environment.unwrap_or_default(),
                base_url: self.base_url,
                timeout: self.timeout.unwrap_or(defaults.timeout),
                max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            },
            credentials: Credentials {
                login,
                password,
            },
        })
    }
}
