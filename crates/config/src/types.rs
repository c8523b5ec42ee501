//! Configuration types for the SAUR client.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use crate::constants::{DEV_BASE_URL, PROD_BASE_URL};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Deployment target for the vendor API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// The vendor's production API.
    #[default]
    Production,
    /// A local development endpoint.
    Development,
}

impl Environment {
    /// Base URL for this deployment target.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PROD_BASE_URL,
            Environment::Development => DEV_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

/// Login credentials for the vendor API.
///
/// Immutable for the lifetime of a client instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account login (usually an email address).
    pub login: String,
    /// Account password.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// Connection configuration for the vendor API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Deployment target (selects the base URL unless overridden).
    pub environment: Environment,
    /// Explicit base URL override (e.g. for tests against a mock server).
    pub base_url: Option<String>,
    /// Per-request timeout (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of re-authentication retries after a token rejection.
    pub max_retries: usize,
}

impl ConnectionConfig {
    /// The effective base URL: explicit override, or the environment's.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            base_url: None,
            timeout: Duration::from_secs(crate::constants::DEFAULT_TIMEOUT_SECS),
            max_retries: crate::constants::DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Login credentials.
    pub credentials: Credentials,
}
