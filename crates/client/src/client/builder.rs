//! Client builder for constructing [`SaurClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials, base URL)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, the static
//!   headers the vendor's bot mitigation requires)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SaurClient`] methods)
//! - Session state mutation (handled by [`crate::SessionStore`])
//! - Retry logic (handled by the executor)
//!
//! # Invariants
//! - `credentials` is required; `base_url` defaults to the environment's
//! - The base URL is always normalized to have no trailing slashes
//! - The pooled `reqwest::Client` is created exactly once, at `build()`

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};

use crate::client::SaurClient;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use saur_config::{
    constants::{
        DEFAULT_BACKOFF_FACTOR, DEFAULT_BACKOFF_INTERVAL_SECS, DEFAULT_MAX_REDIRECTS,
        DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, PORTAL_ORIGIN,
    },
    Config, Credentials, Environment,
};

/// Builder for creating a new [`SaurClient`].
///
/// All configuration options have sensible defaults except `credentials`,
/// which is required. The base URL defaults to the production environment's.
pub struct SaurClientBuilder {
    base_url: Option<String>,
    environment: Environment,
    credentials: Option<Credentials>,
    cached_token: Option<String>,
    cached_section_id: Option<String>,
    timeout: Duration,
    max_retries: usize,
    backoff_factor: u32,
    backoff_interval: Duration,
}

impl Default for SaurClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            environment: Environment::Production,
            credentials: None,
            cached_token: None,
            cached_section_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            backoff_interval: Duration::from_secs(DEFAULT_BACKOFF_INTERVAL_SECS),
        }
    }
}

impl SaurClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-populated from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.connection.base_url.clone(),
            environment: config.connection.environment,
            credentials: Some(config.credentials.clone()),
            timeout: config.connection.timeout,
            max_retries: config.connection.max_retries,
            ..Self::default()
        }
    }

    /// Set an explicit base URL, overriding the environment's.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Select the deployment target (production or local development).
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the login credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Pre-seed session state from a previously cached token/section id,
    /// skipping one authentication round trip on the first request.
    pub fn cached_session(mut self, token: Option<String>, section_id: Option<String>) -> Self {
        self.cached_token = token;
        self.cached_section_id = section_id;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds. Timing out is treated as a transport failure,
    /// not a token rejection.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of re-authentication retries.
    ///
    /// Default is 3, i.e. up to 4 total sends of a data request.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the exponential backoff factor.
    ///
    /// Default is 2: delays of 1, 2, 4, ... backoff intervals.
    pub fn backoff_factor(mut self, factor: u32) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Set the backoff interval (one "time unit" of the schedule).
    ///
    /// Default is 1 second. Tests shrink this to milliseconds.
    pub fn backoff_interval(mut self, interval: Duration) -> Self {
        self.backoff_interval = interval;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// The static headers sent on every request. The browser-like user agent
    /// and portal Referer/Origin are required by the vendor's bot mitigation.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(saur_config::constants::USER_AGENT),
        );
        headers.insert(REFERER, HeaderValue::from_static(PORTAL_ORIGIN));
        headers.insert(ORIGIN, HeaderValue::from_static(PORTAL_ORIGIN));
        headers
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`ApiError::AuthFailed`] when credentials are missing and
    /// [`ApiError::InvalidUrl`] when the base URL does not parse.
    pub fn build(self) -> Result<SaurClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| ApiError::AuthFailed("credentials are required".to_string()))?;

        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| self.environment.base_url().to_string()),
        );
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(Self::default_headers())
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let store = SessionStore::new(credentials)
            .with_cached_session(self.cached_token, self.cached_section_id);

        Ok(SaurClient {
            http,
            base_url,
            store,
            max_retries: self.max_retries,
            backoff_factor: self.backoff_factor,
            backoff_interval: self.backoff_interval,
        })
    }
}
