//! Main SAUR API client and API methods.
//!
//! This module provides the primary [`SaurClient`] for interacting with the
//! SAUR B2C REST API. It automatically handles authentication, token
//! refresh, and bounded retries with exponential backoff.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `executor`: The authenticated-request pipeline (private module)
//! - `consumption`: Weekly/monthly consumption accessors
//! - `meters`: Last known meter reading accessor
//! - `delivery`: Delivery point accessor
//! - `contracts`: Contract tree accessor
//!
//! # Invariants
//! - All API methods go through [`executor`], which re-authenticates on
//!   401/403 up to `max_retries` times and never retries other failures
//! - Session state is owned by the client's [`SessionStore`] and mutated only
//!   by a successful authentication exchange or a token invalidation

pub mod builder;
mod executor;

// API method submodules
mod consumption;
mod contracts;
mod delivery;
mod meters;

use std::time::Duration;

use crate::session::SessionStore;

/// SAUR B2C REST API client.
///
/// One logical request is in flight at a time per instance; endpoint methods
/// take `&mut self` so the exclusive borrow guarantees a single writer on the
/// session state without locking. The underlying connection pool is owned by
/// the embedded `reqwest::Client` and released when this value is dropped.
///
/// # Creating a Client
///
/// Use [`SaurClient::builder()`]:
///
/// ```rust,ignore
/// use saur_client::SaurClient;
/// use saur_config::{Credentials, Environment};
/// use secrecy::SecretString;
///
/// let client = SaurClient::builder()
///     .environment(Environment::Production)
///     .credentials(Credentials {
///         login: "user@example.com".to_string(),
///         password: SecretString::new("secret".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SaurClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) store: SessionStore,
    pub(crate) max_retries: usize,
    pub(crate) backoff_factor: u32,
    pub(crate) backoff_interval: Duration,
}

impl SaurClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`SaurClient`].
    pub fn builder() -> builder::SaurClientBuilder {
        builder::SaurClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read-only view of the credential store and session state.
    ///
    /// Callers use this to persist the refreshed token/section id back to a
    /// credentials cache after a run.
    pub fn session(&self) -> &SessionStore {
        &self.store
    }
}
