//! Credential and session state management.
//!
//! [`SessionStore`] is the single source of truth for the login secrets and
//! the two pieces of session state every authenticated call depends on: the
//! bearer token and the section id. Session state is mutated only by a
//! successful authentication exchange ([`SessionStore::apply_auth_result`])
//! or by [`SessionStore::invalidate_token`] when the server rejects the
//! current token.

use saur_config::Credentials;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::AuthResponse;

/// Login secrets plus the mutable session state of one client instance.
#[derive(Debug)]
pub struct SessionStore {
    credentials: Credentials,
    access_token: Option<SecretString>,
    section_id: Option<String>,
}

impl SessionStore {
    /// Create a store with no session state; the first data request will
    /// trigger an authentication exchange.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            access_token: None,
            section_id: None,
        }
    }

    /// Pre-seed session state from a previously cached token/section to skip
    /// one authentication round trip. Empty strings are treated as absent.
    pub fn with_cached_session(
        mut self,
        token: Option<String>,
        section_id: Option<String>,
    ) -> Self {
        self.access_token = token
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::new(t.into()));
        self.section_id = section_id.filter(|s| !s.is_empty());
        self
    }

    /// The login credentials (immutable for the lifetime of the client).
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The current bearer token, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret())
    }

    /// The current section id, if any.
    pub fn section_id(&self) -> Option<&str> {
        self.section_id.as_deref()
    }

    /// Whether both token and section id are present, i.e. a data request
    /// can go out without authenticating first.
    pub fn is_ready(&self) -> bool {
        self.access_token.is_some() && self.section_id.is_some()
    }

    /// Validate and apply the result of an authentication exchange.
    ///
    /// Both `token.access_token` and `defaultSectionId` must be present and
    /// non-empty; otherwise the response is rejected and prior state is left
    /// untouched. An HTTP 200 with a malformed body is an application-level
    /// failure, not a transport failure.
    ///
    /// # Errors
    /// Returns [`ApiError::AuthFailed`] when the invariant does not hold.
    pub fn apply_auth_result(&mut self, response: &AuthResponse) -> Result<()> {
        let token = match response.access_token() {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(ApiError::AuthFailed(
                    "auth response is missing token.access_token".to_string(),
                ));
            }
        };
        let section_id = match response.section_id() {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Err(ApiError::AuthFailed(
                    "auth response is missing defaultSectionId".to_string(),
                ));
            }
        };

        self.access_token = Some(SecretString::new(token.to_string().into()));
        self.section_id = Some(section_id.to_string());
        debug!(section_id, "Session state replaced after authentication");
        Ok(())
    }

    /// Clear the bearer token, forcing the next attempt to re-authenticate.
    ///
    /// The section id is retained: it is account identity, not session
    /// identity.
    pub fn invalidate_token(&mut self) {
        self.access_token = None;
    }
}
