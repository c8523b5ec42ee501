//! The authenticated-request pipeline.
//!
//! Executes one logical request end-to-end: authenticate lazily before the
//! first attempt, attach the bearer token, and recover from token rejections
//! (401/403) with bounded, exponentially backed-off retries.
//!
//! # What this module does NOT handle:
//! - URL template construction (endpoint modules in [`crate::endpoints`])
//! - Session state storage ([`crate::SessionStore`])
//!
//! # Invariants
//! - Only 401/403 triggers re-authentication; transport failures and other
//!   HTTP errors surface immediately and never loop
//! - At most `max_retries + 1` sends of the data request per call
//! - Backoff sleeps are plain `tokio::time::sleep` suspensions; no state is
//!   held locked across them

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::SaurClient;
use crate::endpoints;
use crate::error::{ApiError, Result};
use crate::request::{backoff_delay, RequestDescriptor};

impl SaurClient {
    /// Run the authentication exchange and replace session state.
    ///
    /// Public so callers can force a login eagerly; the executor calls it
    /// lazily when token or section id is missing.
    ///
    /// # Errors
    /// Returns [`ApiError::AuthFailed`] when the exchange is rejected or its
    /// body violates the auth-response invariant; prior session state is
    /// left unchanged in that case.
    pub async fn authenticate(&mut self) -> Result<()> {
        let response = endpoints::login(
            &self.http,
            &self.base_url,
            &self.store.credentials().login,
            secrecy::ExposeSecret::expose_secret(&self.store.credentials().password),
        )
        .await?;

        self.store.apply_auth_result(&response)?;
        info!("Authentication succeeded");
        Ok(())
    }

    /// Execute one logical request, transparently handling authentication.
    ///
    /// Attempts are 0-indexed and bounded by `max_retries` inclusive, so up
    /// to `max_retries + 1` sends. A 401/403 invalidates the token,
    /// re-authenticates, and retries after `backoff_factor^attempt` backoff
    /// intervals; every other failure is terminal on the spot.
    pub(crate) async fn execute(&mut self, request: RequestDescriptor) -> Result<Value> {
        // Lazy first login: no network call happens until the first data
        // request needs it.
        if !self.store.is_ready() {
            debug!("Missing token or section id, authenticating first");
            self.authenticate().await?;
        }

        for attempt in 0..=self.max_retries {
            let url = self.render_url(&request)?;
            debug!(method = %request.method, %url, attempt, "Sending request");

            let mut builder = self.http.request(request.method.clone(), &url);
            if let Some(token) = self.store.bearer_token() {
                builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            // Transport failures (connection error, timeout) surface
            // immediately; the retry budget is reserved for token rejections.
            let response = builder.send().await?;
            let status = response.status();

            if ApiError::is_token_rejection(status.as_u16()) {
                info!(
                    status = status.as_u16(),
                    attempt, "Token rejected, re-authenticating"
                );
                self.store.invalidate_token();
                self.authenticate().await?;

                if attempt == self.max_retries {
                    return Err(ApiError::AuthExhausted {
                        attempts: self.max_retries + 1,
                    });
                }

                let delay = backoff_delay(self.backoff_factor, attempt, self.backoff_interval);
                debug!(delay_ms = delay.as_millis() as u64, "Backing off before retry");
                tokio::time::sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Could not read error response body".to_string());
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    url,
                    message,
                });
            }

            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| ApiError::MalformedResponse { url, source: e });
        }

        Err(ApiError::RetriesExhausted(self.max_retries + 1))
    }

    /// Substitute the current section id into the request's path template.
    fn render_url(&self, request: &RequestDescriptor) -> Result<String> {
        if request.needs_section_id() {
            let section_id = self.store.section_id().ok_or_else(|| {
                ApiError::AuthFailed("session has no section id".to_string())
            })?;
            Ok(format!("{}{}", self.base_url, request.render_path(section_id)))
        } else {
            Ok(format!("{}{}", self.base_url, request.path))
        }
    }
}
