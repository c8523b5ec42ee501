//! The authentication exchange.
//!
//! A single POST to a fixed endpoint with a fixed-shape payload. This
//! exchange is NOT retried internally; retry responsibility for auth
//! failures encountered mid-pipeline belongs to the executor's outer loop.

use reqwest::Client;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::AuthResponse;
use saur_config::constants::{AUTH_CLIENT_ID, AUTH_GRANT_TYPE, AUTH_SCOPE};

/// Path of the authentication endpoint.
const AUTH_PATH: &str = "/admin/v2/auth";

/// Exchange login/password for a bearer token and section id.
///
/// # Errors
/// Returns [`ApiError::AuthFailed`] when the endpoint answers non-2xx or
/// with a body that is not valid JSON; transport failures propagate as
/// [`ApiError::Network`].
pub(crate) async fn login(
    http: &Client,
    base_url: &str,
    login: &str,
    password: &str,
) -> Result<AuthResponse> {
    let url = format!("{}{}", base_url, AUTH_PATH);
    debug!(login, "Authenticating with the vendor API");

    // The anti-automation flags are required by the vendor's bot mitigation.
    let payload = serde_json::json!({
        "username": login,
        "password": password,
        "client_id": AUTH_CLIENT_ID,
        "grant_type": AUTH_GRANT_TYPE,
        "scope": AUTH_SCOPE,
        "isRecaptchaV3": true,
        "captchaToken": true,
    });

    let response = http.post(&url).json(&payload).send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ApiError::AuthFailed(format!(
            "auth endpoint returned HTTP {} at {}: {}",
            status.as_u16(),
            url,
            message
        )));
    }

    let body = response.text().await?;
    serde_json::from_str::<AuthResponse>(&body)
        .map_err(|e| ApiError::AuthFailed(format!("malformed auth response from {}: {}", url, e)))
}
