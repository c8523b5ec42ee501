//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Test clients use a millisecond backoff interval so retry tests run fast
//! - The canonical test account authenticates as `user@example.com` and is
//!   assigned section id `42`

use std::time::Duration;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::matchers::{body_partial_json, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use saur_client::SaurClient;
use saur_config::Credentials;
use secrecy::SecretString;

/// Section id the mock auth endpoint hands out.
#[allow(dead_code)]
pub const SECTION_ID: &str = "42";

/// A successful auth response body.
#[allow(dead_code)]
pub fn auth_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "token": { "access_token": token },
        "defaultSectionId": SECTION_ID,
    })
}

/// A client pointed at the mock server, with fast backoff.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> SaurClient {
    SaurClient::builder()
        .base_url(base_url.to_string())
        .credentials(Credentials {
            login: "user@example.com".to_string(),
            password: SecretString::new("testpassword".to_string().into()),
        })
        .backoff_interval(Duration::from_millis(1))
        .build()
        .unwrap()
}

/// Same as [`test_client`] but pre-seeded with a cached token/section.
#[allow(dead_code)]
pub fn test_client_with_session(base_url: &str, token: &str) -> SaurClient {
    SaurClient::builder()
        .base_url(base_url.to_string())
        .credentials(Credentials {
            login: "user@example.com".to_string(),
            password: SecretString::new("testpassword".to_string().into()),
        })
        .cached_session(Some(token.to_string()), Some(SECTION_ID.to_string()))
        .backoff_interval(Duration::from_millis(1))
        .build()
        .unwrap()
}
