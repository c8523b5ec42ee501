//! Shared test utilities for saur-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, base URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `SAUR_LOGIN`/`SAUR_PASSWORD` are set to dummy values unless overridden.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `saur` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Dummy credentials are set to satisfy config validation.
/// - Other relevant env vars are cleared to avoid host leakage.
pub fn saur_cmd() -> Command {
    let mut cmd = Command::cargo_bin("saur").expect("saur binary should build");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SAUR_LOGIN", "user@example.com");
    cmd.env("SAUR_PASSWORD", "testpassword");

    cmd.env_remove("SAUR_BASE_URL")
        .env_remove("SAUR_DEV_MODE")
        .env_remove("SAUR_TIMEOUT")
        .env_remove("SAUR_MAX_RETRIES")
        .env_remove("SAUR_CREDENTIALS_FILE");

    cmd
}

/// Mount a successful authentication exchange on the mock server.
#[allow(dead_code)]
pub async fn mount_auth(server: &MockServer, token: &str, section_id: &str) {
    Mock::given(method("POST"))
        .and(path("/admin/v2/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": { "access_token": token },
            "defaultSectionId": section_id
        })))
        .mount(server)
        .await;
}
