//! Response models for the authentication exchange.
//!
//! Data endpoints return opaque JSON (`serde_json::Value`); only the auth
//! response has a shape this crate depends on.

use serde::Deserialize;

use crate::serde_helpers::opt_string_from_string_or_number;

/// Decoded body of a successful `POST /admin/v2/auth`.
///
/// Both fields are optional at the serde level so that a structurally valid
/// but incomplete body still decodes; [`crate::SessionStore::apply_auth_result`]
/// enforces the presence/non-emptiness invariant and rejects such responses
/// without touching prior session state.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<TokenEnvelope>,
    #[serde(
        rename = "defaultSectionId",
        default,
        deserialize_with = "opt_string_from_string_or_number"
    )]
    pub default_section_id: Option<String>,
}

/// The `token` object nested in the auth response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEnvelope {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthResponse {
    /// The issued bearer token, if present.
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_ref().and_then(|t| t.access_token.as_deref())
    }

    /// The account's section id, if present.
    pub fn section_id(&self) -> Option<&str> {
        self.default_section_id.as_deref()
    }
}
