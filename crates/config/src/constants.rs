//! Centralized constants for the saur-client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Deployment Targets
// =============================================================================

/// Production base URL for the SAUR B2C API.
pub const PROD_BASE_URL: &str = "https://apib2c.azure.saurclient.fr";

/// Development base URL (local mock or proxy).
pub const DEV_BASE_URL: &str = "http://localhost:8080";

// =============================================================================
// Connection & Retry Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of re-authentication retries after a token
/// rejection. The executor performs up to `max_retries + 1` sends.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Default exponential backoff factor between retry attempts.
/// Delay before attempt `i + 1` is `factor^i` backoff intervals.
pub const DEFAULT_BACKOFF_FACTOR: u32 = 2;

/// Default backoff interval in seconds (one "time unit" of the schedule).
pub const DEFAULT_BACKOFF_INTERVAL_SECS: u64 = 1;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Authentication Exchange
// =============================================================================

/// OAuth-style client id the vendor's web frontend uses.
pub const AUTH_CLIENT_ID: &str = "frontjs-client";

/// Grant type sent in the authentication payload.
pub const AUTH_GRANT_TYPE: &str = "password";

/// Scope sent in the authentication payload.
pub const AUTH_SCOPE: &str = "api-scope";

// =============================================================================
// Static Request Headers
// =============================================================================

/// Browser-like user agent. The vendor's bot mitigation rejects requests
/// without one.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; CrOS x86_64 14541.0.0) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36";

/// Web portal origin sent as `Referer` and `Origin` on every request.
/// Required by the vendor's bot mitigation, not semantically meaningful.
pub const PORTAL_ORIGIN: &str = "https://mon.saurclient.fr";

// =============================================================================
// Credentials Cache
// =============================================================================

/// File name of the on-disk credentials cache.
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";
