//! Request descriptors and the retry backoff schedule.
//!
//! A [`RequestDescriptor`] is built by an endpoint module and consumed once
//! per attempt by the executor, which substitutes the current section id
//! into the path template. Keeping the template unexpanded until send time
//! means a re-authentication that refreshes the section id is picked up by
//! the very next attempt.

use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// Placeholder in path templates replaced with the current section id.
pub const SECTION_ID_PLACEHOLDER: &str = "{section_id}";

/// One logical API request: method, path template, optional JSON body.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path and query relative to the base URL; may contain
    /// [`SECTION_ID_PLACEHOLDER`].
    pub path: String,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// A GET request for the given path template.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// Whether the path template still needs a section id substituted.
    pub fn needs_section_id(&self) -> bool {
        self.path.contains(SECTION_ID_PLACEHOLDER)
    }

    /// Render the path with the given section id.
    pub fn render_path(&self, section_id: &str) -> String {
        self.path.replace(SECTION_ID_PLACEHOLDER, section_id)
    }
}

/// Delay before attempt `attempt + 1` of the executor's retry loop:
/// `factor^attempt` backoff intervals (e.g. factor 2, interval 1s:
/// 1s, 2s, 4s, 8s).
pub(crate) fn backoff_delay(factor: u32, attempt: usize, interval: Duration) -> Duration {
    interval * factor.saturating_pow(attempt as u32)
}
