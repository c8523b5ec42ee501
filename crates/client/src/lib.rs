//! SAUR B2C REST API client.
//!
//! This crate provides a credentialed client for the SAUR water-utility
//! vendor API. It authenticates with a login/password pair, obtains a bearer
//! token and an account-scoped section id, and issues read-only GET calls
//! (weekly/monthly consumption, last known meter reading, delivery points,
//! contracts) with transparent token refresh and bounded, backed-off retries
//! on token rejection.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod request;
mod serde_helpers;
mod session;

pub use client::builder::SaurClientBuilder;
pub use client::SaurClient;
pub use error::{ApiError, Result};
pub use models::{AuthResponse, TokenEnvelope};
pub use request::RequestDescriptor;
pub use session::SessionStore;
