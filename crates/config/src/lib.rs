//! Configuration management for the SAUR client.
//!
//! This crate provides types and loaders for managing vendor API
//! configuration from environment variables and files, plus the on-disk
//! credentials cache the demo CLI uses.

pub mod cache;
pub mod constants;
mod loader;
pub mod types;

pub use cache::{CredentialsCache, CredentialsFile};
pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig, Credentials, Environment};
