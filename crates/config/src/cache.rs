//! On-disk credentials cache.
//!
//! This module reads and writes the credentials file the demo CLI uses:
//! login and password, plus an optional previously issued bearer token and
//! section id. Pre-seeding the client with a cached token/section skips one
//! authentication round trip on startup.
//!
//! Field names accept both the historical French spellings (`mdp`,
//! `unique_id`) and the readable ones, and files are rewritten with the
//! historical spellings so existing caches stay usable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::CREDENTIALS_FILE_NAME;

/// Contents of the credentials cache file.
///
/// The password is deliberately a plain `String` here: this struct only
/// exists at the file boundary and is converted into
/// [`crate::Credentials`] (secret-wrapped) immediately after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsFile {
    /// Account login.
    pub login: String,
    /// Account password.
    #[serde(rename = "mdp", alias = "password")]
    pub password: String,
    /// Previously issued bearer token, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Previously resolved section id, if any.
    #[serde(
        rename = "unique_id",
        alias = "section_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub section_id: Option<String>,
}

/// Manages loading and saving the credentials cache on disk.
pub struct CredentialsCache {
    path: PathBuf,
}

impl CredentialsCache {
    /// Create a cache backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a cache at the platform-standard config directory.
    ///
    /// # Errors
    /// Returns an error if the project directories cannot be determined.
    pub fn default_location() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("fr", "saur-client", "saur-client")
            .context("Failed to determine project directories")?;

        Ok(Self {
            path: proj_dirs.config_dir().join(CREDENTIALS_FILE_NAME),
        })
    }

    /// Path to the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the credentials file.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not valid
    /// JSON, with the offending path in the error chain.
    pub fn load(&self) -> Result<CredentialsFile> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read credentials file {}", self.path.display()))?;
        let file: CredentialsFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse credentials file {}", self.path.display()))?;

        if file.login.trim().is_empty() || file.password.trim().is_empty() {
            anyhow::bail!(
                "Credentials file {} must contain non-empty 'login' and 'mdp'",
                self.path.display()
            );
        }

        Ok(file)
    }

    /// Save the credentials file, creating parent directories as needed.
    pub fn save(&self, file: &CredentialsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(file)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write credentials file {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "Credentials cache saved");
        Ok(())
    }
}
