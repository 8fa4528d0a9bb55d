//! Store configuration
//!
//! Optional TOML file that pins the document directory, attaches a bundle
//! directory and selects JSON output formatting. Every setting has a
//! default, so a missing file is not an error.
//!
//! ```toml
//! document_dir = "/home/me/Documents"
//! bundle_dir = "/opt/app/resources"
//!
//! [json]
//! pretty = true
//! ```

use crate::core::bundle::Bundle;
use crate::infra::dirs::DocumentDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to write the config file or create its directory
    #[error("Failed to write config file '{path}': {error}")]
    WriteError { path: String, error: String },

    /// Failed to parse or render the config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Configuration for a [`DocumentStore`](crate::core::store::DocumentStore)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Writable document directory; platform default when unset
    pub document_dir: Option<PathBuf>,

    /// Read-only resource directory
    pub bundle_dir: Option<PathBuf>,

    /// JSON encoding settings
    #[serde(default)]
    pub json: JsonConfig,
}

/// JSON encoding settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Pretty-print saved JSON documents
    pub pretty: Option<bool>,
}

impl StoreConfig {
    /// Load configuration from a specific path
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective document directory provider
    #[must_use]
    pub fn dirs(&self) -> DocumentDirs {
        self.document_dir
            .as_ref()
            .map_or_else(DocumentDirs::new, |dir| DocumentDirs::with_document_dir(dir.clone()))
    }

    /// Get the configured bundle, if any
    #[must_use]
    pub fn bundle(&self) -> Option<Bundle> {
        self.bundle_dir.clone().map(Bundle::directory)
    }

    /// Get the effective JSON pretty-print setting
    #[must_use]
    pub fn pretty_json(&self) -> bool {
        self.json
            .pretty
            .unwrap_or(crate::config::defaults::PRETTY_JSON)
    }
}
