//! Error types for docstore
//!
//! Domain-specific error types using thiserror.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Reading a document
    Read,
    /// Writing (replacing) a document
    Write,
    /// Deleting a document
    Delete,
    /// Creating the document directory
    CreateDir,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::CreateDir => "create directory",
        })
    }
}

/// Document store errors
///
/// Every failure of a store operation is reported through this type.
/// Variants are grouped by where the pipeline stopped: resolving the
/// name, touching the filesystem, encoding, or decoding.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Named resource is absent from the read-only bundle
    #[error("Resource '{name}' not found in bundle")]
    ResourceNotFound { name: String },

    /// Bundle scope requested but the store has no bundle attached
    #[error("No bundle is attached to this store (requested '{name}')")]
    BundleUnavailable { name: String },

    /// Document does not exist
    #[error("Document not found: {path}")]
    NotFound { path: PathBuf },

    /// Any other filesystem failure (permissions, missing directory, full device)
    #[error("Failed to {operation} '{path}': {error}")]
    Io {
        operation: Operation,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Value cannot be represented as JSON
    #[error("Failed to serialize '{name}' as JSON: {error}")]
    Serialize {
        name: String,
        #[source]
        error: serde_json::Error,
    },

    /// Payload is not well-formed JSON or does not match the requested shape
    #[error("Failed to decode JSON from '{path}': {error}")]
    Deserialize {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    /// Payload is not valid UTF-8 text
    #[error("Document '{path}' is not valid UTF-8: {error}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        error: std::string::FromUtf8Error,
    },
}

impl DocumentError {
    /// Returns `true` for a missing document or a missing bundle resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ResourceNotFound { .. })
    }

    /// Returns `true` when the name could not be resolved to a location.
    ///
    /// No filesystem read has been attempted for these errors.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. } | Self::BundleUnavailable { .. }
        )
    }

    /// Returns `true` when bytes were read but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Deserialize { .. } | Self::InvalidUtf8 { .. })
    }
}
