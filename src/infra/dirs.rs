//! Platform-specific document directory
//!
//! Resolves the per-user writable document directory:
//! - Linux: `$XDG_DOCUMENTS_DIR` or `~/Documents`
//! - macOS: `~/Documents`
//! - Windows: `{FOLDERID_Documents}`
//!
//! Document names are joined onto this directory as-is. Names containing
//! separators or `..` land wherever [`Path::join`] puts them.

use std::path::{Path, PathBuf};

/// Fallback subdirectory under the home directory
const DOCUMENTS_SUBDIR: &str = "Documents";

/// Writable document directory provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDirs {
    document_dir: PathBuf,
}

impl DocumentDirs {
    /// Create a new `DocumentDirs` pointing at the platform document directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            document_dir: Self::platform_document_dir(),
        }
    }

    /// Create a `DocumentDirs` rooted at an explicit directory
    #[must_use]
    pub fn with_document_dir(document_dir: impl Into<PathBuf>) -> Self {
        Self {
            document_dir: document_dir.into(),
        }
    }

    /// Get the document directory path
    #[must_use]
    pub fn document_dir(&self) -> &Path {
        &self.document_dir
    }

    /// Resolve a document name to its full path in the document directory
    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.document_dir.join(name)
    }

    /// Get platform-specific document directory
    fn platform_document_dir() -> PathBuf {
        dirs::document_dir().unwrap_or_else(|| {
            // Fallback to home directory
            dirs::home_dir()
                .map(|h| h.join(DOCUMENTS_SUBDIR))
                .unwrap_or_else(|| PathBuf::from(".").join(DOCUMENTS_SUBDIR))
        })
    }
}

impl Default for DocumentDirs {
    fn default() -> Self {
        Self::new()
    }
}
