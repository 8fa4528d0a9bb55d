//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;

use docstore::{DocumentDirs, DocumentStore};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

/// Test document directory context
///
/// Creates a temporary document directory and a store rooted in it.
#[allow(dead_code)]
pub struct TestDocuments {
    /// Temporary document directory
    pub dir: TempDir,
    /// Store rooted at `dir`
    pub store: DocumentStore,
}

impl TestDocuments {
    /// Create a new store over a temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = DocumentStore::with_dirs(DocumentDirs::with_document_dir(dir.path()));
        Self { dir, store }
    }

    /// Get the path to the document directory
    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write a file directly, bypassing the store
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &[u8]) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }
}

impl Default for TestDocuments {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample typed value shared by integration tests
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: String,
    pub font_size: u32,
    pub recent: Vec<String>,
}

#[allow(dead_code)]
impl Settings {
    pub fn sample() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: 14,
            recent: vec!["a.txt".to_string(), "b.txt".to_string()],
        }
    }
}
