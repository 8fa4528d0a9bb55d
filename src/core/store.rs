//! Document store facade
//!
//! [`DocumentStore`] is the public surface for the writable document
//! directory, with read access to an optional attached [`Bundle`].
//! It holds no per-document state: every call resolves its path afresh and
//! releases any file handle before returning.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::bundle::Bundle;
use crate::core::codec;
use crate::core::resolver::{self, Resource, Scope};
use crate::core::store_config::StoreConfig;
use crate::error::DocumentError;
use crate::infra::dirs::DocumentDirs;
use crate::infra::filesystem;

/// Per-user document store
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dirs: DocumentDirs,
    bundle: Option<Bundle>,
    pretty_json: bool,
}

impl DocumentStore {
    /// Create a store over the platform document directory
    #[must_use]
    pub fn new() -> Self {
        Self::with_dirs(DocumentDirs::new())
    }

    /// Create a store over an explicit directory provider
    #[must_use]
    pub fn with_dirs(dirs: DocumentDirs) -> Self {
        Self {
            dirs,
            bundle: None,
            pretty_json: crate::config::defaults::PRETTY_JSON,
        }
    }

    /// Create a store from configuration
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            dirs: config.dirs(),
            bundle: config.bundle(),
            pretty_json: config.pretty_json(),
        }
    }

    /// Attach a read-only bundle
    #[must_use]
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Select pretty-printed JSON for [`save_typed`](Self::save_typed)
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// The attached bundle, if any
    #[must_use]
    pub fn bundle(&self) -> Option<&Bundle> {
        self.bundle.as_ref()
    }

    /// The writable document directory
    #[must_use]
    pub fn document_dir(&self) -> &Path {
        self.dirs.document_dir()
    }

    /// Full path a document name resolves to; performs no I/O
    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.dirs.document_path(name)
    }

    /// Save UTF-8 text as document `name`, replacing any previous contents
    pub fn save(&self, contents: &str, name: &str) -> Result<(), DocumentError> {
        self.save_bytes(contents.as_bytes(), name)
    }

    /// Save raw bytes as document `name`, replacing any previous contents
    pub fn save_bytes(&self, bytes: &[u8], name: &str) -> Result<(), DocumentError> {
        let path = self.writable_path(name)?;
        filesystem::write_bytes(&path, bytes)
    }

    /// Read the raw bytes of document `name`
    pub fn read(&self, name: &str) -> Result<Vec<u8>, DocumentError> {
        self.read_in(Scope::Documents, name)
    }

    /// Read document `name` as UTF-8 text
    pub fn read_to_string(&self, name: &str) -> Result<String, DocumentError> {
        let path = self.document_path(name);
        let bytes = filesystem::read_bytes(&path)?;
        String::from_utf8(bytes).map_err(|error| DocumentError::InvalidUtf8 { path, error })
    }

    /// Check whether document `name` exists; never fails
    pub fn exists(&self, name: &str) -> bool {
        filesystem::exists(&self.document_path(name))
    }

    /// Delete document `name`
    pub fn delete(&self, name: &str) -> Result<(), DocumentError> {
        filesystem::remove_file(&self.document_path(name))
    }

    /// Encode `value` as JSON and save it as document `name`
    pub fn save_typed<T: Serialize + ?Sized>(
        &self,
        value: &T,
        name: &str,
    ) -> Result<(), DocumentError> {
        let path = self.writable_path(name)?;
        codec::save_typed(value, name, &path, self.pretty_json)
    }

    /// Load document `name` and decode it from JSON
    pub fn load_typed<T: DeserializeOwned>(&self, name: &str) -> Result<T, DocumentError> {
        self.load_typed_in(Scope::Documents, name)
    }

    /// Read the raw bytes of `name` from the given scope
    pub fn read_in(&self, scope: Scope, name: &str) -> Result<Vec<u8>, DocumentError> {
        self.resolve(scope, name)?.read()
    }

    /// Load `name` from the given scope and decode it from JSON
    pub fn load_typed_in<T: DeserializeOwned>(
        &self,
        scope: Scope,
        name: &str,
    ) -> Result<T, DocumentError> {
        codec::load_typed(&self.resolve(scope, name)?)
    }

    /// Print the document directory path to stdout
    ///
    /// Debugging aid only.
    pub fn print_path(&self) {
        println!("Document path: {}", self.document_dir().display());
    }

    fn resolve(&self, scope: Scope, name: &str) -> Result<Resource, DocumentError> {
        resolver::resolve(&self.dirs, self.bundle.as_ref(), scope, name)
    }

    /// Resolve a writable path, creating the document directory on first use
    fn writable_path(&self, name: &str) -> Result<PathBuf, DocumentError> {
        let dir = self.document_dir();
        if !dir.is_dir() {
            tracing::debug!("Creating document directory {}", dir.display());
            filesystem::create_dir_all(dir)?;
        }
        Ok(self.document_path(name))
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::generators::*;
    use proptest::prelude::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Note {
        title: String,
        stars: u32,
        tags: Vec<bool>,
    }

    fn create_test_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::with_dirs(DocumentDirs::with_document_dir(temp_dir.path()));
        (store, temp_dir)
    }

    #[test]
    fn test_save_then_read() {
        let (store, _temp) = create_test_store();
        store.save("hello", "a.txt").unwrap();
        assert_eq!(store.read("a.txt").unwrap(), "hello".as_bytes());
        assert_eq!(store.read_to_string("a.txt").unwrap(), "hello");
    }

    #[test]
    fn test_exists_follows_save_and_delete() {
        let (store, _temp) = create_test_store();
        assert!(!store.exists("a.txt"));
        store.save("hello", "a.txt").unwrap();
        assert!(store.exists("a.txt"));
        store.delete("a.txt").unwrap();
        assert!(!store.exists("a.txt"));
    }

    #[test]
    fn test_read_to_string_rejects_invalid_utf8() {
        let (store, _temp) = create_test_store();
        store.save_bytes(&[0xff, 0xfe], "bin.dat").unwrap();
        let error = store.read_to_string("bin.dat").unwrap_err();
        assert!(matches!(error, DocumentError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_save_creates_missing_document_dir() {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("Documents");
        let store = DocumentStore::with_dirs(DocumentDirs::with_document_dir(&docs));

        store.save("x", "a.txt").unwrap();
        assert!(docs.join("a.txt").is_file());
    }

    #[test]
    fn test_pretty_json_option() {
        let (store, temp) = create_test_store();
        let store = store.with_pretty_json(true);
        let note = Note {
            title: "t".to_string(),
            stars: 1,
            tags: vec![],
        };

        store.save_typed(&note, "note.json").unwrap();
        let text = std::fs::read_to_string(temp.path().join("note.json")).unwrap();
        assert!(text.contains("\n  \"title\": \"t\""));
    }

    #[test]
    fn test_bundle_scope_reads_attached_bundle() {
        let (store, _temp) = create_test_store();
        let resources = TempDir::new().unwrap();
        std::fs::write(resources.path().join("seed.txt"), "seed").unwrap();
        let store = store.with_bundle(Bundle::directory(resources.path()));

        assert_eq!(store.read_in(Scope::Bundle, "seed.txt").unwrap(), b"seed");
        assert!(!store.exists("seed.txt"));
    }

    #[test]
    fn test_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig {
            document_dir: Some(temp_dir.path().to_path_buf()),
            bundle_dir: Some(temp_dir.path().join("resources")),
            ..StoreConfig::default()
        };

        let store = DocumentStore::from_config(&config);
        assert_eq!(store.document_dir(), temp_dir.path());
        assert!(store.bundle().is_some());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_typed_roundtrip(
            name in document_name(),
            title in ".*",
            stars in any::<u32>(),
            tags in prop::collection::vec(any::<bool>(), 0..8),
        ) {
            let (store, _temp) = create_test_store();
            let note = Note { title, stars, tags };

            store.save_typed(&note, &name).unwrap();
            let loaded: Note = store.load_typed(&name).unwrap();
            prop_assert_eq!(loaded, note);
        }

        #[test]
        fn test_bytes_roundtrip(name in document_name(), bytes in document_bytes()) {
            let (store, _temp) = create_test_store();

            store.save_bytes(&bytes, &name).unwrap();
            prop_assert!(store.exists(&name));
            prop_assert_eq!(store.read(&name).unwrap(), bytes);
        }
    }
}
