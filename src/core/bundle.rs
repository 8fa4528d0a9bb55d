//! Read-only application resource bundle
//!
//! A bundle is the set of resources an application ships with. It is either
//! compiled into the binary with [`include_dir::include_dir!`] or a
//! directory installed next to the application. Either way it is never
//! written to at runtime, so only read operations are offered.

use std::path::PathBuf;

use include_dir::Dir;
use serde::de::DeserializeOwned;

use crate::core::codec;
use crate::core::resolver::Resource;
use crate::error::DocumentError;
use crate::infra::filesystem;

/// Read-only resource bundle
#[derive(Debug, Clone)]
pub enum Bundle {
    /// Resources embedded at build time
    Embedded(&'static Dir<'static>),
    /// Resources installed in a directory
    Directory(PathBuf),
}

impl Bundle {
    /// Create a bundle over resources embedded with `include_dir!`
    ///
    /// ```ignore
    /// static RESOURCES: include_dir::Dir<'static> =
    ///     include_dir::include_dir!("$CARGO_MANIFEST_DIR/resources");
    /// let bundle = docstore::Bundle::embedded(&RESOURCES);
    /// ```
    #[must_use]
    pub fn embedded(dir: &'static Dir<'static>) -> Self {
        Self::Embedded(dir)
    }

    /// Create a bundle over a resource directory
    #[must_use]
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::Directory(root.into())
    }

    /// Resolve a resource name
    ///
    /// Fails with [`DocumentError::ResourceNotFound`] if the bundle does not
    /// contain `name`.
    pub fn resolve(&self, name: &str) -> Result<Resource, DocumentError> {
        let not_found = || DocumentError::ResourceNotFound {
            name: name.to_string(),
        };

        match self {
            Self::Embedded(dir) => {
                let dir: &'static Dir<'static> = *dir;
                let file = dir.get_file(name).ok_or_else(not_found)?;
                Ok(Resource::Embedded {
                    path: file.path().to_path_buf(),
                    contents: file.contents(),
                })
            }
            Self::Directory(root) => {
                let path = root.join(name);
                if filesystem::exists(&path) {
                    Ok(Resource::File(path))
                } else {
                    Err(not_found())
                }
            }
        }
    }

    /// Check whether the bundle contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Read the raw bytes of a bundled resource
    pub fn read(&self, name: &str) -> Result<Vec<u8>, DocumentError> {
        self.resolve(name)?.read()
    }

    /// Decode a bundled JSON resource into `T`
    pub fn load_typed<T: DeserializeOwned>(&self, name: &str) -> Result<T, DocumentError> {
        codec::load_typed(&self.resolve(name)?)
    }
}
