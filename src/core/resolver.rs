//! Document name resolution
//!
//! Maps a [`Scope`] and a document name to a [`Resource`]: either a file on
//! disk or bytes embedded in the binary. Resolution against the bundle
//! fails up front when the name is absent, so no read is ever attempted
//! for a resource that does not exist.

use std::path::{Path, PathBuf};

use crate::core::bundle::Bundle;
use crate::error::DocumentError;
use crate::infra::dirs::DocumentDirs;
use crate::infra::filesystem;

/// Directory scope a document name is resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Per-user writable document directory
    Documents,
    /// Read-only application resource bundle
    Bundle,
}

/// A resolved document location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// File on disk
    File(PathBuf),
    /// Resource compiled into the binary
    Embedded {
        path: PathBuf,
        contents: &'static [u8],
    },
}

impl Resource {
    /// Path used to report this resource in logs and errors
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Embedded { path, .. } => path,
        }
    }

    /// Read the full contents of the resource
    pub fn read(&self) -> Result<Vec<u8>, DocumentError> {
        match self {
            Self::File(path) => filesystem::read_bytes(path),
            Self::Embedded { path, contents } => {
                tracing::debug!("Reading embedded resource {}", path.display());
                Ok(contents.to_vec())
            }
        }
    }
}

/// Resolve `name` within `scope`
///
/// # Errors
///
/// - [`DocumentError::BundleUnavailable`] when `scope` is [`Scope::Bundle`]
///   and no bundle is given
/// - [`DocumentError::ResourceNotFound`] when the bundle lacks `name`
pub fn resolve(
    dirs: &DocumentDirs,
    bundle: Option<&Bundle>,
    scope: Scope,
    name: &str,
) -> Result<Resource, DocumentError> {
    match scope {
        Scope::Documents => Ok(Resource::File(dirs.document_path(name))),
        Scope::Bundle => bundle
            .ok_or_else(|| DocumentError::BundleUnavailable {
                name: name.to_string(),
            })?
            .resolve(name),
    }
}
