//! Docstore - documents in the per-user document directory
//!
//! This library saves text and bytes to the platform document directory,
//! reads from it or from a read-only application bundle, and encodes typed
//! values as JSON through the same primitives.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`] - Name resolution, JSON codec, bundles and the store facade
//! - [`infra`] - Infrastructure layer (filesystem, platform directories)
//! - [`config`] - Default values
//! - [`error`] - Error types and handling
//! - [`logging`] - Optional tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use docstore::DocumentStore;
//!
//! let store = DocumentStore::new();
//! store.save("hello", "a.txt")?;
//! assert_eq!(store.read("a.txt")?, b"hello");
//! # Ok::<(), docstore::DocumentError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use crate::core::bundle::Bundle;
pub use crate::core::resolver::{Resource, Scope};
pub use crate::core::store::DocumentStore;
pub use crate::core::store_config::{ConfigError, JsonConfig, StoreConfig};
pub use crate::error::{DocumentError, Operation};
pub use crate::infra::dirs::DocumentDirs;
