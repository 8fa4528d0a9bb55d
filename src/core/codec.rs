//! JSON codec adapter
//!
//! Composes byte I/O with `serde_json`. Encoding failures and decoding
//! failures get their own [`DocumentError`] variants, separate from the
//! I/O failures of the read or write they wrap.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::resolver::Resource;
use crate::error::DocumentError;
use crate::infra::filesystem;

/// Encode `value` as JSON bytes
///
/// `name` is only used to label the error.
pub fn encode<T: Serialize + ?Sized>(
    value: &T,
    name: &str,
    pretty: bool,
) -> Result<Vec<u8>, DocumentError> {
    let result = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };

    result.map_err(|error| DocumentError::Serialize {
        name: name.to_string(),
        error,
    })
}

/// Decode JSON bytes read from `origin` into `T`
pub fn decode<T: DeserializeOwned>(bytes: &[u8], origin: &Path) -> Result<T, DocumentError> {
    serde_json::from_slice(bytes).map_err(|error| DocumentError::Deserialize {
        path: origin.to_path_buf(),
        error,
    })
}

/// Encode `value` and write it to `path` as document `name`
///
/// Nothing is written if encoding fails.
pub fn save_typed<T: Serialize + ?Sized>(
    value: &T,
    name: &str,
    path: &Path,
    pretty: bool,
) -> Result<(), DocumentError> {
    let bytes = encode(value, name, pretty)?;
    filesystem::write_bytes(path, &bytes)
}

/// Read `resource` and decode it into `T`
pub fn load_typed<T: DeserializeOwned>(resource: &Resource) -> Result<T, DocumentError> {
    let bytes = resource.read()?;
    let value = decode(&bytes, resource.path())?;
    tracing::debug!("Decoded JSON from {}", resource.path().display());
    Ok(value)
}
