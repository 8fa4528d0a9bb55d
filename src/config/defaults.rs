//! Default configuration values

/// Pretty-print JSON documents unless configured otherwise
pub const PRETTY_JSON: bool = false;

/// Log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";
