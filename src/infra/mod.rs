//! Infrastructure layer
//!
//! Handles all filesystem I/O and platform directory lookup.
//! This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
