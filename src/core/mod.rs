//! Core document store logic
//!
//! Filesystem side effects are delegated to [`crate::infra`].
//!
//! # Submodules
//!
//! - [`resolver`] - Scope and document name resolution
//! - [`bundle`] - Read-only resource bundles
//! - [`codec`] - JSON encoding on top of byte I/O
//! - [`store`] - The [`DocumentStore`](store::DocumentStore) facade
//! - [`store_config`] - TOML store configuration

pub mod bundle;
pub mod codec;
pub mod resolver;
pub mod store;
pub mod store_config;
