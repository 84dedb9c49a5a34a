//! Mergington Core — the activity catalog behind the sign-up service.
//!
//! This crate has no HTTP concerns. It owns the activity records and the
//! registration rules; `mergington-api` translates its outcomes into
//! responses.
//!
//! # Modules
//!
//! - [`activity`]: The [`Activity`] record
//! - [`catalog`]: The [`Catalog`] store and its registration operations
//! - [`seed`]: Built-in seed data and TOML seed loading
//! - [`error`]: Error types and Result alias

pub mod activity;
pub mod catalog;
pub mod error;
pub mod seed;

// Re-export key types at crate root for convenience
pub use activity::Activity;
pub use catalog::{Catalog, CatalogSnapshot};
pub use error::{Error, ErrorKind, Result};
pub use seed::SeedEntry;
