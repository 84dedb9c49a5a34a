//! # mergington-api
//!
//! HTTP API server for the Mergington High School activity sign-up page.
//!
//! This crate provides:
//! - JSON routes for listing activities and (un)registering students
//! - Mapping of catalog errors onto HTTP status codes and `detail` bodies
//! - Layered configuration (defaults, TOML file, flags/env)
//! - The static front-end under `/static`

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{ConfigArgs, ServerConfig};
pub use error::{Error, Result};
pub use server::Server;
