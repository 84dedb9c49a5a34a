//! Server configuration.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file, then command-line flags (each of which can also come from a
//! `MERGINGTON_*` environment variable).
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! static_dir = "/srv/mergington/static"
//! catalog_file = "/srv/mergington/activities.toml"
//! ```

use std::path::{Path, PathBuf};

use mergington_core::{Catalog, seed};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default static asset directory, relative to the working directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the API server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory served under `/static`. Relative paths resolve against the
    /// working directory.
    pub static_dir: PathBuf,
    /// Seed file replacing the built-in catalog.
    pub catalog_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog_file: None,
        }
    }
}

/// Command-line overrides, flattened into the binary's argument parser.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Configuration file path
    #[arg(short, long, env = "MERGINGTON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "MERGINGTON_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "MERGINGTON_PORT")]
    pub port: Option<u16>,

    /// Directory of static assets served under /static [default: ./static,
    /// relative to the working directory]
    #[arg(long, env = "MERGINGTON_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// TOML seed file replacing the built-in activity list
    #[arg(long, env = "MERGINGTON_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl ServerConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Load the file named by `args` (if any) and apply the remaining flags.
    pub fn resolve(args: &ConfigArgs) -> Result<Self> {
        let mut config = Self::load(args.config.as_deref())?;
        config.apply(args);
        Ok(config)
    }

    /// Overwrite fields with any flags that were given.
    pub fn apply(&mut self, args: &ConfigArgs) {
        if let Some(host) = &args.host {
            self.host.clone_from(host);
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(dir) = &args.static_dir {
            self.static_dir.clone_from(dir);
        }
        if let Some(file) = &args.catalog {
            self.catalog_file = Some(file.clone());
        }
    }

    /// Build the catalog this configuration describes.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog seed file");
                Ok(Catalog::new(seed::from_path(path)?)?)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}
