//! Server configuration surface.
//!
//! Gantry consumes exactly one configuration decision: which routing
//! backend to construct. [`ServerConfig`] carries that field (plus the
//! bind address a host server typically wants next to it) and can be
//! parsed from TOML. Anything beyond parsing — layering, watching,
//! semantic validation — is the host application's concern.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read the configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Server configuration.
///
/// The `router_type` field selects the routing backend; see
/// [`new_router`](crate::new_router) for the recognized values. Every
/// value is accepted — unrecognized backends fall back to the default, so
/// configuration can never fail backend selection.
///
/// # Example
///
/// ```rust
/// use gantry_router::ServerConfig;
///
/// let config: ServerConfig = toml::from_str(r#"
///     http_addr = "127.0.0.1:3000"
///     router_type = "fast"
/// "#).unwrap();
///
/// assert_eq!(config.router_type, "fast");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the host server binds to.
    #[serde(default = "default_http_addr")]
    pub http_addr: String,

    /// Routing backend to construct at startup. Empty selects the default.
    #[serde(default)]
    pub router_type: String,
}

fn default_http_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            router_type: String::new(),
        }
    }
}

impl ServerConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] when the document is malformed
    /// or contains unknown fields.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] when the path does not exist,
    /// [`ConfigError::ReadError`] on I/O failure, and
    /// [`ConfigError::TomlError`] when the contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
