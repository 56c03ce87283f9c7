//! # Configuration Utilities
//!
//! Shared configuration helpers used by both client and server components.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::{HarnessError, Result};

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: ServerConfig = load_config("config/server.toml")?;
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = read_file(path.as_ref())?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Read a PEM credential file (certificate, key or CA bundle).
pub fn read_pem(path: impl AsRef<Path>) -> Result<String> {
    read_file(path.as_ref())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
