use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::common::error::{HarnessError, Result};

pub const DEFAULT_PORT: u16 = 10000;

/// Server configuration, loaded from TOML or assembled from command-line flags.
///
/// # Example TOML
///
/// ```toml
/// port = 10000
/// tls = true
/// cert_file = "certs/server.pem"
/// key_file = "certs/server.key"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Serve over TLS instead of plain TCP
    pub tls: bool,
    /// PEM certificate chain, required when `tls` is set
    pub cert_file: Option<PathBuf>,
    /// PEM private key, required when `tls` is set
    pub key_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            tls: false,
            cert_file: None,
            key_file: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Certificate and key paths, when TLS is enabled.
    ///
    /// Returns `Ok(None)` for a plaintext server and an error if TLS is
    /// requested without both files.
    pub fn tls_files(&self) -> Result<Option<(&PathBuf, &PathBuf)>> {
        if !self.tls {
            return Ok(None);
        }

        match (&self.cert_file, &self.key_file) {
            (Some(cert), Some(key)) => Ok(Some((cert, key))),
            (None, _) => Err(HarnessError::Config(
                "tls is enabled but no cert_file was given".to_string(),
            )),
            (_, None) => Err(HarnessError::Config(
                "tls is enabled but no key_file was given".to_string(),
            )),
        }
    }
}
