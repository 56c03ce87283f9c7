use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVER_ADDR: &str = "localhost:10000";
pub const DEFAULT_SERVER_HOST_OVERRIDE: &str = "x.test.youtube.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded from TOML or assembled from command-line flags.
///
/// # Example TOML
///
/// ```toml
/// server_addr = "localhost:10000"
/// tls = true
/// ca_file = "certs/ca.pem"
/// server_host_override = "x.test.youtube.com"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Target server in `host:port` form
    pub server_addr: String,
    /// Connect over TLS instead of plain TCP
    pub tls: bool,
    /// PEM file with the CA root certificate, required when `tls` is set
    pub ca_file: Option<PathBuf>,
    /// Name checked against the server certificate during the TLS handshake
    pub server_host_override: String,
    /// Upper bound on every call, in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            tls: false,
            ca_file: None,
            server_host_override: DEFAULT_SERVER_HOST_OVERRIDE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URI of the server, with the scheme picked from the `tls` setting.
    pub fn endpoint_uri(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}", scheme, self.server_addr)
    }
}
