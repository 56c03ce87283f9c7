//! # Error Types
//!
//! Errors surfaced by the library. Binaries wrap these in `anyhow` at the
//! `main` boundary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid endpoint '{address}': {source}")]
    InvalidEndpoint {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("call timed out after {0:?}")]
    Timeout(Duration),
}

impl HarnessError {
    /// The gRPC status carried by this error, if the server produced one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            HarnessError::Rpc(status) => Some(status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
