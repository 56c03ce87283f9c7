//! # Server Binary Entry Point
//!
//! Thin wrapper that configures and runs the error-test gRPC server.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin server -- --port 10000
//! cargo run --bin server -- --tls --cert-file certs/server.pem --key-file certs/server.key
//! cargo run --bin server -- --config config/server.toml
//! ```
//!
//! Flags given on the command line override values from the configuration file.

use clap::Parser;
use std::path::PathBuf;

use grpc_errors::common::config::load_config;
use grpc_errors::common::logging::init_logger;
use grpc_errors::server::{ErrorTestServer, ServerConfig};

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a server configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve over TLS instead of plain TCP
    #[arg(long)]
    tls: bool,

    /// The TLS cert file
    #[arg(long, alias = "cert_file")]
    cert_file: Option<PathBuf>,

    /// The TLS key file
    #[arg(long, alias = "key_file")]
    key_file: Option<PathBuf>,

    /// The server port [default: 10000]
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config: ServerConfig = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        if self.tls {
            config.tls = true;
        }
        if let Some(cert_file) = self.cert_file {
            config.cert_file = Some(cert_file);
        }
        if let Some(key_file) = self.key_file {
            config.key_file = Some(key_file);
        }
        if let Some(port) = self.port {
            config.port = port;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logger();

    // Parse command-line arguments
    let config = Args::parse().into_config()?;

    // Serve until killed; bind and credential errors end the process
    ErrorTestServer::new(config).run().await?;

    Ok(())
}
