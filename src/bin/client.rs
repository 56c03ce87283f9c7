//! # Client Binary Entry Point
//!
//! Connects to the error-test server, issues a single call and logs the outcome.
//!
//! ## Usage
//!
//! ```bash
//! # Unary call with Mode=1, Param=0 (fails immediately with the simulated error)
//! cargo run --bin client
//!
//! # Succeed after two seconds
//! cargo run --bin client -- --mode 2 --param 2
//!
//! # Other call shapes
//! cargo run --bin client -- --call bidi --mode 2 --param 1
//! ```
//!
//! The process exits with a non-zero status when the dial or the call fails.

use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;

use grpc_errors::client::{ClientConfig, ErrorTestClient};
use grpc_errors::common::config::load_config;
use grpc_errors::common::logging::init_logger;
use grpc_errors::common::{Data, Result};

/// Which method of the service to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Call {
    /// SimpleRPC
    Unary,
    /// StreamResponse
    ServerStream,
    /// StreamRequest
    ClientStream,
    /// StreamRequestResponse
    Bidi,
}

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a client configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Connection uses TLS if set, else plain TCP
    #[arg(long)]
    tls: bool,

    /// The file containing the CA root cert file
    #[arg(long, alias = "ca_file")]
    ca_file: Option<PathBuf>,

    /// The server address in the format of host:port [default: localhost:10000]
    #[arg(long, alias = "server_addr")]
    server_addr: Option<String>,

    /// The server name used to verify the hostname returned by the TLS handshake
    #[arg(long, alias = "server_host_override")]
    server_host_override: Option<String>,

    /// Per-call timeout in seconds [default: 10]
    #[arg(long, alias = "timeout_secs")]
    timeout_secs: Option<u64>,

    /// Method to call
    #[arg(long, value_enum, default_value_t = Call::Unary)]
    call: Call,

    /// Simulated behavior: 1 fails, 2 succeeds, anything else is unimplemented
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    mode: i64,

    /// Delay in seconds before the behavior takes effect
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    param: i64,
}

impl Args {
    fn to_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config: ClientConfig = match &self.config {
            Some(path) => load_config(path)?,
            None => ClientConfig::default(),
        };

        if self.tls {
            config.tls = true;
        }
        if let Some(ca_file) = &self.ca_file {
            config.ca_file = Some(ca_file.clone());
        }
        if let Some(server_addr) = &self.server_addr {
            config.server_addr = server_addr.clone();
        }
        if let Some(host) = &self.server_host_override {
            config.server_host_override = host.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        Ok(config)
    }
}

/// Issue one call of the selected shape and log what came back.
async fn issue(client: &mut ErrorTestClient, call: Call, data: Data) -> Result<()> {
    match call {
        Call::Unary => {
            let reply = client.simple_rpc(data).await?;
            info!("✅ SimpleRPC returned {}", reply);
        }
        Call::ServerStream => {
            let replies = client.stream_response(data).await?;
            info!(
                "✅ StreamResponse returned {} message(s): {:?}",
                replies.len(),
                replies
            );
        }
        Call::ClientStream => match client.stream_request(vec![data]).await? {
            Some(reply) => info!("✅ StreamRequest returned {}", reply),
            None => info!("✅ StreamRequest completed without a reply"),
        },
        Call::Bidi => {
            let replies = client.stream_request_response(vec![data]).await?;
            info!(
                "✅ StreamRequestResponse returned {} message(s): {:?}",
                replies.len(),
                replies
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logger();

    // Parse command-line arguments
    let args = Args::parse();
    let config = args.to_config()?;

    let mut client = match ErrorTestClient::connect(&config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Failed to dial {}: {}", config.server_addr, e);
            return Err(e.into());
        }
    };

    let data = Data::new(args.mode, args.param);

    if let Err(e) = issue(&mut client, args.call, data).await {
        error!("❌ {:?} for data {} failed: {}", args.call, data, e);
        return Err(e.into());
    }

    Ok(())
}
