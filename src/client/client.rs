//! # Client Core
//!
//! This module contains the client side of the error-test service: one
//! connection, and one method per call shape.
//!
//! ## Responsibility
//!
//! The [`ErrorTestClient`] struct does exactly this:
//! - Dial the configured server once (plain TCP or TLS)
//! - Issue a call with the caller's [`Data`]
//! - Bound the call, including reading any response stream, by the configured timeout
//! - Hand the reply or the failure back to the caller unchanged
//!
//! There is no retry and no reconnect: the point of the harness is to let the
//! caller observe the server's failures as they are.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grpc_errors::client::{ClientConfig, ErrorTestClient};
//! use grpc_errors::common::Data;
//!
//! let mut client = ErrorTestClient::connect(&ClientConfig::default()).await?;
//! let reply = client.simple_rpc(Data::succeed_after(2)).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use log::info;
use tonic::codec::Streaming;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tonic::Status;

use super::config::ClientConfig;
use crate::common::config::read_pem;
use crate::common::error::{HarnessError, Result};
use crate::common::messages::{Data, GrpcErrorsClient};

/// A connected client for the error-test service.
pub struct ErrorTestClient {
    inner: GrpcErrorsClient<Channel>,
    timeout: Duration,
}

impl ErrorTestClient {
    /// Dials the server described by `config` and waits for the connection.
    ///
    /// # Errors
    ///
    /// * The address is not a valid URI authority
    /// * TLS is enabled but the CA file is missing or unreadable
    /// * The connection cannot be established
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let mut endpoint = Endpoint::from_shared(config.endpoint_uri()).map_err(|source| {
            HarnessError::InvalidEndpoint {
                address: config.server_addr.clone(),
                source,
            }
        })?;

        if let Some(tls) = tls_config(config)? {
            endpoint = endpoint.tls_config(tls)?;
        }

        info!("🔌 Connecting to {}", config.endpoint_uri());
        let channel = endpoint.connect().await?;

        Ok(Self {
            inner: GrpcErrorsClient::new(channel),
            timeout: config.timeout(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Unary call: one request, one reply.
    pub async fn simple_rpc(&mut self, data: Data) -> Result<Data> {
        info!("Calling SimpleRPC for data {}", data);
        let inner = &mut self.inner;

        bounded(self.timeout, async move {
            Ok::<_, Status>(inner.simple_rpc(data).await?.into_inner())
        })
        .await
    }

    /// Server-streaming call: one request, every streamed reply collected.
    pub async fn stream_response(&mut self, data: Data) -> Result<Vec<Data>> {
        info!("Calling StreamResponse for data {}", data);
        let inner = &mut self.inner;

        bounded(self.timeout, async move {
            let stream = inner.stream_response(data).await?.into_inner();
            collect(stream).await
        })
        .await
    }

    /// Client-streaming call: sends `messages`, returns the reply if there is one.
    ///
    /// The server only reads the first message; an empty `messages` completes
    /// successfully with `None`.
    pub async fn stream_request(&mut self, messages: Vec<Data>) -> Result<Option<Data>> {
        info!("Calling StreamRequest with {} message(s)", messages.len());
        let inner = &mut self.inner;

        bounded(self.timeout, async move {
            let stream = inner
                .stream_request(tokio_stream::iter(messages))
                .await?
                .into_inner();
            Ok::<_, Status>(collect(stream).await?.into_iter().next())
        })
        .await
    }

    /// Bidirectional call: sends `messages`, collects every reply.
    pub async fn stream_request_response(&mut self, messages: Vec<Data>) -> Result<Vec<Data>> {
        info!(
            "Calling StreamRequestResponse with {} message(s)",
            messages.len()
        );
        let inner = &mut self.inner;

        bounded(self.timeout, async move {
            let stream = inner
                .stream_request_response(tokio_stream::iter(messages))
                .await?
                .into_inner();
            collect(stream).await
        })
        .await
    }
}

fn tls_config(config: &ClientConfig) -> Result<Option<ClientTlsConfig>> {
    if !config.tls {
        return Ok(None);
    }

    let ca_file = config.ca_file.as_ref().ok_or_else(|| {
        HarnessError::Config("tls is enabled but no ca_file was given".to_string())
    })?;
    let ca = read_pem(ca_file)?;

    Ok(Some(
        ClientTlsConfig::new()
            .ca_certificate(Certificate::from_pem(ca))
            .domain_name(config.server_host_override.clone()),
    ))
}

/// Runs `call` under `timeout`, mapping an elapsed deadline to [`HarnessError::Timeout`].
async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, Status>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(HarnessError::Timeout(timeout)),
    }
}

/// Reads a response stream to its end, surfacing the trailing status.
async fn collect(mut stream: Streaming<Data>) -> std::result::Result<Vec<Data>, Status> {
    let mut replies = Vec::new();
    while let Some(data) = stream.message().await? {
        replies.push(data);
    }
    Ok(replies)
}
