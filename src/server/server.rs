//! # Server Runner
//!
//! Binds the listening socket, applies optional TLS, and serves the
//! [`ErrorTestService`](super::service::ErrorTestService) until the process is
//! stopped. All per-call behavior lives in the service; this type only owns the
//! transport setup.

use log::info;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Identity, Server, ServerTlsConfig};

use super::config::ServerConfig;
use super::service::ErrorTestService;
use crate::common::config::read_pem;
use crate::common::error::{HarnessError, Result};
use crate::common::messages::GrpcErrorsServer;

/// gRPC server for the error-test service.
pub struct ErrorTestServer {
    config: ServerConfig,
}

impl ErrorTestServer {
    /// Create a new server from its configuration.
    ///
    /// Nothing is bound or loaded until [`run`](Self::run) or
    /// [`serve_with_listener`](Self::serve_with_listener) is called.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind `0.0.0.0:<port>` and serve forever.
    ///
    /// # Errors
    /// Fails if the port cannot be bound, the credentials cannot be loaded, or
    /// the transport stops with an error.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| HarnessError::Bind { addr, source })?;

        self.serve_with_listener(listener).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve_with_listener(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr().ok();
        let mut builder = Server::builder();

        if let Some(tls) = self.tls_config()? {
            builder = builder.tls_config(tls)?;
        }

        info!(
            "🚀 Error-test server listening on {} ({})",
            local_addr.map_or_else(|| "unknown address".to_string(), |a| a.to_string()),
            if self.config.tls { "TLS" } else { "plain TCP" }
        );

        builder
            .add_service(GrpcErrorsServer::new(ErrorTestService::new()))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await?;

        Ok(())
    }

    fn tls_config(&self) -> Result<Option<ServerTlsConfig>> {
        let Some((cert_file, key_file)) = self.config.tls_files()? else {
            return Ok(None);
        };

        let cert = read_pem(cert_file)?;
        let key = read_pem(key_file)?;
        info!("🔒 Loaded TLS identity from {}", cert_file.display());

        Ok(Some(
            ServerTlsConfig::new().identity(Identity::from_pem(cert, key)),
        ))
    }
}
