//! # Client Components
//!
//! - [`client`]: the connected [`ErrorTestClient`] with one method per call shape
//! - [`config`]: client configuration (target, TLS, timeout)

pub mod client;
pub mod config;

// Re-export for convenience
pub use client::ErrorTestClient;
pub use config::ClientConfig;
