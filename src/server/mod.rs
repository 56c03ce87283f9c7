//! # Server Components
//!
//! - [`service`]: the four gRPC handlers and the mode dispatch
//! - [`server`]: socket binding, TLS and serving
//! - [`config`]: server configuration

pub mod config;
pub mod server;
pub mod service;

pub use config::ServerConfig;
pub use server::ErrorTestServer;
pub use service::ErrorTestService;
