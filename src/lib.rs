//! Client and server for a gRPC error/latency test fixture.
//!
//! The server answers the `grpcerrors.GRPCErrors` service; each request's
//! `mode` decides whether the call fails, succeeds, or is rejected as
//! unimplemented, and `param` delays the outcome by that many seconds.

pub mod client;
pub mod common;
pub mod server;

pub use client::{ClientConfig, ErrorTestClient};
pub use common::{Behavior, Data, HarnessError};
pub use server::{ErrorTestServer, ServerConfig};
