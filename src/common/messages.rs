//! # Message Protocol
//!
//! Defines the single message exchanged by the error-test service and pulls in
//! the generated `grpcerrors.GRPCErrors` client and server stubs.
//!
//! Every call shape carries the same [`Data`] value:
//! - `mode` selects the simulated server behavior (see [`Behavior`](super::behavior::Behavior))
//! - `param` is the delay, in whole seconds, applied before that behavior runs
//!
//! Messages are protobuf-encoded by tonic's prost codec, so the Rust binaries
//! interoperate with any other client or server speaking the same service.

use std::fmt;

/// Mode that sleeps for `param` seconds and then fails.
pub const MODE_FAIL: i64 = 1;

/// Mode that sleeps for `param` seconds and then echoes the request.
pub const MODE_SUCCEED: i64 = 2;

/// Request and response payload for every method of the service.
///
/// Field tags match the original schema: `Mode = 1`, `Param = 2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Data {
    /// Selects the simulated behavior
    #[prost(int64, tag = "1")]
    pub mode: i64,
    /// Delay in whole seconds
    #[prost(int64, tag = "2")]
    pub param: i64,
}

impl Data {
    pub fn new(mode: i64, param: i64) -> Self {
        Self { mode, param }
    }

    /// A request that fails after `secs` seconds.
    pub fn fail_after(secs: i64) -> Self {
        Self::new(MODE_FAIL, secs)
    }

    /// A request that is echoed back after `secs` seconds.
    pub fn succeed_after(secs: i64) -> Self {
        Self::new(MODE_SUCCEED, secs)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.mode, self.param)
    }
}

// ============================================================================
// GENERATED SERVICE STUBS
// ============================================================================

/// Generated code for the `grpcerrors.GRPCErrors` service (see `build.rs`).
#[allow(clippy::all, non_camel_case_types)]
pub mod grpcerrors {
    include!(concat!(env!("OUT_DIR"), "/grpcerrors.GRPCErrors.rs"));
}

pub use grpcerrors::g_r_p_c_errors_client::GRPCErrorsClient as GrpcErrorsClient;
pub use grpcerrors::g_r_p_c_errors_server::{
    GRPCErrors as GrpcErrors, GRPCErrorsServer as GrpcErrorsServer,
};
