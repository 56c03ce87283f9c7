//! # Common Components
//!
//! Shared utilities and data structures used by both client and server components.
//!
//! ## Modules
//!
//! - [`messages`]: The `Data` message and the generated service stubs
//! - [`behavior`]: Mapping from `mode`/`param` to the simulated server behavior
//! - [`config`]: Configuration and credential file loading
//! - [`error`]: Library error type
//! - [`logging`]: Logger initialisation shared by both binaries

pub mod behavior;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;

pub use behavior::Behavior;
pub use error::{HarnessError, Result};
pub use messages::Data;
