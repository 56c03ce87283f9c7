//! # Simulated Behaviors
//!
//! Maps the `mode`/`param` pair of a [`Data`] request onto the behavior the
//! server simulates for it. Keeping this as an enum rather than comparing raw
//! integers in every handler makes each handler's `match` exhaustive.

use std::fmt;
use std::time::Duration;

use super::messages::{Data, MODE_FAIL, MODE_SUCCEED};

/// What the server does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Sleep for the delay, then fail with the simulated error
    FailAfter(Duration),
    /// Sleep for the delay, then succeed
    SucceedAfter(Duration),
    /// Fail immediately with an `Unimplemented` status
    Unimplemented,
}

impl Behavior {
    /// Selects the behavior for a request.
    ///
    /// Negative delays are clamped to zero.
    pub fn from_data(data: &Data) -> Self {
        let delay = Duration::from_secs(data.param.max(0).unsigned_abs());

        match data.mode {
            MODE_FAIL => Behavior::FailAfter(delay),
            MODE_SUCCEED => Behavior::SucceedAfter(delay),
            _ => Behavior::Unimplemented,
        }
    }

    /// Delay applied before the behavior takes effect.
    pub fn delay(&self) -> Duration {
        match self {
            Behavior::FailAfter(delay) | Behavior::SucceedAfter(delay) => *delay,
            Behavior::Unimplemented => Duration::ZERO,
        }
    }
}

impl From<&Data> for Behavior {
    fn from(data: &Data) -> Self {
        Behavior::from_data(data)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::FailAfter(delay) => write!(f, "fail after {}s", delay.as_secs()),
            Behavior::SucceedAfter(delay) => write!(f, "succeed after {}s", delay.as_secs()),
            Behavior::Unimplemented => write!(f, "unimplemented"),
        }
    }
}
