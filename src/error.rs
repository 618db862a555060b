//! Error types.

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Failures of the caller-side driver in [`Engine::run`](crate::Engine::run).
///
/// Division by zero is deliberately absent: it is an in-band condition
/// reported through [`DivOutput::division_by_zero`](crate::DivOutput::division_by_zero).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// A new operation was requested while one was still in flight.
    Busy,

    /// `done` was not observed within the bounded number of steps.
    Timeout {
        /// Steps waited before giving up.
        steps: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "engine busy: operation already in flight"),
            Self::Timeout { steps } => write!(f, "engine did not assert done within {steps} steps"),
        }
    }
}

impl core::error::Error for Error {}
