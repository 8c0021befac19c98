//! Error types

use std::fmt;
use std::io;

/// Errors produced by the randomness primitives.
///
/// Only the entropy path can fail. The PCG engine and the samplers built on
/// it are infallible once a generator exists.
#[derive(Debug)]
pub enum RandomError {
    /// The operating system's secure random source could not supply bytes.
    EntropyUnavailable(io::Error),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::EntropyUnavailable(err) => {
                write!(f, "operating system entropy unavailable: {err}")
            }
        }
    }
}

impl std::error::Error for RandomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RandomError::EntropyUnavailable(err) => Some(err),
        }
    }
}

impl From<io::Error> for RandomError {
    fn from(err: io::Error) -> Self {
        RandomError::EntropyUnavailable(err)
    }
}
