//! Thread-safe PCG32 handle
//!
//! Wraps a [`Pcg32`] in a mutex so a single stream can be used from many
//! threads without lost updates. Each call holds the lock for one complete
//! operation, so a rejection loop never interleaves with another caller.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RandomError;
use crate::primitives::U256;
use crate::rng::Pcg32;

/// A [`Pcg32`] that can be shared by reference across threads.
#[derive(Debug)]
pub struct SharedPcg32 {
    inner: Mutex<Pcg32>,
}

impl SharedPcg32 {
    /// Creates a shared generator seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
    pub fn new() -> Result<Self, RandomError> {
        Ok(Self::from(Pcg32::new()?))
    }

    /// Creates a shared generator with an explicit state word.
    pub const fn from_state(state: u64) -> Self {
        Self {
            inner: Mutex::new(Pcg32::from_state(state)),
        }
    }

    // A panicking caller cannot leave the state half-written: it is a
    // single word replaced in one assignment.
    fn lock(&self) -> MutexGuard<'_, Pcg32> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Pcg32::state`].
    pub fn state(&self) -> u64 {
        self.lock().state()
    }

    /// See [`Pcg32::set_state`].
    pub fn set_state(&self, state: u64) {
        self.lock().set_state(state);
    }

    /// See [`Pcg32::next_u32`].
    pub fn next_u32(&self) -> u32 {
        self.lock().next_u32()
    }

    /// See [`Pcg32::bounded`].
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn bounded(&self, bound: u32) -> u32 {
        self.lock().bounded(bound)
    }

    /// See [`Pcg32::random_below`].
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn random_below(&self, bound: &U256) -> U256 {
        self.lock().random_below(bound)
    }

    /// See [`Pcg32::random_scalar`].
    pub fn random_scalar(&self) -> U256 {
        self.lock().random_scalar()
    }

    /// Consumes the handle and returns the underlying generator.
    pub fn into_inner(self) -> Pcg32 {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Pcg32> for SharedPcg32 {
    fn from(rng: Pcg32) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }
}
