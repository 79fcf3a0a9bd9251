//! Signature engine context.
use crate::backend;
use tracing::{debug, trace};

/// Owned handle to the backend's precomputed tables.
///
/// Create one per process and share it by reference: every operation only borrows it, so a
/// single context serves concurrent callers without locking. The handle is released exactly
/// once, either through [`Context::release`] or when it is dropped.
#[derive(Debug)]
pub struct Context {
    inner: backend::NativeContext,
}

impl Context {
    /// Allocates a new context.
    ///
    /// Allocation failure is not recoverable and aborts.
    pub fn new() -> Self {
        let inner = backend::new_context();
        debug!(backend = backend::NAME, "created secp256k1 context");
        Self { inner }
    }

    /// Re-blinds the context with a fresh 32-byte seed.
    ///
    /// This is the only operation that mutates the context, hence the exclusive borrow.
    pub fn randomize(&mut self, seed: &[u8; 32]) {
        backend::randomize(&mut self.inner, seed);
        trace!(backend = backend::NAME, "randomized secp256k1 context");
    }

    /// Releases the context. It cannot be used afterwards.
    pub fn release(self) {
        drop(self)
    }

    pub(crate) fn native(&self) -> &backend::NativeContext {
        &self.inner
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        debug!(backend = backend::NAME, "released secp256k1 context");
    }
}
