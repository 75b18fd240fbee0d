//! Entropy capability
//!
//! The samplers never talk to the operating system directly. They consume
//! two narrow traits:
//!
//! - [`EntropyProvider`] acquires a fresh handle
//! - [`EntropySource`] fills caller-supplied buffers from that handle
//!
//! A handle is released when it is dropped. Ownership makes the release
//! happen exactly once, on every exit path, without any ambient or global
//! generator.
//!
//! [`SystemEntropy`] is the provider backed by the host CSPRNG. Tests
//! substitute their own providers to observe acquisition, release and
//! failure behaviour.

mod system;

pub use system::{SystemEntropy, SystemEntropySource};

use crate::error::Result;

/// An acquired handle onto a cryptographically secure byte stream.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// The fill is all-or-nothing: on error the caller must discard `buf`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// Factory for [`EntropySource`] handles.
pub trait EntropyProvider {
    /// Handle type produced by [`acquire`](Self::acquire).
    type Source: EntropySource;

    /// Acquires a new, exclusively owned handle.
    ///
    /// Fails with `EntropySourceUnavailable` if the host cannot provide a
    /// cryptographically secure generator.
    fn acquire(&self) -> Result<Self::Source>;
}
