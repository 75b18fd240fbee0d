//! One-shot sampling with no retained state.

use tracing::trace;

use super::SecureRandom;
use super::range::{sample_bytes, sample_range, validate_range, validate_size};
use crate::entropy::{EntropyProvider, SystemEntropy};
use crate::error::Result;

/// Generates random data with a fresh entropy handle per call.
///
/// Each operation validates its arguments, acquires a handle from the
/// provider, samples, and drops the handle before returning, on success
/// and on failure alike. Nothing is carried between calls, so a shared
/// `&StatelessSampler` can be used from many threads at once as long as the
/// provider itself is `Sync`.
///
/// Acquiring a handle is the expensive step. Callers drawing many values in
/// a loop should use a [`SamplerContext`](super::SamplerContext) instead.
#[derive(Debug, Clone, Default)]
pub struct StatelessSampler<P = SystemEntropy> {
    provider: P,
}

impl StatelessSampler<SystemEntropy> {
    /// Creates a sampler backed by the host CSPRNG.
    pub fn new() -> Self {
        Self::with_provider(SystemEntropy)
    }
}

impl<P: EntropyProvider> StatelessSampler<P> {
    /// Creates a sampler that acquires handles from `provider`.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Returns `size` random bytes.
    ///
    /// # Errors
    /// * `InvalidArgument` (`size`) if `size` is zero. The provider is not
    ///   touched in that case.
    /// * `EntropySourceUnavailable` if no handle can be acquired or filled.
    pub fn generate_bytes(&self, size: usize) -> Result<Vec<u8>> {
        validate_size(size)?;

        let mut source = self.provider.acquire()?;
        trace!(size, "stateless byte request");
        sample_bytes(&mut source, size)
    }

    /// Returns a value uniformly drawn from `[min, max]`.
    ///
    /// See the [`range`](super::range) module for the reduction used and its
    /// modulo bias.
    ///
    /// # Errors
    /// * `InvalidArgument` (`max`) if `max <= min`. The provider is not
    ///   touched in that case.
    /// * `EntropySourceUnavailable` if no handle can be acquired or filled.
    pub fn generate_range(&self, min: i32, max: i32) -> Result<i32> {
        validate_range(min, max)?;

        let mut source = self.provider.acquire()?;
        trace!(min, max, "stateless range request");
        sample_range(&mut source, min, max)
    }
}

impl<P: EntropyProvider> SecureRandom for StatelessSampler<P> {
    fn generate_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        Self::generate_bytes(self, size)
    }

    fn generate_range(&mut self, min: i32, max: i32) -> Result<i32> {
        Self::generate_range(self, min, max)
    }
}

/// Returns `size` bytes from the host CSPRNG.
///
/// Shorthand for [`StatelessSampler::new().generate_bytes(size)`](StatelessSampler::generate_bytes).
pub fn generate_bytes(size: usize) -> Result<Vec<u8>> {
    StatelessSampler::new().generate_bytes(size)
}

/// Returns a value in `[min, max]` from the host CSPRNG.
///
/// Shorthand for [`StatelessSampler::new().generate_range(min, max)`](StatelessSampler::generate_range).
pub fn generate_range(min: i32, max: i32) -> Result<i32> {
    StatelessSampler::new().generate_range(min, max)
}
