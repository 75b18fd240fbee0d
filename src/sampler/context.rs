//! Reusable sampling context
//!
//! A [`SamplerContext`] acquires one entropy handle when it is created and
//! keeps it until it is released. It is a two-state machine:
//!
//! - `Open`: the handle is live and every operation reuses it
//! - `Released`: terminal; the handle has been dropped
//!
//! The only transition is [`SamplerContext::release`], which is idempotent.
//! Dropping the context performs the same release, so the handle is freed
//! exactly once whether the caller releases explicitly, returns early, or
//! unwinds.
//!
//! Operations check the state before validating their arguments: a released
//! context always reports `UseAfterRelease`, even for invalid arguments.
//!
//! Every operation takes `&mut self`. Sharing a context between threads
//! therefore requires external synchronization such as a `Mutex`.

use std::any::type_name;

use tracing::{debug, warn};

use super::SecureRandom;
use super::range::{sample_bytes, sample_range};
use crate::entropy::{EntropyProvider, SystemEntropy};
use crate::error::{Result, SecureRandomError};

enum State<S> {
    Open(S),
    Released,
}

/// Generates random data from a single entropy handle held across calls.
pub struct SamplerContext<P: EntropyProvider = SystemEntropy> {
    state: State<P::Source>,
}

impl SamplerContext<SystemEntropy> {
    /// Opens a context on the host CSPRNG.
    ///
    /// # Errors
    /// * `EntropySourceUnavailable` if the host cannot provide a CSPRNG.
    pub fn new() -> Result<Self> {
        Self::with_provider(&SystemEntropy)
    }
}

impl<P: EntropyProvider> SamplerContext<P> {
    /// Opens a context holding a handle acquired from `provider`.
    pub fn with_provider(provider: &P) -> Result<Self> {
        let source = provider.acquire()?;
        debug!(context = type_name::<Self>(), "sampler context opened");

        Ok(Self {
            state: State::Open(source),
        })
    }

    /// Returns `true` once the context has been released.
    pub fn is_released(&self) -> bool {
        matches!(self.state, State::Released)
    }

    /// Releases the held handle.
    ///
    /// Calling this on an already released context is a no-op.
    pub fn release(&mut self) {
        if let State::Open(source) = std::mem::replace(&mut self.state, State::Released) {
            drop(source);
            debug!(context = type_name::<Self>(), "sampler context released");
        }
    }

    fn source(&mut self) -> Result<&mut P::Source> {
        match &mut self.state {
            State::Open(source) => Ok(source),
            State::Released => {
                warn!(context = type_name::<Self>(), "operation on released sampler context");
                Err(SecureRandomError::UseAfterRelease {
                    type_name: type_name::<Self>(),
                })
            }
        }
    }

    /// Returns `size` random bytes from the held handle.
    ///
    /// # Errors
    /// * `UseAfterRelease` if the context has been released.
    /// * `InvalidArgument` (`size`) if `size` is zero.
    /// * `EntropySourceUnavailable` if the handle fails to fill the buffer.
    pub fn generate_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        sample_bytes(self.source()?, size)
    }

    /// Returns a value in `[min, max]` drawn from the held handle.
    ///
    /// # Errors
    /// * `UseAfterRelease` if the context has been released.
    /// * `InvalidArgument` (`max`) if `max <= min`.
    /// * `EntropySourceUnavailable` if the handle fails to fill the buffer.
    pub fn generate_range(&mut self, min: i32, max: i32) -> Result<i32> {
        sample_range(self.source()?, min, max)
    }
}

impl<P: EntropyProvider> SecureRandom for SamplerContext<P> {
    fn generate_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        Self::generate_bytes(self, size)
    }

    fn generate_range(&mut self, min: i32, max: i32) -> Result<i32> {
        Self::generate_range(self, min, max)
    }
}

impl<P: EntropyProvider> Drop for SamplerContext<P> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<P: EntropyProvider> std::fmt::Debug for SamplerContext<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamplerContext")
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::mock::{Behaviour, MockProvider};

    fn replaying(bytes: Vec<u8>) -> (MockProvider, SamplerContext<MockProvider>) {
        let provider = MockProvider::new(Behaviour::Replay(bytes));
        let context = SamplerContext::with_provider(&provider).unwrap();
        (provider, context)
    }

    #[test]
    fn test_context_reuses_one_handle() {
        let (provider, mut context) = replaying(vec![0x11; 32]);

        context.generate_bytes(4).unwrap();
        context.generate_range(-5, 5).unwrap();
        context.generate_bytes(8).unwrap();

        assert_eq!(provider.acquired(), 1);
        assert_eq!(provider.released(), 0);
        assert_eq!(provider.fills(), 3);
    }

    #[test]
    fn test_release_drops_handle_exactly_once() {
        let (provider, mut context) = replaying(Vec::new());

        context.release();
        context.release();
        drop(context);

        assert_eq!(provider.released(), 1);
    }

    #[test]
    fn test_drop_releases_open_context() {
        let (provider, context) = replaying(Vec::new());

        drop(context);

        assert_eq!(provider.released(), 1);
    }

    #[test]
    fn test_use_after_release_is_checked_before_arguments() {
        let (provider, mut context) = replaying(Vec::new());
        context.release();

        assert!(matches!(
            context.generate_bytes(0),
            Err(SecureRandomError::UseAfterRelease { .. })
        ));
        assert!(matches!(
            context.generate_range(1, 1),
            Err(SecureRandomError::UseAfterRelease { .. })
        ));
        assert_eq!(provider.fills(), 0);
    }

    #[test]
    fn test_use_after_release_names_context_type() {
        let (_provider, mut context) = replaying(Vec::new());
        context.release();

        let err = context.generate_range(0, 1).unwrap_err();

        assert!(err.to_string().contains(type_name::<SamplerContext<MockProvider>>()));
    }

    #[test]
    fn test_invalid_arguments_do_not_consume_entropy() {
        let (provider, mut context) = replaying(Vec::new());

        assert_eq!(context.generate_bytes(0).unwrap_err().param(), Some("size"));
        assert_eq!(context.generate_range(0, 0).unwrap_err().param(), Some("max"));
        assert_eq!(provider.fills(), 0);
        assert!(!context.is_released());
    }

    #[test]
    fn test_fill_failure_leaves_context_open() {
        let provider = MockProvider::new(Behaviour::FailFill);
        let mut context = SamplerContext::with_provider(&provider).unwrap();

        assert!(matches!(
            context.generate_bytes(4),
            Err(SecureRandomError::EntropySourceUnavailable(_))
        ));
        assert!(!context.is_released());

        context.release();
        assert_eq!(provider.released(), 1);
    }

    #[test]
    fn test_acquire_failure_reports_unavailable() {
        let provider = MockProvider::new(Behaviour::FailAcquire);

        assert!(matches!(
            SamplerContext::with_provider(&provider),
            Err(SecureRandomError::EntropySourceUnavailable(_))
        ));
    }
}
