//! Sampling facades
//!
//! Two ways to draw random data, both funnelling into the same byte and
//! bounded-integer routines in [`range`]:
//!
//! - [`StatelessSampler`] acquires and releases an entropy handle on every
//!   call. No lifetime to manage, safe to share.
//! - [`SamplerContext`] holds one handle until it is released. Cheaper for
//!   bursts of calls, needs `&mut` access.
//!
//! Both implement [`SecureRandom`], so code can be written once against
//! either lifecycle model.

mod context;
pub mod range;
mod stateless;

#[cfg(test)]
pub(crate) mod mock;

pub use context::SamplerContext;
pub use stateless::{StatelessSampler, generate_bytes, generate_range};

use crate::error::Result;

/// Random data generation backed by a cryptographically secure source.
pub trait SecureRandom {
    /// Returns exactly `size` random bytes. `size` must be at least 1.
    fn generate_bytes(&mut self, size: usize) -> Result<Vec<u8>>;

    /// Returns a value in the inclusive range `[min, max]`. `max` must be
    /// greater than `min`.
    fn generate_range(&mut self, min: i32, max: i32) -> Result<i32>;
}

impl<R: SecureRandom + ?Sized> SecureRandom for &mut R {
    fn generate_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        (**self).generate_bytes(size)
    }

    fn generate_range(&mut self, min: i32, max: i32) -> Result<i32> {
        (**self).generate_range(min, max)
    }
}
