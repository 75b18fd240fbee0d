//! Uniform random bytes and bounded integers from the host CSPRNG
//!
//! This crate hands out unpredictable values (tokens, salts, indices)
//! sourced from the operating system's cryptographically secure random
//! number generator. It never exposes a statistical-only generator and never
//! falls back to one.
//!
//! # Module overview
//!
//! - `os`
//!   Platform layer. Selects the host CSPRNG at compile time: `getrandom(2)`
//!   on Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows.
//!
//! - `entropy`
//!   The narrow capability the samplers consume: a provider that acquires
//!   handles, and handles that fill buffers. Handles are released on drop.
//!
//! - `sampler`
//!   The two facades, [`StatelessSampler`] and [`SamplerContext`], and the
//!   bounded-integer reduction they share.
//!
//! - `error`
//!   [`SecureRandomError`], returned by every fallible operation.
//!
//! # Choosing a facade
//!
//! For a single value, call [`generate_bytes`] or [`generate_range`]:
//!
//! ```no_run
//! let salt = secure_random::generate_bytes(16)?;
//! let index = secure_random::generate_range(0, 9)?;
//! # Ok::<(), secure_random::SecureRandomError>(())
//! ```
//!
//! For many values in a row, open a [`SamplerContext`] and reuse it:
//!
//! ```no_run
//! use secure_random::SamplerContext;
//!
//! let mut ctx = SamplerContext::new()?;
//! let dice: Vec<i32> = (0..10)
//!     .map(|_| ctx.generate_range(1, 6))
//!     .collect::<Result<_, _>>()?;
//! ctx.release();
//! # Ok::<(), secure_random::SecureRandomError>(())
//! ```
//!
//! # Known limitation
//!
//! Bounded values use direct modulo reduction of a 32-bit word, which is
//! slightly biased when the range size does not divide `2^32`. See
//! [`sampler::range`].

mod os;

pub mod entropy;
pub mod error;
pub mod sampler;

pub use entropy::{EntropyProvider, EntropySource, SystemEntropy};
pub use error::{Result, SecureRandomError};
pub use sampler::{
    SamplerContext, SecureRandom, StatelessSampler, generate_bytes, generate_range,
};
