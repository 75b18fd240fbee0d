//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! host's cryptographically secure random number generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! - `probe()` checks that the host CSPRNG can be reached
//! - `sys_random(buf)` fills `buf` completely or fails
//!
//! Both return `std::io::Error` on failure. Callers decide how to surface it;
//! this layer never panics and never falls back to a weaker generator.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
compile_error!("no host CSPRNG backend is available for this target_os");
