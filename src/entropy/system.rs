//! Host CSPRNG provider.

use tracing::{error, trace};

use super::{EntropyProvider, EntropySource};
use crate::error::{Result, SecureRandomError};
use crate::os;

/// Provider backed by the operating system CSPRNG.
///
/// This is a zero-sized type. Acquiring a handle probes the host generator
/// so that an unavailable source is reported before any sampling starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

/// Handle onto the operating system CSPRNG.
///
/// Created by [`SystemEntropy::acquire`] and released on drop.
#[derive(Debug)]
pub struct SystemEntropySource {
    _private: (),
}

impl EntropyProvider for SystemEntropy {
    type Source = SystemEntropySource;

    fn acquire(&self) -> Result<SystemEntropySource> {
        os::probe().map_err(|e| {
            error!(?e, "host CSPRNG is unavailable");
            SecureRandomError::EntropySourceUnavailable(e)
        })?;

        trace!("acquired system entropy source");
        Ok(SystemEntropySource { _private: () })
    }
}

impl EntropySource for SystemEntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        os::sys_random(buf).map_err(|e| {
            error!(?e, len = buf.len(), "random byte generation failed");
            SecureRandomError::EntropySourceUnavailable(e)
        })
    }
}

impl Drop for SystemEntropySource {
    fn drop(&mut self) {
        trace!("released system entropy source");
    }
}
