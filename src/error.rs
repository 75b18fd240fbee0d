//! Error type shared by every sampling operation.

use thiserror::Error;

/// Reason reported when a byte request asks for fewer than one byte.
pub const SIZE_CANNOT_BE_LESS_THAN_ONE: &str = "size can't be less than 1.";

/// Reason reported when a range request has `max <= min`.
pub const MAX_CANNOT_BE_LESS_OR_EQUAL_TO_MIN: &str = "max can't be less or equal to min.";

/// Errors returned by the samplers.
///
/// All errors are reported synchronously to the immediate caller and none
/// are retried internally. An operation that returns an error produced no
/// output.
#[derive(Error, Debug)]
pub enum SecureRandomError {
    /// An argument failed validation before the entropy source was touched.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter (`size` or `max`).
        param: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },

    /// An operation was invoked on a context after it was released.
    #[error("cannot use a released {type_name}")]
    UseAfterRelease {
        /// Full type name of the released context.
        type_name: &'static str,
    },

    /// The host could not supply a cryptographically secure generator.
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(#[source] std::io::Error),
}

impl SecureRandomError {
    pub(crate) fn invalid_size() -> Self {
        Self::InvalidArgument {
            param: "size",
            reason: SIZE_CANNOT_BE_LESS_THAN_ONE,
        }
    }

    pub(crate) fn invalid_max() -> Self {
        Self::InvalidArgument {
            param: "max",
            reason: MAX_CANNOT_BE_LESS_OR_EQUAL_TO_MIN,
        }
    }

    /// Returns the offending parameter name of an `InvalidArgument` error.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SecureRandomError>;
