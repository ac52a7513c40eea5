//! The crate's error type.

use thiserror::Error;

/// Everything that can go wrong while collecting parameters, sampling or writing results.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is outside of the values the sampler accepts.
    ///
    /// This is reported before any randomness is consumed.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Human readable explanation
        reason: String,
    },

    /// Reading a parameter file or writing an output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file could not be parsed or a handover could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Shorthand for results using this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
