//! Error types for the solace reply engine.
//!
//! The reply pipeline itself is total and never fails. Errors only come from
//! the boundary: configuration files, caller-supplied history, and the host
//! bridge protocol.

/// Top-level error type for the companion.
#[derive(Debug, thiserror::Error)]
pub enum SolaceError {
    /// Configuration could not be parsed, serialized or validated.
    #[error("config error: {0}")]
    Config(String),

    /// A conversation turn supplied by the caller is malformed.
    #[error("invalid conversation turn at index {index}: {reason}")]
    InvalidTurn {
        /// Position of the offending turn in the supplied history.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A request payload could not be decoded.
    #[error("payload error: {0}")]
    Payload(String),

    /// Host bridge protocol or transport error.
    #[error("bridge error: {0}")]
    Bridge(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SolaceError>;
