//! Error types for sqlf

use crate::template::Verb;
use thiserror::Error;

/// Result type alias for sqlf operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised while selecting drivers or rendering a builder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A verb had no unconsumed argument left in its segment
    #[error("missing argument for `{verb}` in segment {segment} ({available} supplied)")]
    MissingArgument {
        verb: Verb,
        segment: usize,
        available: usize,
    },

    /// Driver name not present in the registry
    #[error("driver '{0}' not found")]
    UnknownDriver(String),

    /// Value cannot be encoded as a query parameter
    #[error("cannot bind value: {0}")]
    Unbindable(String),
}

impl FormatError {
    /// Create an unbindable-value error
    pub fn unbindable(message: impl Into<String>) -> Self {
        Self::Unbindable(message.into())
    }

    /// Check if this is an argument underflow error
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }

    /// Check if this is an unknown driver error
    pub fn is_unknown_driver(&self) -> bool {
        matches!(self, Self::UnknownDriver(_))
    }
}
