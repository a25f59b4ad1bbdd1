//! Error types for the history guard

use crate::capabilities::StorageArea;
use thiserror::Error;

/// Result type alias for guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors raised by the browser capabilities or by configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Clearing a storage area failed (disabled storage, security restrictions)
    #[error("failed to clear {area} storage: {message}")]
    Storage { area: StorageArea, message: String },

    /// Reading or pushing a history entry failed
    #[error("history error: {0}")]
    History(String),

    /// Assigning the location failed
    #[error("navigation error: {0}")]
    Navigation(String),

    /// The cookie string could not be read
    #[error("cookie error: {0}")]
    Cookie(String),

    /// A browser global is missing in this context
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GuardError {
    pub fn storage(area: StorageArea, message: impl Into<String>) -> Self {
        Self::Storage {
            area,
            message: message.into(),
        }
    }
}
