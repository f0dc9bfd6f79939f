//! Error types for port operations.

/// Actor store errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Reading or writing the backing store failed.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }
}

/// Chat delivery errors. Never fatal to a roll.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat delivery failed: {0}")]
    DeliveryFailed(String),
    #[error("Chat unavailable")]
    Unavailable,
}
