use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database could not execute a query.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Description of the failing operation.
        message: String,
        /// Underlying database failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A second score was inserted for a player that already has one.
    #[error("duplicate score for player `{player_id}`")]
    DuplicateScore {
        /// Identifier of the player that already played.
        player_id: i64,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
