use thiserror::Error;

/// Failure raised by a collection backend.
///
/// Handlers map every variant to their route's 500 response; nothing here is
/// retried or classified further.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier not expressible as a record key in the backend.
    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    /// Driver-level failure talking to the document database.
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// In-memory store lock poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}
