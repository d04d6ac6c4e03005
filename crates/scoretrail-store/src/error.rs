use thiserror::Error;

/// Errors raised by the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history document could not be (de)serialized: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("history document violates the series model: {0}")]
    Malformed(String),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
