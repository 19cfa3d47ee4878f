use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no selection is waiting for a name")]
    NoPendingSelection,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("malformed area data: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("area {id} has an unreadable timestamp: {source}")]
    Timestamp {
        id: String,
        #[source]
        source: chrono::ParseError,
    },
}
