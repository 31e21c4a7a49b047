use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("provide text or images")]
    EmptyMessage,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
