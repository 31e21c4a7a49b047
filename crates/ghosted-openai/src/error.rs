use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion response parsing failed: {0}")]
    ResponseParse(String),
}
