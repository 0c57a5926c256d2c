use thiserror::Error;

/// FloodWatch unified error type
#[derive(Error, Debug)]
pub enum FloodWatchError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Sign-out failed: {message}")]
    SignOut { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type FloodWatchResult<T> = Result<T, FloodWatchError>;
