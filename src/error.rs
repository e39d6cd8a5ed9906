use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status error: {0}")]
    Status(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() {
            CheckError::Status(err.to_string())
        } else if err.is_decode() {
            CheckError::Decode(err.to_string())
        } else {
            CheckError::Network(err.to_string())
        }
    }
}

impl From<std::env::VarError> for CheckError {
    fn from(err: std::env::VarError) -> Self {
        CheckError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
