use thiserror::Error;

/// Errors that can occur while fetching and resolving posts
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Post file not found: {name}")]
    NotFound { name: String },

    #[error("Content source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Invalid content in {filename}: {reason}")]
    InvalidContent { filename: String, reason: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        ContentError::SourceUnavailable {
            message: err.to_string(),
        }
    }
}

// Sources match on NotFound themselves; any io error that reaches this
// conversion is a transport failure.
impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::SourceUnavailable {
            message: err.to_string(),
        }
    }
}

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
