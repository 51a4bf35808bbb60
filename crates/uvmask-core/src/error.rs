use thiserror::Error;

pub type Result<T> = std::result::Result<T, UvError>;

#[derive(Debug, Error)]
pub enum UvError {
    /// Decoded pixel count differs from the declared width x height.
    #[error("size mismatch: expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("malformed stream: {0}")]
    MalformedStream(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
