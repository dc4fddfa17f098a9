use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizeDiffError {
    #[error("unsupported input: {0}")]
    Unsupported(String),

    #[error("report callback failed: {0}")]
    Callback(Box<dyn std::error::Error + Send + Sync>),

    #[error("stage already closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SizeDiffError>;
