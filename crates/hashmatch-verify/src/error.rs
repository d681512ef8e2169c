use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("digest backend failure: {0}")]
    Backend(String),

    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    #[error("digest mismatch: expected {expected}, got {actual}")]
    Mismatch {
        expected: String,
        actual:   String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
