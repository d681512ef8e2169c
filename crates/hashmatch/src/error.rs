//! Error types for hashmatch.

use std::io;

use hashmatch_verify::VerifyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("input is empty")]
    EmptyInput,

    #[error("failed to read source at byte offset {offset}: {source}")]
    SourceRead {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// I/O failure outside a byte source, where no read offset applies.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    #[error("digest backend failure: {0}")]
    DigestBackend(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("hash operation cancelled")]
    Cancelled,

    #[error("invalid checksum: {0}")]
    InvalidChecksum(String),

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load configuration: {0}")]
    Config(#[source] Box<figment::Error>),
}

impl Error {
    pub(crate) fn read_at(offset: u64, source: io::Error) -> Self {
        Error::SourceRead { offset, source }
    }
}

impl From<VerifyError> for Error {
    fn from(e: VerifyError) -> Self {
        match e {
            VerifyError::UnsupportedAlgorithm(name) => Error::UnsupportedAlgorithm(name),
            VerifyError::Backend(message) => Error::DigestBackend(message),
            VerifyError::InvalidState(message) => Error::InvalidState(message.to_string()),
            VerifyError::Mismatch { expected, actual } => Error::ChecksumMismatch { expected, actual },
            VerifyError::Io(source) => Error::Io(source),
        }
    }
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self { Error::Config(Box::new(e)) }
}

pub type Result<T> = std::result::Result<T, Error>;
