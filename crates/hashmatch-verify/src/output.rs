use std::fmt;

use crate::algorithm::DigestAlgorithm;
use crate::error::{Result, VerifyError};

/// A finalized digest.
///
/// The byte length always equals `algorithm.output_size()`; sessions refuse
/// to build a `Digest` from a backend that produced anything else.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: DigestAlgorithm,
    bytes:     Box<[u8]>,
}

impl Digest {
    pub(crate) fn new(algorithm: DigestAlgorithm, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != algorithm.output_size() {
            return Err(VerifyError::Backend(format!(
                "{algorithm} backend produced {} bytes, expected {}",
                bytes.len(),
                algorithm.output_size()
            )));
        }
        Ok(Self {
            algorithm,
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Parse a hex rendering of a digest for `algorithm`.
    ///
    /// Accepts either case; the length must match the algorithm exactly.
    pub fn from_hex(algorithm: DigestAlgorithm, hex_str: &str) -> Result<Self> {
        let hex_str = hex_str.trim();
        if hex_str.len() != algorithm.hex_len() {
            return Err(VerifyError::Mismatch {
                expected: format!("{} hex characters", algorithm.hex_len()),
                actual:   format!("{} characters", hex_str.len()),
            });
        }
        let bytes = hex::decode(hex_str).map_err(|e| VerifyError::Mismatch {
            expected: "hex digest".to_string(),
            actual:   e.to_string(),
        })?;
        Self::new(algorithm, bytes)
    }

    pub fn algorithm(&self) -> DigestAlgorithm { self.algorithm }

    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    pub fn len(&self) -> usize { self.bytes.len() }

    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// Canonical lowercase hex, two characters per byte, digest byte order.
    pub fn to_hex(&self) -> String { hex::encode(&self.bytes) }

    /// Case-insensitive comparison against a hex string.
    pub fn matches_hex(&self, other: &str) -> bool {
        self.to_hex().eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}:{})", self.algorithm, self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}
