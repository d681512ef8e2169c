use std::fmt;

use crate::algorithm::DigestAlgorithm;
use crate::error::{Result, VerifyError};
use crate::hasher::Hasher;
use crate::output::Digest;

/// Single-use incremental digest computation.
///
/// A session moves from active to finalized exactly once. Any `update` or
/// `finalize` after that fails with [`VerifyError::InvalidState`].
pub struct DigestSession {
    algorithm:       DigestAlgorithm,
    hasher:          Option<Box<dyn Hasher>>,
    bytes_processed: u64,
}

impl DigestSession {
    /// Wrap a fresh hasher for `algorithm`.
    pub fn new(algorithm: DigestAlgorithm, hasher: Box<dyn Hasher>) -> Self {
        Self {
            algorithm,
            hasher: Some(hasher),
            bytes_processed: 0,
        }
    }

    /// Feed the next bytes of the source, in source order.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        let hasher = self
            .hasher
            .as_mut()
            .ok_or(VerifyError::InvalidState("session already finalized"))?;

        if data.is_empty() {
            return Ok(());
        }

        hasher.update(data);
        self.bytes_processed += data.len() as u64;
        Ok(())
    }

    /// Apply padding and produce the digest.
    pub fn finalize(&mut self) -> Result<Digest> {
        let hasher = self
            .hasher
            .take()
            .ok_or(VerifyError::InvalidState("session already finalized"))?;

        let digest = Digest::new(self.algorithm, hasher.finalize())?;
        tracing::trace!(
            algorithm = %self.algorithm,
            bytes = self.bytes_processed,
            "digest session finalized"
        );
        Ok(digest)
    }

    pub fn algorithm(&self) -> DigestAlgorithm { self.algorithm }

    pub fn bytes_processed(&self) -> u64 { self.bytes_processed }

    pub fn is_finalized(&self) -> bool { self.hasher.is_none() }
}

impl fmt::Debug for DigestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestSession")
            .field("algorithm", &self.algorithm)
            .field("bytes_processed", &self.bytes_processed)
            .field("finalized", &self.is_finalized())
            .finish()
    }
}
