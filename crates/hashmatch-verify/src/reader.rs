use std::io::{self, Read};

use crate::error::{Result, VerifyError};
use crate::output::Digest;
use crate::session::DigestSession;

/// Streaming reader that hashes data as it passes through.
/// Wraps any `Read` source so bytes are touched once for both consumers.
pub struct HashingReader<R> {
    reader:  R,
    session: DigestSession,
}

impl<R> HashingReader<R> {
    pub fn new(reader: R, session: DigestSession) -> Self { Self { reader, session } }

    pub fn bytes_processed(&self) -> u64 { self.session.bytes_processed() }

    /// Finalize the digest over everything read so far.
    pub fn finish(mut self) -> Result<Digest> { self.session.finalize() }

    /// Finalize and compare against an expected hex digest, ignoring case.
    pub fn verify(self, expected: &str) -> Result<Digest> {
        let actual = self.finish()?;
        if actual.matches_hex(expected) {
            Ok(actual)
        } else {
            Err(VerifyError::Mismatch {
                expected: expected.trim().to_ascii_lowercase(),
                actual:   actual.to_hex(),
            })
        }
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        self.session
            .update(&buf[..n])
            .map_err(io::Error::other)?;
        Ok(n)
    }
}

#[cfg(all(test, feature = "sha2"))]
mod tests {
    use super::*;
    use crate::{DigestAlgorithm, DigestRegistry};
    use std::io::Cursor;

    fn sha256_session() -> DigestSession {
        DigestRegistry::standard().open(DigestAlgorithm::Sha256).unwrap()
    }

    #[test]
    fn test_hashing_reader_success() {
        let data = b"Hello, World!";
        let mut reader = HashingReader::new(Cursor::new(data), sha256_session());

        let mut sink = Vec::new();
        io::copy(&mut reader, &mut sink).unwrap();
        assert_eq!(sink, data);
        assert_eq!(reader.bytes_processed(), data.len() as u64);

        reader
            .verify("DFFD6021BB2BD5B0AF676290809EC3A53191DD81C7F70A4B28688A362182986F")
            .unwrap();
    }

    #[test]
    fn test_hashing_reader_mismatch() {
        let mut reader = HashingReader::new(Cursor::new(b"test data"), sha256_session());
        let mut buffer = [0; 32];
        reader.read(&mut buffer).unwrap();

        let wrong = "0".repeat(64);
        match reader.verify(&wrong) {
            Err(VerifyError::Mismatch { expected, actual }) => {
                assert_eq!(expected, wrong);
                assert_ne!(actual, wrong);
            }
            other => panic!("expected Mismatch, got {other:?}"),
        }
    }
}
