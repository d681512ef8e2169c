//! Expected-digest expressions such as `sha256:ba7816bf…`.

use std::fmt;
use std::str::FromStr;

use hashmatch_verify::{Digest, DigestAlgorithm};

use crate::core::is_hex_digest;
use crate::error::{Error, Result};

/// An expected digest tied to the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    /// The hash algorithm to use
    pub algorithm: DigestAlgorithm,
    /// Expected digest, lowercase hex
    pub expected: String,
}

impl Checksum {
    /// Build from an algorithm and a hex digest of either case.
    pub fn new(algorithm: DigestAlgorithm, expected: &str) -> Result<Self> {
        let expected = expected.trim();
        if !is_hex_digest(expected, algorithm) {
            return Err(Error::InvalidChecksum(format!(
                "expected {} hex characters for {algorithm}, got {:?}",
                algorithm.hex_len(),
                expected
            )));
        }
        Ok(Self {
            algorithm,
            expected: expected.to_ascii_lowercase(),
        })
    }

    /// Parse `algo:hex`, or a bare hex digest whose length identifies the
    /// algorithm (32 → MD5, 40 → SHA-1, 56 → SHA-224, 64 → SHA-256).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        match input.split_once(':') {
            Some((algo, hash)) => {
                let algorithm = algo.parse::<DigestAlgorithm>()?;
                Self::new(algorithm, hash)
            }
            None => {
                let algorithm = DigestAlgorithm::ALL
                    .into_iter()
                    .find(|algorithm| algorithm.hex_len() == input.len())
                    .ok_or_else(|| {
                        Error::InvalidChecksum(format!(
                            "cannot infer algorithm from a {}-character digest",
                            input.len()
                        ))
                    })?;
                Self::new(algorithm, input)
            }
        }
    }

    /// Parse several checksums separated by whitespace or newlines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse_many(input: &str) -> Result<Vec<Self>> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(Self::parse)
            .collect()
    }

    pub fn matches(&self, digest: &Digest) -> bool {
        digest.algorithm() == self.algorithm && digest.matches_hex(&self.expected)
    }
}

impl FromStr for Checksum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.expected)
    }
}
