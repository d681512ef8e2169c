use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Supported digest algorithms.
///
/// The set is closed: selectors coming from the outside are parsed through
/// [`FromStr`], so anything that is not one of these four values is rejected
/// before a backend is ever resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// MD5 (RFC 1321)
    Md5,
    /// SHA-1 (FIPS 180-4)
    #[serde(alias = "sha-1")]
    Sha1,
    /// SHA-224 (FIPS 180-4)
    #[serde(alias = "sha-224")]
    Sha224,
    /// SHA-256 (FIPS 180-4)
    #[default]
    #[serde(alias = "sha-256")]
    Sha256,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
    ];

    /// Digest length in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha224 => 28,
            DigestAlgorithm::Sha256 => 32,
        }
    }

    /// Internal compression block length in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            DigestAlgorithm::Md5
            | DigestAlgorithm::Sha1
            | DigestAlgorithm::Sha224
            | DigestAlgorithm::Sha256 => 64,
        }
    }

    /// Length of the canonical hex rendering.
    pub const fn hex_len(self) -> usize { self.output_size() * 2 }

    pub const fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for DigestAlgorithm {
    type Err = VerifyError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "sha224" | "sha-224" => Ok(DigestAlgorithm::Sha224),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(VerifyError::UnsupportedAlgorithm(selector.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sizes() {
        assert_eq!(DigestAlgorithm::Md5.output_size(), 16);
        assert_eq!(DigestAlgorithm::Sha1.output_size(), 20);
        assert_eq!(DigestAlgorithm::Sha224.output_size(), 28);
        assert_eq!(DigestAlgorithm::Sha256.output_size(), 32);
        assert_eq!(DigestAlgorithm::Sha256.hex_len(), 64);
    }

    #[test]
    fn parse_accepts_canonical_and_hyphenated_names() {
        assert_eq!("md5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
        assert_eq!("SHA-1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
        assert_eq!("sha224".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha224);
        assert_eq!(" Sha256 ".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
    }

    #[test]
    fn parse_rejects_unknown_selector() {
        let err = "sha3-512".parse::<DigestAlgorithm>().unwrap_err();
        match err {
            VerifyError::UnsupportedAlgorithm(name) => assert_eq!(name, "sha3-512"),
            other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<DigestAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DigestAlgorithm::Sha224).unwrap();
        assert_eq!(json, "\"sha224\"");

        let parsed: DigestAlgorithm = serde_json::from_str("\"sha-256\"").unwrap();
        assert_eq!(parsed, DigestAlgorithm::Sha256);
    }
}
