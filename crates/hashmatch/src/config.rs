//! Layered engine configuration.
//!
//! Values are merged in order: built-in defaults, an optional TOML file,
//! then `HASHMATCH_*` environment variables (`HASHMATCH_CHUNK_SIZE`,
//! `HASHMATCH_ALGORITHM`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hashmatch_verify::DigestAlgorithm;
use serde::{Deserialize, Serialize};

use crate::core::validate_chunk_size;
use crate::data::{DEFAULT_CHUNK_SIZE, HashOptions};
use crate::error::Result;

pub const ENV_PREFIX: &str = "HASHMATCH_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default digest algorithm.
    pub algorithm: DigestAlgorithm,
    /// Read window size in bytes.
    pub chunk_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm:  DigestAlgorithm::Sha256,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with the environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(EngineConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load from defaults and the environment.
    pub fn load() -> Result<Self> { Self::from_figment(Self::figment()) }

    /// Load from defaults, the TOML file at `path`, then the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::from_figment(figment)
    }

    /// Extract and validate from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: EngineConfig = figment.extract()?;
        config.validate()?;
        tracing::debug!(algorithm = %config.algorithm, chunk_size = config.chunk_size, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.chunk_size)?;
        Ok(())
    }

    /// Hash options carrying this configuration.
    pub fn options(&self) -> HashOptions {
        HashOptions::default()
            .algorithm(self.algorithm)
            .chunk_size(self.chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MAX_CHUNK_SIZE;
    use crate::error::Error;

    fn from_toml(toml: &str) -> Result<EngineConfig> {
        EngineConfig::from_figment(
            Figment::from(Serialized::defaults(EngineConfig::default())).merge(Toml::string(toml)),
        )
    }

    #[test]
    fn defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn toml_overrides() {
        let config = from_toml("algorithm = \"sha-1\"\nchunk_size = 4096").unwrap();
        assert_eq!(config.algorithm, DigestAlgorithm::Sha1);
        assert_eq!(config.chunk_size, 4096);

        let options = config.options();
        assert_eq!(options.algorithm, DigestAlgorithm::Sha1);
        assert_eq!(options.chunk_size, 4096);
    }

    #[test]
    fn rejects_out_of_range_chunk_size() {
        assert!(matches!(from_toml("chunk_size = 0"), Err(Error::InvalidConfig(_))));

        let too_big = format!("chunk_size = {}", MAX_CHUNK_SIZE + 1);
        assert!(matches!(from_toml(&too_big), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert!(matches!(from_toml("algorithm = \"sha3-512\""), Err(Error::Config(_))));
    }

    #[test]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashmatch.toml");
        std::fs::write(&path, "algorithm = \"md5\"\nchunk_size = 65536\n").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.algorithm, DigestAlgorithm::Md5);
        assert_eq!(config.chunk_size, 65536);
    }
}
