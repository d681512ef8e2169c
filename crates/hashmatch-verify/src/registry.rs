use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::algorithm::DigestAlgorithm;
use crate::error::{Result, VerifyError};
use crate::hasher::Hasher;
use crate::session::DigestSession;

/// Factory for digest sessions of one algorithm.
///
/// Every call to [`init`](DigestBackend::init) must return an independent
/// session; backends never hand out shared state.
pub trait DigestBackend: Send + Sync {
    fn algorithm(&self) -> DigestAlgorithm;

    /// Open a fresh session. Fails with [`VerifyError::Backend`] when the
    /// underlying provider is unavailable.
    fn init(&self) -> Result<DigestSession>;
}

/// Backend built on the RustCrypto hash crates.
#[derive(Debug, Clone, Copy)]
pub struct RustCryptoBackend(DigestAlgorithm);

impl RustCryptoBackend {
    pub fn new(algorithm: DigestAlgorithm) -> Self { Self(algorithm) }

    /// Whether the crate was built with a provider for `algorithm`.
    pub const fn is_available(algorithm: DigestAlgorithm) -> bool {
        match algorithm {
            DigestAlgorithm::Md5 => cfg!(feature = "md5"),
            DigestAlgorithm::Sha1 => cfg!(feature = "sha1"),
            DigestAlgorithm::Sha224 | DigestAlgorithm::Sha256 => cfg!(feature = "sha2"),
        }
    }

    fn hasher(&self) -> Option<Box<dyn Hasher>> {
        match self.0 {
            #[cfg(feature = "md5")]
            DigestAlgorithm::Md5 => Some(Box::new(crate::hasher::Md5Hasher::new())),
            #[cfg(feature = "sha1")]
            DigestAlgorithm::Sha1 => Some(Box::new(crate::hasher::Sha1Hasher::new())),
            #[cfg(feature = "sha2")]
            DigestAlgorithm::Sha224 => Some(Box::new(crate::hasher::Sha224Hasher::new())),
            #[cfg(feature = "sha2")]
            DigestAlgorithm::Sha256 => Some(Box::new(crate::hasher::Sha256Hasher::new())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl DigestBackend for RustCryptoBackend {
    fn algorithm(&self) -> DigestAlgorithm { self.0 }

    fn init(&self) -> Result<DigestSession> {
        let hasher = self
            .hasher()
            .ok_or_else(|| VerifyError::Backend(format!("no {} provider compiled in", self.0)))?;
        Ok(DigestSession::new(self.0, hasher))
    }
}

/// Lookup table from algorithm to backend.
///
/// Built once and then only read, so it can be shared behind an `Arc`
/// across concurrent hash operations without locking.
#[derive(Clone, Default)]
pub struct DigestRegistry {
    backends: BTreeMap<DigestAlgorithm, Arc<dyn DigestBackend>>,
}

impl DigestRegistry {
    /// A registry with no backends.
    pub fn empty() -> Self { Self::default() }

    /// A registry with a RustCrypto backend for every algorithm compiled in.
    pub fn standard() -> Self {
        DigestAlgorithm::ALL
            .into_iter()
            .filter(|algorithm| RustCryptoBackend::is_available(*algorithm))
            .fold(Self::empty(), |registry, algorithm| {
                registry.with_backend(RustCryptoBackend::new(algorithm))
            })
    }

    /// Register `backend`, replacing any previous backend for its algorithm.
    #[must_use]
    pub fn with_backend(mut self, backend: impl DigestBackend + 'static) -> Self {
        self.backends.insert(backend.algorithm(), Arc::new(backend));
        self
    }

    pub fn resolve(&self, algorithm: DigestAlgorithm) -> Result<&dyn DigestBackend> {
        self.backends
            .get(&algorithm)
            .map(|backend| backend.as_ref())
            .ok_or_else(|| VerifyError::UnsupportedAlgorithm(algorithm.to_string()))
    }

    /// Resolve from an untyped selector such as `"sha-256"`.
    pub fn resolve_name(&self, selector: &str) -> Result<&dyn DigestBackend> {
        self.resolve(selector.parse()?)
    }

    /// Resolve and open a fresh session in one step.
    pub fn open(&self, algorithm: DigestAlgorithm) -> Result<DigestSession> {
        self.resolve(algorithm)?.init()
    }

    pub fn supports(&self, algorithm: DigestAlgorithm) -> bool {
        self.backends.contains_key(&algorithm)
    }

    pub fn algorithms(&self) -> impl Iterator<Item = DigestAlgorithm> + '_ {
        self.backends.keys().copied()
    }
}

impl fmt::Debug for DigestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestRegistry")
            .field("algorithms", &self.backends.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unavailable;

    impl DigestBackend for Unavailable {
        fn algorithm(&self) -> DigestAlgorithm { DigestAlgorithm::Sha1 }

        fn init(&self) -> Result<DigestSession> {
            Err(VerifyError::Backend("provider offline".to_string()))
        }
    }

    #[test]
    fn standard_registry_covers_all_algorithms() {
        let registry = DigestRegistry::standard();
        let algorithms: Vec<_> = registry.algorithms().collect();
        assert_eq!(algorithms, DigestAlgorithm::ALL.to_vec());
    }

    #[test]
    fn resolve_name_rejects_unknown_selector() {
        let registry = DigestRegistry::standard();
        let err = registry.resolve_name("sha3-512").err().unwrap();
        assert!(matches!(err, VerifyError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn empty_registry_supports_nothing() {
        let registry = DigestRegistry::empty();
        assert!(!registry.supports(DigestAlgorithm::Sha256));
        assert!(matches!(
            registry.open(DigestAlgorithm::Sha256),
            Err(VerifyError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let registry = DigestRegistry::standard();
        let mut first = registry.open(DigestAlgorithm::Sha256).unwrap();
        let mut second = registry.open(DigestAlgorithm::Sha256).unwrap();

        first.update(b"abc").unwrap();
        let first = first.finalize().unwrap();
        let second = second.finalize().unwrap();

        assert_ne!(first, second);
        assert_eq!(
            second.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn backend_failure_surfaces_from_open() {
        let registry = DigestRegistry::standard().with_backend(Unavailable);
        assert!(matches!(
            registry.open(DigestAlgorithm::Sha1),
            Err(VerifyError::Backend(_))
        ));
        assert!(registry.open(DigestAlgorithm::Md5).is_ok());
    }
}
